use core::fmt;

/// A contiguous range of the arena, either free or allocated.
///
/// Offsets are relative to the arena base. A segment never has zero length;
/// an exact-fit allocation removes the free segment outright instead of
/// leaving an empty residual.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Segment {
    /// Offset of the first byte covered by this segment.
    pub start: usize,
    /// Size of the segment in bytes (non-zero).
    pub len: usize,
}

impl Segment {
    /// Create a segment covering `[start, start + len)`.
    #[inline]
    #[must_use]
    pub const fn new(start: usize, len: usize) -> Self {
        debug_assert!(len > 0, "segments cover at least one byte");
        Self { start, len }
    }

    /// One past the last offset covered by this segment.
    #[inline]
    #[must_use]
    pub const fn end(self) -> usize {
        self.start + self.len
    }

    /// `true` when `other` begins exactly where this segment ends.
    ///
    /// This is the adjacency test coalescing uses: abutting free segments
    /// merge, segments with any gap between them do not.
    #[inline]
    #[must_use]
    pub const fn abuts(self, other: Self) -> bool {
        self.end() == other.start
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment {{ start: {}, len: {} }}", self.start, self.len)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}
