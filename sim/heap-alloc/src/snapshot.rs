use core::fmt;
use heap_arena::Segment;

/// Point-in-time copy of both segment lists, for display or assertions.
///
/// `free` is in ascending address order, `allocated` in insertion order —
/// the same orders the allocator maintains internally. The [`Display`]
/// rendering prints the two `start`/`length` tables, free segments first,
/// the way an operator console would show them.
///
/// [`Display`]: core::fmt::Display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapSnapshot {
    /// Free segments, ascending by `start`.
    pub free: Vec<Segment>,
    /// Allocated segments, in insertion order.
    pub allocated: Vec<Segment>,
}

impl HeapSnapshot {
    /// Total bytes across the free segments.
    #[must_use]
    pub fn free_bytes(&self) -> usize {
        self.free.iter().map(|seg| seg.len).sum()
    }

    /// Total bytes across the allocated segments.
    #[must_use]
    pub fn allocated_bytes(&self) -> usize {
        self.allocated.iter().map(|seg| seg.len).sum()
    }
}

impl fmt::Display for HeapSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Free segments")?;
        write_table(f, &self.free)?;
        writeln!(f, "Allocated segments")?;
        write_table(f, &self.allocated)
    }
}

fn write_table(f: &mut fmt::Formatter<'_>, segments: &[Segment]) -> fmt::Result {
    writeln!(f, "start\tlength")?;
    for seg in segments {
        writeln!(f, "{}\t{}", seg.start, seg.len)?;
    }
    Ok(())
}
