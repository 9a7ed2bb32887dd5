use core::fmt;

/// Caller-visible identifier of an allocated segment: the derived address
/// `arena_base + start`.
///
/// A handle is only meaningful while its allocation is live, and it carries
/// no permission to read or write arena bytes; it exists so that a release
/// request can name the allocation it refers to, exactly like a pointer
/// returned by a real allocator.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Handle(usize);

impl Handle {
    /// The null handle. Never returned by a successful allocation.
    pub const NULL: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn new(addr: usize) -> Self {
        Self(addr)
    }

    /// The raw derived address.
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0
    }

    /// `true` for [`Handle::NULL`].
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({:#x})", self.0)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handle_is_null() {
        assert!(Handle::NULL.is_null());
        assert!(Handle::default().is_null());
        assert!(!Handle::new(0x1000).is_null());
    }

    #[test]
    fn handles_compare_by_address() {
        assert_eq!(Handle::new(64), Handle::new(64));
        assert!(Handle::new(64) < Handle::new(128));
    }
}
