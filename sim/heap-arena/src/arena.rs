use crate::Handle;
use thiserror::Error;

/// Fixed-capacity byte region backing all allocations.
///
/// The arena owns its storage for its whole lifetime; dropping it releases
/// the storage and invalidates every handle derived from it. The allocator
/// only performs address arithmetic against the arena — the bytes themselves
/// are never touched by the simulation.
#[derive(Debug)]
pub struct Arena {
    bytes: Box<[u8]>,
}

/// Errors produced while obtaining arena backing storage. Fatal: no arena
/// (and therefore no allocator) exists when construction fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArenaError {
    /// The host allocator refused the reservation.
    #[error("failed to obtain {0} bytes of arena storage")]
    AllocationFailed(usize),
    /// A zero-capacity arena cannot hold any segment.
    #[error("arena capacity must be non-zero")]
    ZeroCapacity,
}

impl Arena {
    /// Reserve a fresh zeroed region of `capacity` bytes.
    ///
    /// # Errors
    /// [`ArenaError::ZeroCapacity`] when `capacity` is zero, and
    /// [`ArenaError::AllocationFailed`] when the host cannot provide the
    /// storage.
    pub fn new(capacity: usize) -> Result<Self, ArenaError> {
        if capacity == 0 {
            return Err(ArenaError::ZeroCapacity);
        }
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(capacity)
            .map_err(|_| ArenaError::AllocationFailed(capacity))?;
        bytes.resize(capacity, 0);
        Ok(Self {
            bytes: bytes.into_boxed_slice(),
        })
    }

    /// Total number of bytes managed by this arena.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Address of the first arena byte.
    #[inline]
    #[must_use]
    pub fn base(&self) -> usize {
        self.bytes.as_ptr().addr()
    }

    /// Derived address of the byte at `offset`: the caller-facing handle of
    /// an allocation starting there.
    #[inline]
    #[must_use]
    pub fn handle_at(&self, offset: usize) -> Handle {
        debug_assert!(offset < self.capacity(), "offset lies inside the arena");
        Handle::new(self.base() + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_matches_request() {
        let arena = Arena::new(1024).unwrap();
        assert_eq!(arena.capacity(), 1024);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(Arena::new(0).unwrap_err(), ArenaError::ZeroCapacity);
    }

    #[test]
    fn handles_derive_from_the_base() {
        let arena = Arena::new(1024).unwrap();

        assert_eq!(arena.handle_at(0).as_usize(), arena.base());
        assert_eq!(arena.handle_at(100).as_usize(), arena.base() + 100);
    }

    #[test]
    fn handles_are_never_null() {
        // The base is a live allocation, so every derived handle is non-null.
        let arena = Arena::new(64).unwrap();
        assert!(!arena.handle_at(0).is_null());
    }
}
