use heap_arena::{Arena, ArenaError, Handle, Segment};
use log::{debug, trace, warn};
use thiserror::Error;

use crate::free_list::FreeList;
use crate::snapshot::HeapSnapshot;

/// Errors returned by [`HeapAllocator::allocate`]. Recoverable; the heap
/// state is unchanged when allocation fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocateError {
    /// Requests must cover at least one byte.
    #[error("invalid allocation size: requests must be non-zero")]
    InvalidSize,
    /// No free segment is large enough for the request.
    #[error("out of memory: no free segment holds {0} bytes")]
    OutOfMemory(usize),
}

/// Errors returned by [`HeapAllocator::release`]. Recoverable; the heap
/// state is unchanged when release fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReleaseError {
    /// The null handle names no allocation.
    #[error("cannot release the null handle")]
    NullHandle,
    /// The handle matches no live allocation (double free or foreign
    /// pointer).
    #[error("handle {0} is not an allocated segment")]
    NotAllocated(Handle),
}

/// First-fit free-list allocator over a fixed-size [`Arena`].
///
/// Two segment sets partition the arena at all times:
///
/// ```text
/// ┌────────────┬──────────────────┬───────┬──────────────────────────┐
/// │ allocated  │       free       │ alloc │           free           │
/// └────────────┴──────────────────┴───────┴──────────────────────────┘
/// 0                                                           capacity
/// ```
///
/// - the **free list**, kept in ascending address order for coalescing, and
/// - the **allocated list**, in insertion order, one entry per live handle.
///
/// [`allocate`](Self::allocate) splits the first free segment that fits;
/// [`release`](Self::release) returns a segment to the free list and merges
/// it with abutting neighbors. Every operation runs to completion and leaves
/// both sets covering `[0, capacity)` exactly, with no overlap.
pub struct HeapAllocator {
    arena: Arena,
    free: FreeList,
    allocated: Vec<Segment>,
}

impl HeapAllocator {
    /// Create an allocator over a fresh `capacity`-byte arena, with a single
    /// free segment spanning it and no allocations.
    ///
    /// Dropping the allocator tears everything down: the arena storage and
    /// all segment records go away together.
    ///
    /// # Errors
    /// [`ArenaError`] when the backing storage cannot be obtained; no
    /// allocator instance exists in that case.
    pub fn new(capacity: usize) -> Result<Self, ArenaError> {
        let arena = Arena::new(capacity)?;
        debug!("heap initialized with {capacity} bytes");
        Ok(Self {
            arena,
            free: FreeList::spanning(capacity),
            allocated: Vec::new(),
        })
    }

    /// Allocate `size` bytes by first fit.
    ///
    /// The free list is scanned in ascending address order and the first
    /// segment with `len >= size` is chosen, even when a tighter fit exists
    /// later. The allocated range is carved from the front of the chosen
    /// segment; an exact fit consumes it entirely. No coalescing happens on
    /// this path.
    ///
    /// # Errors
    /// [`AllocateError::InvalidSize`] for zero-byte requests and
    /// [`AllocateError::OutOfMemory`] when no free segment is large enough.
    /// Failed allocations have no side effects.
    pub fn allocate(&mut self, size: usize) -> Result<Handle, AllocateError> {
        if size == 0 {
            return Err(AllocateError::InvalidSize);
        }
        let index = self
            .free
            .first_fit(size)
            .ok_or(AllocateError::OutOfMemory(size))?;
        let seg = self.free.carve(index, size);
        let handle = self.arena.handle_at(seg.start);
        self.allocated.push(seg);
        debug!("allocated {size} bytes at offset {} -> {handle}", seg.start);
        Ok(handle)
    }

    /// Release the allocation identified by `handle`.
    ///
    /// The matching segment moves from the allocated list back into the free
    /// list at its address-ordered position, and abutting free neighbors are
    /// merged unconditionally afterwards.
    ///
    /// # Errors
    /// [`ReleaseError::NullHandle`] for the null handle and
    /// [`ReleaseError::NotAllocated`] when `handle` matches no live
    /// allocation (a double free or a foreign pointer). Failed releases
    /// leave both segment sets untouched.
    pub fn release(&mut self, handle: Handle) -> Result<(), ReleaseError> {
        if handle.is_null() {
            return Err(ReleaseError::NullHandle);
        }
        let Some(index) = self
            .allocated
            .iter()
            .position(|seg| self.arena.handle_at(seg.start) == handle)
        else {
            warn!("release of unallocated handle {handle}");
            return Err(ReleaseError::NotAllocated(handle));
        };
        let seg = self.allocated.remove(index);
        self.free.insert(seg);
        let merged = self.free.coalesce();
        debug!(
            "released {} bytes at offset {} ({merged} free segments merged)",
            seg.len, seg.start
        );
        Ok(())
    }

    /// Merge abutting free segments.
    ///
    /// This already runs after every successful release; calling it again is
    /// a no-op and is exposed for diagnostics.
    pub fn coalesce(&mut self) {
        let merged = self.free.coalesce();
        if merged > 0 {
            trace!("coalesce merged {merged} free segments");
        }
    }

    /// Read-only copy of both segment lists: free segments in ascending
    /// address order, allocated segments in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> HeapSnapshot {
        HeapSnapshot {
            free: self.free.segments().to_vec(),
            allocated: self.allocated.clone(),
        }
    }

    /// Total bytes managed by the arena.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Bytes currently free. Together with [`allocated_bytes`](Self::allocated_bytes)
    /// this always sums to [`capacity`](Self::capacity).
    #[must_use]
    pub fn free_bytes(&self) -> usize {
        self.free.total_bytes()
    }

    /// Bytes currently allocated.
    #[must_use]
    pub fn allocated_bytes(&self) -> usize {
        self.allocated.iter().map(|seg| seg.len).sum()
    }

    /// Number of live allocations.
    #[must_use]
    pub fn allocation_count(&self) -> usize {
        self.allocated.len()
    }
}
