//! # First-Fit Free-List Heap Simulation
//!
//! A user-space model of the classic free-list / allocated-list dynamic
//! memory allocator: a fixed-size byte arena is carved into contiguous
//! segments, allocation picks a free segment by first fit and splits it,
//! release returns the segment and merges it with abutting free neighbors
//! to counter fragmentation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 HeapAllocator                       │
//! │    • first-fit search, split on allocate            │
//! │    • handle lookup, coalesce on release             │
//! │    • snapshots and byte accounting                  │
//! └─────────────────┬───────────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────────┐
//! │                  Free list                          │
//! │    • segments ascending by start address            │
//! │    • ordered insert, carve, coalesce                │
//! └─────────────────┬───────────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────────┐
//! │              Arena (heap-arena)                     │
//! │    • fixed-capacity byte region                     │
//! │    • derived addresses (handles)                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Both segment sets are exclusively owned by one [`HeapAllocator`] value;
//! the design is single-threaded and synchronous, driven by one logical
//! caller from initialization to drop. Errors are reported through the
//! operation results and never retried internally.
//!
//! ## Example
//!
//! ```rust
//! use heap_alloc::HeapAllocator;
//!
//! let mut heap = HeapAllocator::new(1024)?;
//!
//! let a = heap.allocate(100)?;
//! let b = heap.allocate(200)?;
//! assert_eq!(heap.free_bytes(), 724);
//!
//! heap.release(a)?;
//! heap.release(b)?;
//!
//! // everything merged back into one spanning segment
//! assert_eq!(heap.snapshot().free.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod allocator;
mod free_list;
mod snapshot;

pub use allocator::{AllocateError, HeapAllocator, ReleaseError};
pub use heap_arena::{Arena, ArenaError, Handle, Segment};
pub use snapshot::HeapSnapshot;
