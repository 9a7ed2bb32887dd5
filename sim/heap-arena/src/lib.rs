//! # Arena, Segment, and Handle Types
//!
//! Strongly typed building blocks for the heap simulation, shared between
//! the allocator crate and any external driver.
//!
//! ## Overview
//!
//! The simulation models a fixed-size byte region carved into contiguous
//! segments. This crate holds the leaf types of that model:
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Arena`] | Fixed-capacity byte region backing all allocations. |
//! | [`Segment`] | A contiguous `{start, len}` range of the arena. |
//! | [`Handle`] | Caller-visible derived address of an allocated segment. |
//!
//! The arena owns real bytes so that handles are genuine addresses, but the
//! allocator logic only ever does address arithmetic against it; the payload
//! bytes are never read or written by the simulation.
//!
//! ## Typical Usage
//!
//! ```rust
//! # use heap_arena::*;
//! let arena = Arena::new(1024)?;
//! assert_eq!(arena.capacity(), 1024);
//!
//! // A handle is the address of an offset within the arena.
//! let handle = arena.handle_at(100);
//! assert_eq!(handle.as_usize() - arena.base(), 100);
//!
//! // Segments describe ranges of the arena by offset.
//! let seg = Segment::new(0, 100);
//! assert!(seg.abuts(Segment::new(100, 924)));
//! # Ok::<(), ArenaError>(())
//! ```

mod arena;
mod handle;
mod segment;

pub use arena::{Arena, ArenaError};
pub use handle::Handle;
pub use segment::Segment;
