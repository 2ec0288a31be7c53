//! Engine - Component registry and parallel arrays.
//!
//! The engine manages the core data structures:
//! - Registry: Index allocation, ID mapping, destroy callbacks
//! - Arrays: Parallel SlotArrays for component state
//!
//! # Architecture
//!
//! Components are NOT objects. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: Track (main,    parent=-1, width=960, offset=(320,0), ...)
//! Index 1: Pane  (ordinal=0, parent=0, x=0,   width=320, ...)
//! Index 2: Pane  (ordinal=1, parent=0, x=320, width=320, ...)
//! ```
//!
//! This keeps every cell a stable reactive Slot that never moves, so hosts
//! can subscribe to a single track's offset without touching the rest.

mod registry;
pub mod arrays;

pub use registry::*;
