//! Parallel Arrays
//!
//! All component state lives in these parallel arrays.
//! Each array index corresponds to one component.
//!
//! Components write directly to these arrays using `set_value()`.
//! Effects and deriveds read from them via `.get()`.
//!
//! All arrays use `TrackedSlotArray` for stable reactive cells with fine-grained
//! per-index tracking. This ensures that deriveds only re-run when the specific
//! indices they access have changed.
//!
//! # Array Categories
//!
//! - **core**: Component kind, parent, ordinal
//! - **placement**: Resolved rects and track content extents
//! - **interaction**: Scroll offsets
//! - **text**: Label titles

pub mod core;
pub mod dirty;
pub mod placement;
pub mod interaction;
pub mod text;

use spark_signals::TrackedSlotArray;

use self::core as core_arrays;
use self::placement as placement_arrays;
use self::interaction as interaction_arrays;
use self::text as text_arrays;

/// Extension trait: clear every slot of a tracked array back to its default.
pub trait ClearAll {
    fn clear_all(&self);
}

impl<T: Clone + PartialEq + 'static> ClearAll for TrackedSlotArray<T> {
    fn clear_all(&self) {
        for index in 0..self.len() {
            self.clear(index);
        }
    }
}

/// Ensure all arrays have capacity for the given index.
///
/// Called by registry when allocating.
pub fn ensure_all_capacity(index: usize) {
    core_arrays::ensure_capacity(index);
    placement_arrays::ensure_capacity(index);
    interaction_arrays::ensure_capacity(index);
    text_arrays::ensure_capacity(index);
}

/// Clear all array values at an index.
///
/// Called by registry when releasing.
pub fn clear_all_at_index(index: usize) {
    core_arrays::clear_at_index(index);
    placement_arrays::clear_at_index(index);
    interaction_arrays::clear_at_index(index);
    text_arrays::clear_at_index(index);
}

/// Reset all parallel arrays to release memory.
///
/// Called automatically when all components are destroyed.
pub fn reset_all_arrays() {
    core_arrays::reset();
    placement_arrays::reset();
    interaction_arrays::reset();
    text_arrays::reset();
}
