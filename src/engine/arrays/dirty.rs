//! Dirty Tracking - Modified-index set shared by the parallel arrays.
//!
//! Every tracked array records the index of each write into this set. Hosts
//! that batch their redraws can drain it once per frame instead of
//! subscribing to individual cells.

use spark_signals::{dirty_set, DirtySet};

thread_local! {
    /// Indices modified since the last drain.
    pub(super) static ARRAY_DIRTY_SET: DirtySet = dirty_set();
}

/// Drain and return the indices modified since the last call.
pub fn take_dirty_indices() -> Vec<usize> {
    ARRAY_DIRTY_SET.with(|set| {
        let mut set = set.borrow_mut();
        let indices: Vec<usize> = set.iter().copied().collect();
        set.clear();
        indices
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::{core, interaction};
    use crate::types::ComponentKind;

    #[test]
    fn test_writes_mark_indices_dirty() {
        let _ = take_dirty_indices();

        interaction::set_scroll_offset(3, 10.0, 0.0);
        core::set_kind(5, ComponentKind::Pane);

        let dirty = take_dirty_indices();
        assert!(dirty.contains(&3));
        assert!(dirty.contains(&5));

        // Draining clears the set
        assert!(take_dirty_indices().is_empty());
    }
}
