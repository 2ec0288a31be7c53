//! Core Arrays - Identity and tree structure
//!
//! - kind: What the component is (track, pane, label)
//! - parentIndex: Tree parent (-1 = root)
//! - ordinal: Position within the parent track (pane i, label i)
//!
//! Uses `TrackedSlotArray` for stable reactive cells with fine-grained tracking.

use spark_signals::{TrackedSlotArray, tracked_slot_array};
use crate::types::ComponentKind;
use super::ClearAll;
use super::dirty::ARRAY_DIRTY_SET;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Component kind.
    static KIND: TrackedSlotArray<ComponentKind> = tracked_slot_array(
        Some(ComponentKind::None),
        ARRAY_DIRTY_SET.with(|s| s.clone())
    );

    /// Parent index (-1 = no parent / root).
    static PARENT_INDEX: TrackedSlotArray<i32> = tracked_slot_array(
        Some(-1),
        ARRAY_DIRTY_SET.with(|s| s.clone())
    );

    /// Ordinal within the parent track (pane/label position).
    static ORDINAL: TrackedSlotArray<usize> = tracked_slot_array(
        Some(0),
        ARRAY_DIRTY_SET.with(|s| s.clone())
    );
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    KIND.with(|arr| { let _ = arr.peek(index); });
    PARENT_INDEX.with(|arr| { let _ = arr.peek(index); });
    ORDINAL.with(|arr| { let _ = arr.peek(index); });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    KIND.with(|arr| arr.clear(index));
    PARENT_INDEX.with(|arr| arr.clear(index));
    ORDINAL.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    KIND.with(|arr| arr.clear_all());
    PARENT_INDEX.with(|arr| arr.clear_all());
    ORDINAL.with(|arr| arr.clear_all());
}

// =============================================================================
// Kind
// =============================================================================

/// Get component kind at index (reactive).
pub fn get_kind(index: usize) -> ComponentKind {
    KIND.with(|arr| arr.get(index)).unwrap_or(ComponentKind::None)
}

/// Set component kind at index.
pub fn set_kind(index: usize, kind: ComponentKind) {
    KIND.with(|arr| arr.set_value(index, kind));
}

// =============================================================================
// Parent Index
// =============================================================================

/// Get parent index at index (reactive). None = root.
pub fn get_parent_index(index: usize) -> Option<usize> {
    let raw = PARENT_INDEX.with(|arr| arr.get(index)).unwrap_or(-1);
    if raw < 0 { None } else { Some(raw as usize) }
}

/// Set parent index at index.
pub fn set_parent_index(index: usize, parent: Option<usize>) {
    let raw = match parent {
        Some(p) => p as i32,
        None => -1,
    };
    PARENT_INDEX.with(|arr| arr.set_value(index, raw));
}

// =============================================================================
// Ordinal
// =============================================================================

/// Get ordinal at index (reactive).
pub fn get_ordinal(index: usize) -> usize {
    ORDINAL.with(|arr| arr.get(index)).unwrap_or(0)
}

/// Set ordinal at index.
pub fn set_ordinal(index: usize, ordinal: usize) {
    ORDINAL.with(|arr| arr.set_value(index, ordinal));
}
