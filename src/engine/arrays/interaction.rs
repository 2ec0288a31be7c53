//! Interaction Arrays - Scroll state
//!
//! The stored scroll offset per surface track. These are the values the
//! mirror rule reads and writes; hosts observe them through effects.
//!
//! Offsets are `f32`: the menu runs at exactly half the horizontal scale of
//! the full-width tracks, and vertical slack may go negative.
//!
//! Uses `TrackedSlotArray` for stable reactive cells with fine-grained tracking.

use spark_signals::{TrackedSlotArray, tracked_slot_array};
use super::ClearAll;
use super::dirty::ARRAY_DIRTY_SET;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Scroll offset X.
    static SCROLL_OFFSET_X: TrackedSlotArray<f32> = tracked_slot_array(
        Some(0.0),
        ARRAY_DIRTY_SET.with(|s| s.clone())
    );

    /// Scroll offset Y.
    static SCROLL_OFFSET_Y: TrackedSlotArray<f32> = tracked_slot_array(
        Some(0.0),
        ARRAY_DIRTY_SET.with(|s| s.clone())
    );
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    SCROLL_OFFSET_X.with(|arr| { let _ = arr.peek(index); });
    SCROLL_OFFSET_Y.with(|arr| { let _ = arr.peek(index); });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    SCROLL_OFFSET_X.with(|arr| arr.clear(index));
    SCROLL_OFFSET_Y.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    SCROLL_OFFSET_X.with(|arr| arr.clear_all());
    SCROLL_OFFSET_Y.with(|arr| arr.clear_all());
}

// =============================================================================
// Scroll Offset
// =============================================================================

/// Get scroll offset X at index (reactive).
pub fn get_scroll_offset_x(index: usize) -> f32 {
    SCROLL_OFFSET_X.with(|arr| arr.get(index)).unwrap_or(0.0)
}

/// Get scroll offset Y at index (reactive).
pub fn get_scroll_offset_y(index: usize) -> f32 {
    SCROLL_OFFSET_Y.with(|arr| arr.get(index)).unwrap_or(0.0)
}

/// Set scroll offset at index.
///
/// Raw write: no clamping. Out-of-range values are a tolerated degenerate
/// state; clamping is the host's concern.
pub fn set_scroll_offset(index: usize, x: f32, y: f32) {
    SCROLL_OFFSET_X.with(|arr| arr.set_value(index, x));
    SCROLL_OFFSET_Y.with(|arr| arr.set_value(index, y));
}
