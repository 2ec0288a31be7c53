//! Placement Arrays - Resolved geometry
//!
//! Absolute positions and sizes produced by the layout pass, plus per-track
//! content extents. Written once at mount (geometry is immutable afterward);
//! reads are reactive so hosts can lay out their own chrome around them.
//!
//! Uses `TrackedSlotArray` for stable reactive cells with fine-grained tracking.

use spark_signals::{TrackedSlotArray, tracked_slot_array};
use crate::types::Rect;
use super::ClearAll;
use super::dirty::ARRAY_DIRTY_SET;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Resolved x position.
    static X: TrackedSlotArray<f32> = tracked_slot_array(
        Some(0.0),
        ARRAY_DIRTY_SET.with(|s| s.clone())
    );

    /// Resolved y position.
    static Y: TrackedSlotArray<f32> = tracked_slot_array(
        Some(0.0),
        ARRAY_DIRTY_SET.with(|s| s.clone())
    );

    /// Resolved width.
    static WIDTH: TrackedSlotArray<f32> = tracked_slot_array(
        Some(0.0),
        ARRAY_DIRTY_SET.with(|s| s.clone())
    );

    /// Resolved height.
    static HEIGHT: TrackedSlotArray<f32> = tracked_slot_array(
        Some(0.0),
        ARRAY_DIRTY_SET.with(|s| s.clone())
    );

    /// Total content width (tracks only; equals the track's own width).
    static CONTENT_WIDTH: TrackedSlotArray<f32> = tracked_slot_array(
        Some(0.0),
        ARRAY_DIRTY_SET.with(|s| s.clone())
    );

    /// Total content height (tracks only).
    static CONTENT_HEIGHT: TrackedSlotArray<f32> = tracked_slot_array(
        Some(0.0),
        ARRAY_DIRTY_SET.with(|s| s.clone())
    );
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    X.with(|arr| { let _ = arr.peek(index); });
    Y.with(|arr| { let _ = arr.peek(index); });
    WIDTH.with(|arr| { let _ = arr.peek(index); });
    HEIGHT.with(|arr| { let _ = arr.peek(index); });
    CONTENT_WIDTH.with(|arr| { let _ = arr.peek(index); });
    CONTENT_HEIGHT.with(|arr| { let _ = arr.peek(index); });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    X.with(|arr| arr.clear(index));
    Y.with(|arr| arr.clear(index));
    WIDTH.with(|arr| arr.clear(index));
    HEIGHT.with(|arr| arr.clear(index));
    CONTENT_WIDTH.with(|arr| arr.clear(index));
    CONTENT_HEIGHT.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    X.with(|arr| arr.clear_all());
    Y.with(|arr| arr.clear_all());
    WIDTH.with(|arr| arr.clear_all());
    HEIGHT.with(|arr| arr.clear_all());
    CONTENT_WIDTH.with(|arr| arr.clear_all());
    CONTENT_HEIGHT.with(|arr| arr.clear_all());
}

// =============================================================================
// Rect
// =============================================================================

/// Get the resolved rect at index (reactive).
pub fn get_rect(index: usize) -> Rect {
    Rect {
        x: X.with(|arr| arr.get(index)).unwrap_or(0.0),
        y: Y.with(|arr| arr.get(index)).unwrap_or(0.0),
        width: WIDTH.with(|arr| arr.get(index)).unwrap_or(0.0),
        height: HEIGHT.with(|arr| arr.get(index)).unwrap_or(0.0),
    }
}

/// Set the resolved rect at index.
pub fn set_rect(index: usize, rect: Rect) {
    X.with(|arr| arr.set_value(index, rect.x));
    Y.with(|arr| arr.set_value(index, rect.y));
    WIDTH.with(|arr| arr.set_value(index, rect.width));
    HEIGHT.with(|arr| arr.set_value(index, rect.height));
}

// =============================================================================
// Content Size
// =============================================================================

/// Get content size at index (reactive). Meaningful for tracks.
pub fn get_content_size(index: usize) -> (f32, f32) {
    (
        CONTENT_WIDTH.with(|arr| arr.get(index)).unwrap_or(0.0),
        CONTENT_HEIGHT.with(|arr| arr.get(index)).unwrap_or(0.0),
    )
}

/// Set content size at index.
pub fn set_content_size(index: usize, width: f32, height: f32) {
    CONTENT_WIDTH.with(|arr| arr.set_value(index, width));
    CONTENT_HEIGHT.with(|arr| arr.set_value(index, height));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset();
    }

    #[test]
    fn test_rect_roundtrip() {
        setup();

        assert_eq!(get_rect(0), Rect::default());

        let r = Rect::new(320.0, 0.0, 320.0, 200.0);
        set_rect(0, r);
        assert_eq!(get_rect(0), r);
    }

    #[test]
    fn test_content_size() {
        setup();

        assert_eq!(get_content_size(0), (0.0, 0.0));

        set_content_size(0, 960.0, 200.0);
        assert_eq!(get_content_size(0), (960.0, 200.0));
    }

    #[test]
    fn test_clear_at_index() {
        setup();

        set_rect(2, Rect::new(1.0, 2.0, 3.0, 4.0));
        set_content_size(2, 5.0, 6.0);

        clear_at_index(2);

        assert_eq!(get_rect(2), Rect::default());
        assert_eq!(get_content_size(2), (0.0, 0.0));
    }
}
