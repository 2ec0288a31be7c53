//! Text Arrays - Title label content
//!
//! One column: the label's title string. Set once at mount from the props'
//! title list.
//!
//! Uses `TrackedSlotArray` for stable reactive cells with fine-grained tracking.

use spark_signals::{TrackedSlotArray, tracked_slot_array};
use super::ClearAll;
use super::dirty::ARRAY_DIRTY_SET;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Label text string.
    static LABEL_TEXT: TrackedSlotArray<String> = tracked_slot_array(
        Some(String::new()),
        ARRAY_DIRTY_SET.with(|s| s.clone())
    );
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    LABEL_TEXT.with(|arr| { let _ = arr.peek(index); });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    LABEL_TEXT.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    LABEL_TEXT.with(|arr| arr.clear_all());
}

// =============================================================================
// Label Text
// =============================================================================

/// Get label text at index (reactive).
pub fn get_label_text(index: usize) -> String {
    LABEL_TEXT.with(|arr| arr.get(index)).unwrap_or_default()
}

/// Set label text at index.
pub fn set_label_text(index: usize, text: String) {
    LABEL_TEXT.with(|arr| arr.set_value(index, text));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset();
    }

    #[test]
    fn test_label_text() {
        setup();

        assert_eq!(get_label_text(0), "");

        set_label_text(0, "Home".to_string());
        assert_eq!(get_label_text(0), "Home");
    }

    #[test]
    fn test_clear_at_index() {
        setup();

        set_label_text(2, "News".to_string());
        clear_at_index(2);
        assert_eq!(get_label_text(2), "");
    }
}
