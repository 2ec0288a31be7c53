//! Scroll State Module
//!
//! Offset access over the interaction arrays plus the boundary math hosts
//! need when they present a track through a viewport:
//! - Stored offsets are raw: the widget never clamps (out-of-range values
//!   are a tolerated degenerate state)
//! - Max-scroll and clamp helpers exist for hosts that want toolkit-style
//!   edge behavior
//! - `scroll_by` is the wheel-style clamped nudge with boundary reporting

use crate::engine::arrays::{interaction, placement};
use crate::types::Offset;

// =============================================================================
// SCROLL CONSTANTS
// =============================================================================

/// Default scroll amount for mouse wheel.
pub const WHEEL_SCROLL: f32 = 3.0;

// =============================================================================
// SCROLL STATE ACCESS
// =============================================================================

/// Get the stored scroll offset for a track (reactive).
pub fn offset(index: usize) -> Offset {
    Offset {
        x: interaction::get_scroll_offset_x(index),
        y: interaction::get_scroll_offset_y(index),
    }
}

/// Set the stored scroll offset for a track.
///
/// Raw write, no clamping.
pub fn set_offset(index: usize, offset: Offset) {
    interaction::set_scroll_offset(index, offset.x, offset.y);
}

/// Maximum scroll values for a track presented through a viewport.
///
/// Returns (max_x, max_y), floored at zero (content smaller than the
/// viewport never scrolls).
pub fn max_scroll(index: usize, viewport_width: f32, viewport_height: f32) -> (f32, f32) {
    let (content_w, content_h) = placement::get_content_size(index);
    (
        (content_w - viewport_width).max(0.0),
        (content_h - viewport_height).max(0.0),
    )
}

// =============================================================================
// SCROLL OPERATIONS
// =============================================================================

/// Clamp an offset into `[0, max]` on both axes.
pub fn clamp_offset(offset: Offset, max: (f32, f32)) -> Offset {
    Offset {
        x: offset.x.clamp(0.0, max.0.max(0.0)),
        y: offset.y.clamp(0.0, max.1.max(0.0)),
    }
}

/// Scroll by a delta amount, clamped into `[0, max]`.
///
/// Returns `true` if the offset actually changed, `false` at a boundary.
pub fn scroll_by(index: usize, delta_x: f32, delta_y: f32, max: (f32, f32)) -> bool {
    let current = offset(index);
    let next = clamp_offset(
        Offset::new(current.x + delta_x, current.y + delta_y),
        max,
    );

    if next == current {
        return false; // Already at boundary
    }

    set_offset(index, next);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::{interaction, placement};

    fn setup() {
        interaction::reset();
        placement::reset();
    }

    #[test]
    fn test_offset_roundtrip() {
        setup();

        assert_eq!(offset(0), Offset::ZERO);

        set_offset(0, Offset::new(320.0, -4.0));
        assert_eq!(offset(0), Offset::new(320.0, -4.0));
    }

    #[test]
    fn test_set_offset_is_raw() {
        setup();

        placement::set_content_size(0, 960.0, 200.0);

        // Way past the content edge: stored as-is
        set_offset(0, Offset::new(5000.0, 0.0));
        assert_eq!(offset(0).x, 5000.0);
    }

    #[test]
    fn test_max_scroll() {
        setup();

        placement::set_content_size(0, 960.0, 200.0);
        assert_eq!(max_scroll(0, 320.0, 200.0), (640.0, 0.0));

        // Content narrower than viewport: floored at zero
        placement::set_content_size(1, 160.0, 200.0);
        assert_eq!(max_scroll(1, 320.0, 200.0), (0.0, 0.0));
    }

    #[test]
    fn test_clamp_offset() {
        let max = (640.0, 0.0);
        assert_eq!(
            clamp_offset(Offset::new(700.0, 5.0), max),
            Offset::new(640.0, 0.0)
        );
        assert_eq!(
            clamp_offset(Offset::new(-10.0, -5.0), max),
            Offset::ZERO
        );
        assert_eq!(
            clamp_offset(Offset::new(320.0, 0.0), max),
            Offset::new(320.0, 0.0)
        );
    }

    #[test]
    fn test_scroll_by_clamps_and_reports() {
        setup();

        placement::set_content_size(0, 960.0, 200.0);
        let max = max_scroll(0, 320.0, 200.0);

        assert!(scroll_by(0, 100.0, 0.0, max));
        assert_eq!(offset(0), Offset::new(100.0, 0.0));

        // Overshoot clamps to max
        assert!(scroll_by(0, 10_000.0, 0.0, max));
        assert_eq!(offset(0), Offset::new(640.0, 0.0));

        // At boundary: no change
        assert!(!scroll_by(0, 1.0, 0.0, max));

        // Negative delta back down, clamped at zero
        assert!(scroll_by(0, -10_000.0, 0.0, max));
        assert_eq!(offset(0), Offset::ZERO);
        assert!(!scroll_by(0, -1.0, 0.0, max));
    }
}
