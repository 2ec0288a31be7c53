//! Carousel component types - Props and the pane content boundary.

use crate::types::{Rect, DEFAULT_INITIAL_INDEX, DEFAULT_LABEL_HEIGHT};

// =============================================================================
// Cleanup Type
// =============================================================================

/// Cleanup function returned by subscriptions and content attachment.
/// Call it to release resources.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Pane Content
// =============================================================================

/// Host-side content embedded into one pane.
///
/// The carousel owns its contents exclusively for its full lifetime. At mount
/// it calls `attach` once per pane with the pane's engine index and resolved
/// bounds (the full pane rect, one viewport wide). A returned cleanup runs
/// when the pane is destroyed.
pub trait PaneContent {
    fn attach(&mut self, pane_index: usize, bounds: Rect) -> Option<Cleanup>;
}

// =============================================================================
// Carousel Props
// =============================================================================

/// Props for [`Carousel::mount`](crate::carousel::Carousel::mount).
///
/// `contents` and `titles` should have the same length for the widget to make
/// semantic sense; a mismatch is tolerated and only recorded in the
/// degenerate flags. Same for an out-of-range `initial_index`.
pub struct CarouselProps {
    // =========================================================================
    // Identity
    // =========================================================================
    /// Optional component ID prefix. Tracks register as `{id}.main`,
    /// `{id}.overlay` and `{id}.menu` for registry lookup.
    pub id: Option<String>,

    // =========================================================================
    // Dimensions - read once at mount
    // =========================================================================
    /// Width of the visible viewport (one pane).
    pub viewport_width: f32,

    /// Height of the main and overlay tracks.
    pub content_height: f32,

    /// Height of the menu track.
    pub menu_height: f32,

    /// Height of each title label box (default 21.0).
    pub label_height: f32,

    // =========================================================================
    // Content
    // =========================================================================
    /// Ordered pane contents, one per pane.
    pub contents: Vec<Box<dyn PaneContent>>,

    /// Ordered title strings, one per menu label.
    pub titles: Vec<String>,

    /// The pane the carousel starts on (default 1; not bounds-checked).
    pub initial_index: usize,
}

impl Default for CarouselProps {
    fn default() -> Self {
        Self {
            id: None,
            viewport_width: 0.0,
            content_height: 0.0,
            menu_height: 0.0,
            label_height: DEFAULT_LABEL_HEIGHT,
            contents: Vec::new(),
            titles: Vec::new(),
            initial_index: DEFAULT_INITIAL_INDEX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_defaults() {
        let props = CarouselProps::default();
        assert_eq!(props.id, None);
        assert_eq!(props.label_height, 21.0);
        assert_eq!(props.initial_index, 1);
        assert!(props.contents.is_empty());
        assert!(props.titles.is_empty());
    }
}
