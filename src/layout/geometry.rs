//! Closed-form layout arithmetic.
//!
//! The widget's geometry is fully determined by four numbers (viewport width,
//! content height, menu height, label height) and the pane/title counts.
//! `Metrics` states that arithmetic directly; the taffy bridge realizes the
//! same geometry through flexbox and the two are held in agreement by tests.

use crate::types::{LABEL_CENTER_INSET, Offset};

// =============================================================================
// Metrics
// =============================================================================

/// The dimensional inputs, read once at mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Width of the visible viewport (one pane).
    pub viewport_width: f32,
    /// Height of the main/overlay tracks.
    pub content_height: f32,
    /// Height of the menu track.
    pub menu_height: f32,
    /// Height of each title label box.
    pub label_height: f32,
}

impl Metrics {
    /// Menu scale width: half the viewport.
    #[inline]
    pub fn menu_width(&self) -> f32 {
        self.viewport_width / 2.0
    }

    /// Total width of the main (and overlay) track.
    #[inline]
    pub fn main_track_width(&self, pane_count: usize) -> f32 {
        self.viewport_width * pane_count as f32
    }

    /// Total width of the menu track.
    #[inline]
    pub fn menu_track_width(&self, title_count: usize) -> f32 {
        self.menu_width() * title_count as f32
    }

    /// Origin x of pane `index` within the main track.
    #[inline]
    pub fn pane_origin_x(&self, index: usize) -> f32 {
        self.viewport_width * index as f32
    }

    /// Center x of label `index` within the menu track.
    #[inline]
    pub fn label_center_x(&self, index: usize) -> f32 {
        self.menu_width() * (index + 1) as f32 - LABEL_CENTER_INSET
    }

    /// Left edge of label `index` (labels are one menu-width wide).
    #[inline]
    pub fn label_left_x(&self, index: usize) -> f32 {
        self.label_center_x(index) - self.menu_width() / 2.0
    }

    /// Top edge of every label: vertically centered in the menu track.
    #[inline]
    pub fn label_top(&self) -> f32 {
        (self.menu_height - self.label_height) / 2.0
    }

    /// The offset the full-scale surfaces start at for a given pane index.
    ///
    /// Stored raw: an out-of-range index lands past the content edge.
    #[inline]
    pub fn initial_offset(&self, index: usize) -> Offset {
        Offset::new(self.viewport_width * index as f32, 0.0)
    }
}
