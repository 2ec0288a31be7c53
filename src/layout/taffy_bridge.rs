//! Taffy Bridge - Realizes the widget geometry with the Taffy layout engine.
//!
//! Builds one Taffy subtree per track:
//! - main: flex Row sized `pane_count * viewport_width`, fixed-width pane children
//! - overlay: a leaf sized exactly like main (it exists to catch gestures)
//! - menu: sized `title_count * menu_width`, absolutely-positioned label children
//!
//! Runs layout computation and extracts absolute rects and track content
//! extents into the placement arrays. Geometry is immutable afterward.

use std::collections::HashMap;

use taffy::{
    AvailableSpace, Dimension as TaffyDimension, Display, FlexDirection as TaffyFlexDirection,
    LengthPercentageAuto, NodeId, Position as TaffyPosition, Rect as TaffyRect, Size, Style,
    TaffyTree,
};

use crate::engine::arrays::{core, placement};
use crate::engine::get_allocated_indices;
use crate::types::{ComponentKind, Rect};

use super::geometry::Metrics;

// =============================================================================
// TREE QUERIES
// =============================================================================

/// Collect the children of a track with the given kind, in ordinal order.
pub fn children_of(parent: usize, kind: ComponentKind) -> Vec<usize> {
    let mut children: Vec<usize> = get_allocated_indices()
        .into_iter()
        .filter(|&idx| {
            core::get_parent_index(idx) == Some(parent) && core::get_kind(idx) == kind
        })
        .collect();
    children.sort_by_key(|&idx| core::get_ordinal(idx));
    children
}

// =============================================================================
// STYLE BUILDING
// =============================================================================

/// Style for a track container.
fn track_style(width: f32, height: f32) -> Style {
    Style {
        display: Display::Flex,
        flex_direction: TaffyFlexDirection::Row,
        size: Size {
            width: TaffyDimension::Length(width),
            height: TaffyDimension::Length(height),
        },
        ..Default::default()
    }
}

/// Style for a content pane: one viewport wide, never shrinks.
fn pane_style(metrics: &Metrics) -> Style {
    Style {
        size: Size {
            width: TaffyDimension::Length(metrics.viewport_width),
            height: TaffyDimension::Length(metrics.content_height),
        },
        flex_shrink: 0.0,
        ..Default::default()
    }
}

/// Style for a title label: absolutely positioned so its center lands at
/// `(ordinal + 1) * menu_width - inset`, vertically centered in the track.
fn label_style(metrics: &Metrics, ordinal: usize) -> Style {
    Style {
        position: TaffyPosition::Absolute,
        size: Size {
            width: TaffyDimension::Length(metrics.menu_width()),
            height: TaffyDimension::Length(metrics.label_height),
        },
        inset: TaffyRect {
            left: LengthPercentageAuto::Length(metrics.label_left_x(ordinal)),
            right: LengthPercentageAuto::Auto,
            top: LengthPercentageAuto::Length(metrics.label_top()),
            bottom: LengthPercentageAuto::Auto,
        },
        ..Default::default()
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Compute and store the geometry for the three tracks and their children.
///
/// `main`, `overlay` and `menu` are the track component indices. Panes are
/// the main track's children; labels are the menu track's children; the
/// overlay track is sized from the main track's pane count even though it
/// has no children of its own.
pub fn realize_layout(metrics: &Metrics, main: usize, overlay: usize, menu: usize) {
    let panes = children_of(main, ComponentKind::Pane);
    let labels = children_of(menu, ComponentKind::Label);

    let main_width = metrics.main_track_width(panes.len());
    let menu_width = metrics.menu_track_width(labels.len());

    let mut tree: TaffyTree<()> = TaffyTree::new();
    let mut index_to_node: HashMap<usize, NodeId> = HashMap::new();

    // Main track and its panes
    let main_node = tree
        .new_leaf(track_style(main_width, metrics.content_height))
        .unwrap();
    index_to_node.insert(main, main_node);
    for &pane in &panes {
        let pane_node = tree.new_leaf(pane_style(metrics)).unwrap();
        index_to_node.insert(pane, pane_node);
        let _ = tree.add_child(main_node, pane_node);
    }

    // Overlay track: same extent as main, no children
    let overlay_node = tree
        .new_leaf(track_style(main_width, metrics.content_height))
        .unwrap();
    index_to_node.insert(overlay, overlay_node);

    // Menu track and its labels
    let menu_node = tree
        .new_leaf(track_style(menu_width, metrics.menu_height))
        .unwrap();
    index_to_node.insert(menu, menu_node);
    for &label in &labels {
        let ordinal = core::get_ordinal(label);
        let label_node = tree.new_leaf(label_style(metrics, ordinal)).unwrap();
        index_to_node.insert(label, label_node);
        let _ = tree.add_child(menu_node, label_node);
    }

    // Each track is a root with a definite size; let content size itself
    let available = Size {
        width: AvailableSpace::MaxContent,
        height: AvailableSpace::MaxContent,
    };
    for root in [main_node, overlay_node, menu_node] {
        let _ = tree.compute_layout(root, available);
    }

    // Extract results into the placement arrays
    for (&idx, &node_id) in &index_to_node {
        if let Ok(layout) = tree.layout(node_id) {
            placement::set_rect(
                idx,
                Rect::new(
                    layout.location.x,
                    layout.location.y,
                    layout.size.width,
                    layout.size.height,
                ),
            );
        }
    }

    // Track content extents (the track itself is the scrollable content)
    for (track, width, height) in [
        (main, main_width, metrics.content_height),
        (overlay, main_width, metrics.content_height),
        (menu, menu_width, metrics.menu_height),
    ] {
        placement::set_content_size(track, width, height);
    }
}
