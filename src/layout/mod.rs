//! Layout Module
//!
//! Geometry for the three tracks and their children, computed with
//! [Taffy](https://github.com/DioxusLabs/taffy).
//!
//! # Architecture
//!
//! Two halves that must agree:
//!
//! 1. `geometry` - the closed-form arithmetic (track widths, pane origins,
//!    label centers, initial offsets)
//! 2. `taffy_bridge` - the flexbox/absolute-positioning realization that
//!    writes resolved rects into the placement arrays
//!
//! Layout runs once at mount; the widget's geometry is immutable afterward.

mod geometry;
mod taffy_bridge;

pub use geometry::Metrics;
pub use taffy_bridge::{children_of, realize_layout};
