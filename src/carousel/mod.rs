//! Carousel Component
//!
//! The public widget: a horizontally paged content view with a synchronized
//! half-scale title menu and an invisible overlay surface for gestures.
//!
//! # Architecture
//!
//! `Carousel::mount` allocates engine indices (three tracks, panes, labels),
//! realizes the geometry through the taffy bridge, and attaches the host's
//! pane contents. After that the widget is a thin dispatcher: drag-begin and
//! offset-changed events route into `state::sync`.

#[allow(clippy::module_inception)]
mod carousel;
mod types;

pub use carousel::Carousel;
pub use types::{CarouselProps, Cleanup, PaneContent};
