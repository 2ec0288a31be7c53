//! # spark-carousel
//!
//! A paged carousel widget with a synchronized half-scale title menu.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! spark-carousel uses a parallel arrays (ECS-style) architecture where
//! components are indices into columnar arrays rather than objects. Every
//! track, pane and label cell is a reactive slot, so hosts observe follower
//! offsets with ordinary effects.
//!
//! Three scrollable tracks share one horizontal coordinate space:
//!
//! ```text
//! Menu    [ A  |  B  |  C ]          half scale, passive follower
//! Overlay [.................]        full scale, invisible, captures drags
//! Main    [ pane0 | pane1 | pane2 ]  full scale, embedded content
//! ```
//!
//! A drag on Main or Overlay latches that surface as the driver; every
//! offset change then mirrors the driver verbatim onto the other full-scale
//! surface and at half x onto the menu. The drive never resets to idle.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Offset, Rect, Surface, DriveState, ...)
//! - [`engine`] - Component registry and parallel arrays
//! - [`layout`] - Closed-form geometry and its Taffy realization
//! - [`state`] - Scroll offsets, the mirror rule, drag sessions, input
//! - [`carousel`] - The public widget

pub mod carousel;
pub mod engine;
pub mod layout;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use carousel::{Carousel, CarouselProps, Cleanup, PaneContent};

pub use engine::{
    allocate_index, get_allocated_indices, get_id, get_index, is_allocated, on_destroy,
    release_index, reset_registry,
};

pub use layout::{children_of, realize_layout, Metrics};

pub use state::{
    drag::{DragTracker, SurfaceRegions},
    input::{InputEvent, PointerEvent, PointerPhase, WheelEvent},
    sync::TrackSet,
};
