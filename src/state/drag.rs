//! Drag Module - Pointer sessions over the surface regions.
//!
//! Converts host pointer events into the carousel's two scroll-coordination
//! events. A press inside a surface region starts a session and fires
//! drag-begin; moves write the pointer delta into the pressed surface's
//! offset and fire offset-changed; release only ends the session. The drive
//! state deliberately stays latched after release.
//!
//! The overlay region sits above the main region: wherever both contain the
//! pointer, the overlay captures the gesture. This is how embedded pane
//! content keeps its own touch handling while drags still page the carousel.

use crate::carousel::Carousel;
use crate::state::scroll;
use crate::types::{Offset, Rect, Surface};

// =============================================================================
// Surface Regions
// =============================================================================

/// Screen rects of the three surfaces, as presented by the host.
///
/// Each rect is the surface's viewport, not its content extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRegions {
    pub main: Rect,
    pub overlay: Rect,
    pub menu: Rect,
}

impl SurfaceRegions {
    /// The surface under a screen point. Overlay is layered above main and
    /// wins wherever both contain the point.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<Surface> {
        if self.overlay.contains(x, y) {
            Some(Surface::Overlay)
        } else if self.main.contains(x, y) {
            Some(Surface::Main)
        } else if self.menu.contains(x, y) {
            Some(Surface::Menu)
        } else {
            None
        }
    }

    /// The viewport rect of a surface.
    pub fn region(&self, surface: Surface) -> Rect {
        match surface {
            Surface::Main => self.main,
            Surface::Overlay => self.overlay,
            Surface::Menu => self.menu,
        }
    }
}

// =============================================================================
// Drag Tracker
// =============================================================================

struct DragSession {
    surface: Surface,
    x: f32,
    y: f32,
}

/// Tracks one pointer's drag session across the surfaces.
#[derive(Default)]
pub struct DragTracker {
    session: Option<DragSession>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// The surface currently being dragged, if any.
    pub fn active_surface(&self) -> Option<Surface> {
        self.session.as_ref().map(|session| session.surface)
    }

    /// Pointer pressed. Starts a session on the hit surface and fires the
    /// carousel's drag-begin. Returns true if a surface was hit.
    pub fn press(&mut self, carousel: &Carousel, regions: &SurfaceRegions, x: f32, y: f32) -> bool {
        let Some(surface) = regions.hit_test(x, y) else {
            return false;
        };

        self.session = Some(DragSession { surface, x, y });
        carousel.drag_began(surface);
        true
    }

    /// Pointer moved with the button held. Writes the delta into the pressed
    /// surface's offset (content follows the pointer, so the offset moves
    /// opposite the motion) and fires offset-changed. Raw write: edge
    /// clamping is the presenting host's concern.
    pub fn drag(&mut self, carousel: &Carousel, x: f32, y: f32) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let delta_x = x - session.x;
        let delta_y = y - session.y;
        session.x = x;
        session.y = y;

        let index = carousel.tracks().index_of(session.surface);
        let current = scroll::offset(index);
        scroll::set_offset(
            index,
            Offset::new(current.x - delta_x, current.y - delta_y),
        );
        carousel.offset_changed();
        true
    }

    /// Pointer released. Ends the session only; the drive state stays
    /// latched on the last driver.
    pub fn release(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Wheel nudge at a screen point. Scrolls the hit surface by the step
    /// size, clamped to its content, without beginning a drag. The nudge
    /// still fires offset-changed, so a latched driver governs the outcome.
    pub fn wheel(
        &self,
        carousel: &Carousel,
        regions: &SurfaceRegions,
        x: f32,
        y: f32,
        delta_x: f32,
        delta_y: f32,
    ) -> bool {
        let Some(surface) = regions.hit_test(x, y) else {
            return false;
        };

        let index = carousel.tracks().index_of(surface);
        let region = regions.region(surface);
        let max = scroll::max_scroll(index, region.width, region.height);
        let moved = scroll::scroll_by(
            index,
            delta_x * scroll::WHEEL_SCROLL,
            delta_y * scroll::WHEEL_SCROLL,
            max,
        );
        if moved {
            carousel.offset_changed();
        }
        moved
    }
}
