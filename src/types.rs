//! Core types for spark-carousel.
//!
//! Everything else builds on these: the geometry primitives the layout pass
//! produces, the surface/drive enums the sync rule runs on, and the flags
//! describing tolerated degenerate configurations.

// =============================================================================
// Layout constants
// =============================================================================

/// Horizontal inset subtracted from every title label's center position.
pub const LABEL_CENTER_INSET: f32 = 8.0;

/// Default title label height.
pub const DEFAULT_LABEL_HEIGHT: f32 = 21.0;

/// Default initial pane index.
pub const DEFAULT_INITIAL_INDEX: usize = 1;

// =============================================================================
// Offset
// =============================================================================

/// A scroll offset in content coordinates.
///
/// Uses `f32` so the 2:1 menu halving is exact for odd widths and so the
/// y-component can go negative under vertical slack (pull-style overscroll).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    /// Create a new offset.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero offset.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// This offset with the x-component halved and y passed through.
    ///
    /// The menu surface lives at half the content scale of the full-width
    /// surfaces; only the horizontal axis is scaled.
    #[inline]
    pub fn halved_x(self) -> Self {
        Self {
            x: self.x / 2.0,
            y: self.y,
        }
    }
}

// =============================================================================
// Rect
// =============================================================================

/// An axis-aligned rectangle in content or screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Center x of this rect.
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y of this rect.
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Check if a point is inside this rect.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

// =============================================================================
// Surface
// =============================================================================

/// The three scrollable surfaces sharing one horizontal coordinate space.
///
/// Main and Overlay are full scale; Menu is half scale. Overlay is layered
/// above Main to capture drag gestures without touching embedded content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Surface {
    #[default]
    Main = 0,
    Overlay = 1,
    Menu = 2,
}

impl Surface {
    /// All surfaces, in mirror-write order (full scale before menu).
    pub const ALL: [Surface; 3] = [Surface::Main, Surface::Overlay, Surface::Menu];

    /// The full-scale surface that follows this one verbatim while it drives.
    ///
    /// Menu never drives, so it has no counterpart.
    pub fn counterpart(self) -> Option<Surface> {
        match self {
            Surface::Main => Some(Surface::Overlay),
            Surface::Overlay => Some(Surface::Main),
            Surface::Menu => None,
        }
    }
}

impl From<u8> for Surface {
    fn from(value: u8) -> Self {
        match value {
            1 => Surface::Overlay,
            2 => Surface::Menu,
            _ => Surface::Main,
        }
    }
}

// =============================================================================
// DriveState
// =============================================================================

/// Which surface currently governs offset propagation.
///
/// Set on drag-begin for Main and Overlay only; a Menu drag never changes it.
/// There is no transition back to `Idle`: the last driver keeps governing
/// offset changes on its surface until the other full-scale surface is
/// dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DriveState {
    /// No drag has begun yet; offset changes propagate nowhere.
    #[default]
    Idle = 0,
    /// Main drives; Overlay follows verbatim, Menu at half x.
    Main = 1,
    /// Overlay drives; Main follows verbatim, Menu at half x.
    Overlay = 2,
}

impl DriveState {
    /// The surface currently driving, if any.
    pub fn driver(self) -> Option<Surface> {
        match self {
            DriveState::Idle => None,
            DriveState::Main => Some(Surface::Main),
            DriveState::Overlay => Some(Surface::Overlay),
        }
    }
}

impl From<u8> for DriveState {
    fn from(value: u8) -> Self {
        match value {
            1 => DriveState::Main,
            2 => DriveState::Overlay,
            _ => DriveState::Idle,
        }
    }
}

// =============================================================================
// Component kinds - for parallel arrays
// =============================================================================

/// Component kinds for the parallel arrays pattern.
///
/// Each component at index i has kind[i] set to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ComponentKind {
    #[default]
    None = 0,
    /// A scrollable content track (one per surface).
    Track = 1,
    /// One full-viewport-width content slot in the main track.
    Pane = 2,
    /// One title entry in the menu track.
    Label = 3,
}

impl From<u8> for ComponentKind {
    fn from(value: u8) -> Self {
        match value {
            1 => ComponentKind::Track,
            2 => ComponentKind::Pane,
            3 => ComponentKind::Label,
            _ => ComponentKind::None,
        }
    }
}

// =============================================================================
// Degenerate configuration flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Tolerated degenerate configurations, recorded at mount.
    ///
    /// None of these are errors: the widget lays out and mirrors exactly as
    /// configured. Hosts that care can inspect the flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DegenerateFlags: u8 {
        const NONE = 0;
        /// Title count differs from pane count; the two tracks span
        /// different total widths.
        const COUNT_MISMATCH = 1 << 0;
        /// Initial index is at or beyond the pane count; initial offsets
        /// land past the content edge.
        const INDEX_OUT_OF_RANGE = 1 << 1;
        /// No panes or no titles; the affected tracks are zero-width.
        const EMPTY = 1 << 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_halved_x() {
        let o = Offset::new(320.0, -4.0);
        let half = o.halved_x();
        assert_eq!(half.x, 160.0);
        assert_eq!(half.y, -4.0);
    }

    #[test]
    fn test_offset_halved_x_odd() {
        let o = Offset::new(321.0, 0.0);
        assert_eq!(o.halved_x().x, 160.5);
    }

    #[test]
    fn test_rect_centers() {
        let r = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(r.center_x(), 60.0);
        assert_eq!(r.center_y(), 40.0);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(9.9, 9.9));
        assert!(!r.contains(10.0, 5.0));
        assert!(!r.contains(-0.1, 5.0));
    }

    #[test]
    fn test_surface_counterpart() {
        assert_eq!(Surface::Main.counterpart(), Some(Surface::Overlay));
        assert_eq!(Surface::Overlay.counterpart(), Some(Surface::Main));
        assert_eq!(Surface::Menu.counterpart(), None);
    }

    #[test]
    fn test_surface_from_u8() {
        assert_eq!(Surface::from(0), Surface::Main);
        assert_eq!(Surface::from(1), Surface::Overlay);
        assert_eq!(Surface::from(2), Surface::Menu);
        assert_eq!(Surface::from(99), Surface::Main);
    }

    #[test]
    fn test_drive_state_driver() {
        assert_eq!(DriveState::Idle.driver(), None);
        assert_eq!(DriveState::Main.driver(), Some(Surface::Main));
        assert_eq!(DriveState::Overlay.driver(), Some(Surface::Overlay));
    }

    #[test]
    fn test_drive_state_default() {
        assert_eq!(DriveState::default(), DriveState::Idle);
    }

    #[test]
    fn test_component_kind_roundtrip() {
        for kind in [
            ComponentKind::None,
            ComponentKind::Track,
            ComponentKind::Pane,
            ComponentKind::Label,
        ] {
            assert_eq!(ComponentKind::from(kind as u8), kind);
        }
    }

    #[test]
    fn test_degenerate_flags_combine() {
        let flags = DegenerateFlags::COUNT_MISMATCH | DegenerateFlags::EMPTY;
        assert!(flags.contains(DegenerateFlags::COUNT_MISMATCH));
        assert!(flags.contains(DegenerateFlags::EMPTY));
        assert!(!flags.contains(DegenerateFlags::INDEX_OUT_OF_RANGE));
    }
}
