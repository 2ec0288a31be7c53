//! Scroll Synchronization
//!
//! The coordination rule that keeps the three surfaces consistent:
//!
//! - A drag beginning on Main or Overlay makes that surface the driver;
//!   a drag beginning on Menu changes nothing.
//! - While a driver is set, every offset change copies the driver's offset
//!   verbatim onto the other full-scale surface, then at half x (y passed
//!   through) onto the menu.
//! - With no driver yet, offset changes propagate nowhere.
//!
//! The drive state never returns to Idle: the last driver keeps governing
//! until the other full-scale surface is dragged.

use crate::engine::arrays::interaction;
use crate::state::scroll;
use crate::types::{DriveState, Offset, Surface};

// =============================================================================
// TrackSet
// =============================================================================

/// The engine indices of the three surface tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackSet {
    pub main: usize,
    pub overlay: usize,
    pub menu: usize,
}

impl TrackSet {
    /// The track index backing a surface.
    pub fn index_of(&self, surface: Surface) -> usize {
        match surface {
            Surface::Main => self.main,
            Surface::Overlay => self.overlay,
            Surface::Menu => self.menu,
        }
    }

    /// The surface backed by a track index, if any.
    pub fn surface_of(&self, index: usize) -> Option<Surface> {
        if index == self.main {
            Some(Surface::Main)
        } else if index == self.overlay {
            Some(Surface::Overlay)
        } else if index == self.menu {
            Some(Surface::Menu)
        } else {
            None
        }
    }
}

// =============================================================================
// Drive transitions
// =============================================================================

/// The drive state after a drag begins on `surface`.
///
/// Main and Overlay claim the drive; Menu leaves it untouched. With a single
/// scalar state, the last drag-begin wins.
pub fn after_drag_begin(current: DriveState, surface: Surface) -> DriveState {
    match surface {
        Surface::Main => DriveState::Main,
        Surface::Overlay => DriveState::Overlay,
        Surface::Menu => current,
    }
}

// =============================================================================
// Mirroring
// =============================================================================

/// Propagate the driver's current offset to the two followers.
///
/// Reads the driver's stored offset (not an event payload), writes the other
/// full-scale surface verbatim, then the menu at half x with y passed
/// through. No-op while Idle. Re-entrant echoes are harmless: re-running the
/// rule from the same driver offset writes the same follower values.
pub fn apply_mirror(tracks: &TrackSet, drive: DriveState) {
    let Some(driver) = drive.driver() else {
        return;
    };

    let current = scroll::offset(tracks.index_of(driver));

    // Full-scale follower first, menu second
    if let Some(follower) = driver.counterpart() {
        write_offset(tracks.index_of(follower), current);
    }
    write_offset(tracks.menu, current.halved_x());
}

fn write_offset(index: usize, offset: Offset) {
    interaction::set_scroll_offset(index, offset.x, offset.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::interaction;

    const TRACKS: TrackSet = TrackSet {
        main: 0,
        overlay: 1,
        menu: 2,
    };

    fn setup() {
        interaction::reset();
    }

    #[test]
    fn test_track_set_lookups() {
        assert_eq!(TRACKS.index_of(Surface::Main), 0);
        assert_eq!(TRACKS.index_of(Surface::Overlay), 1);
        assert_eq!(TRACKS.index_of(Surface::Menu), 2);

        assert_eq!(TRACKS.surface_of(0), Some(Surface::Main));
        assert_eq!(TRACKS.surface_of(1), Some(Surface::Overlay));
        assert_eq!(TRACKS.surface_of(2), Some(Surface::Menu));
        assert_eq!(TRACKS.surface_of(7), None);
    }

    #[test]
    fn test_drag_begin_transitions() {
        assert_eq!(
            after_drag_begin(DriveState::Idle, Surface::Main),
            DriveState::Main
        );
        assert_eq!(
            after_drag_begin(DriveState::Idle, Surface::Overlay),
            DriveState::Overlay
        );

        // Menu never claims the drive
        assert_eq!(
            after_drag_begin(DriveState::Idle, Surface::Menu),
            DriveState::Idle
        );
        assert_eq!(
            after_drag_begin(DriveState::Main, Surface::Menu),
            DriveState::Main
        );
        assert_eq!(
            after_drag_begin(DriveState::Overlay, Surface::Menu),
            DriveState::Overlay
        );
    }

    #[test]
    fn test_last_drag_begin_wins() {
        let mut state = DriveState::Idle;
        state = after_drag_begin(state, Surface::Main);
        state = after_drag_begin(state, Surface::Overlay);
        assert_eq!(state, DriveState::Overlay);

        state = after_drag_begin(state, Surface::Main);
        assert_eq!(state, DriveState::Main);
    }

    #[test]
    fn test_mirror_idle_is_noop() {
        setup();

        scroll::set_offset(TRACKS.main, Offset::new(320.0, 0.0));
        apply_mirror(&TRACKS, DriveState::Idle);

        assert_eq!(scroll::offset(TRACKS.overlay), Offset::ZERO);
        assert_eq!(scroll::offset(TRACKS.menu), Offset::ZERO);
    }

    #[test]
    fn test_mirror_driven_by_main() {
        setup();

        scroll::set_offset(TRACKS.main, Offset::new(480.0, -6.0));
        apply_mirror(&TRACKS, DriveState::Main);

        assert_eq!(scroll::offset(TRACKS.overlay), Offset::new(480.0, -6.0));
        assert_eq!(scroll::offset(TRACKS.menu), Offset::new(240.0, -6.0));
    }

    #[test]
    fn test_mirror_driven_by_overlay() {
        setup();

        scroll::set_offset(TRACKS.overlay, Offset::new(100.0, 2.0));
        apply_mirror(&TRACKS, DriveState::Overlay);

        assert_eq!(scroll::offset(TRACKS.main), Offset::new(100.0, 2.0));
        assert_eq!(scroll::offset(TRACKS.menu), Offset::new(50.0, 2.0));
    }

    #[test]
    fn test_mirror_reads_driver_not_followers() {
        setup();

        // Followers hold stale values; the driver's offset wins
        scroll::set_offset(TRACKS.main, Offset::new(640.0, 0.0));
        scroll::set_offset(TRACKS.overlay, Offset::new(9.0, 9.0));
        scroll::set_offset(TRACKS.menu, Offset::new(9.0, 9.0));

        apply_mirror(&TRACKS, DriveState::Main);

        assert_eq!(scroll::offset(TRACKS.overlay), Offset::new(640.0, 0.0));
        assert_eq!(scroll::offset(TRACKS.menu), Offset::new(320.0, 0.0));
    }

    #[test]
    fn test_mirror_is_idempotent() {
        setup();

        scroll::set_offset(TRACKS.main, Offset::new(320.0, 4.0));
        apply_mirror(&TRACKS, DriveState::Main);
        let overlay = scroll::offset(TRACKS.overlay);
        let menu = scroll::offset(TRACKS.menu);

        // An echo dispatch re-runs the same rule with the same driver offset
        apply_mirror(&TRACKS, DriveState::Main);
        assert_eq!(scroll::offset(TRACKS.overlay), overlay);
        assert_eq!(scroll::offset(TRACKS.menu), menu);
    }

    #[test]
    fn test_mirror_halves_x_only() {
        setup();

        scroll::set_offset(TRACKS.overlay, Offset::new(321.0, -40.0));
        apply_mirror(&TRACKS, DriveState::Overlay);

        let menu = scroll::offset(TRACKS.menu);
        assert_eq!(menu.x, 160.5);
        assert_eq!(menu.y, -40.0);
    }
}
