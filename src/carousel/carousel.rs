//! Carousel - The paged widget over the parallel-arrays engine.
//!
//! Three scrollable tracks share one horizontal coordinate space: main and
//! overlay at full scale, the title menu at half scale. A drag on main or
//! overlay claims the drive; every offset change then mirrors the driver onto
//! the other two surfaces (verbatim and half-x respectively).
//!
//! # Lifecycle
//!
//! ```ignore
//! let carousel = Carousel::mount(CarouselProps {
//!     viewport_width: 320.0,
//!     content_height: 200.0,
//!     menu_height: 44.0,
//!     titles: vec!["A".into(), "B".into(), "C".into()],
//!     contents: panes,
//!     ..Default::default()
//! });
//! carousel.apply_initial_offsets();
//! // feed drag_began / offset_changed from the host's gesture system
//! ```
//!
//! Dropping the Carousel releases every track, pane and label index.

use spark_signals::{effect, signal, Signal};

use crate::engine::arrays::{core, placement, text};
use crate::engine::{allocate_index, on_destroy, release_index};
use crate::layout::{realize_layout, Metrics};
use crate::state::{scroll, sync};
use crate::state::sync::TrackSet;
use crate::types::{ComponentKind, DegenerateFlags, DriveState, Offset, Rect, Surface};

use super::types::{CarouselProps, Cleanup, PaneContent};

// =============================================================================
// Carousel
// =============================================================================

/// The paged carousel widget.
///
/// Owns its pane contents exclusively; geometry is immutable after mount.
pub struct Carousel {
    tracks: TrackSet,
    panes: Vec<usize>,
    labels: Vec<usize>,
    contents: Vec<Box<dyn PaneContent>>,
    metrics: Metrics,
    initial_index: usize,
    drive: Signal<DriveState>,
    flags: DegenerateFlags,
}

impl Carousel {
    // =========================================================================
    // Setup
    // =========================================================================

    /// Mount the carousel: allocate the three tracks plus one pane per
    /// content and one label per title, realize the geometry, and attach
    /// each content into its pane at the full pane bounds.
    ///
    /// Runs once, after the viewport width is known. Degenerate
    /// configurations (count mismatch, out-of-range initial index, empty)
    /// are recorded in the flags, never rejected.
    pub fn mount(props: CarouselProps) -> Carousel {
        let metrics = Metrics {
            viewport_width: props.viewport_width,
            content_height: props.content_height,
            menu_height: props.menu_height,
            label_height: props.label_height,
        };

        // 1. ALLOCATE TRACKS
        let track_id = |suffix: &str| props.id.as_ref().map(|id| format!("{}.{}", id, suffix));
        let main = allocate_index(track_id("main").as_deref());
        let overlay = allocate_index(track_id("overlay").as_deref());
        let menu = allocate_index(track_id("menu").as_deref());
        for track in [main, overlay, menu] {
            core::set_kind(track, ComponentKind::Track);
        }
        let tracks = TrackSet {
            main,
            overlay,
            menu,
        };

        // 2. ALLOCATE CHILDREN - panes under main, labels under menu
        let panes: Vec<usize> = (0..props.contents.len())
            .map(|i| {
                let pane = allocate_index(None);
                core::set_kind(pane, ComponentKind::Pane);
                core::set_parent_index(pane, Some(main));
                core::set_ordinal(pane, i);
                pane
            })
            .collect();
        let labels: Vec<usize> = props
            .titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let label = allocate_index(None);
                core::set_kind(label, ComponentKind::Label);
                core::set_parent_index(label, Some(menu));
                core::set_ordinal(label, i);
                text::set_label_text(label, title.clone());
                label
            })
            .collect();

        // 3. REALIZE GEOMETRY - resolved rects land in the placement arrays
        realize_layout(&metrics, main, overlay, menu);

        // 4. ATTACH CONTENTS - each occupies the full pane bounds
        let mut contents = props.contents;
        for (i, content) in contents.iter_mut().enumerate() {
            let pane = panes[i];
            if let Some(cleanup) = content.attach(pane, placement::get_rect(pane)) {
                on_destroy(pane, cleanup);
            }
        }

        // 5. RECORD DEGENERATE CONFIGURATIONS
        let mut flags = DegenerateFlags::NONE;
        if contents.len() != labels.len() {
            flags |= DegenerateFlags::COUNT_MISMATCH;
        }
        if props.initial_index >= panes.len() {
            flags |= DegenerateFlags::INDEX_OUT_OF_RANGE;
        }
        if panes.is_empty() || labels.is_empty() {
            flags |= DegenerateFlags::EMPTY;
        }

        Carousel {
            tracks,
            panes,
            labels,
            contents,
            metrics,
            initial_index: props.initial_index,
            drive: signal(DriveState::Idle),
            flags,
        }
    }

    /// Force all three surfaces into sync at the initial pane.
    ///
    /// Runs once, after the surfaces are visible. This is the only place the
    /// offsets are set from a known state; afterward sync is maintained
    /// incrementally by the mirror rule.
    pub fn apply_initial_offsets(&self) {
        self.write_synced(self.metrics.initial_offset(self.initial_index));
    }

    fn write_synced(&self, offset: Offset) {
        scroll::set_offset(self.tracks.main, offset);
        scroll::set_offset(self.tracks.overlay, offset);
        scroll::set_offset(self.tracks.menu, offset.halved_x());
    }

    // =========================================================================
    // Scroll coordination
    // =========================================================================

    /// A drag began on `surface`.
    ///
    /// Main and Overlay claim the drive; Menu leaves it untouched. There is
    /// no drag-end counterpart: the drive stays latched until the other
    /// full-scale surface is dragged.
    pub fn drag_began(&self, surface: Surface) {
        self.drive
            .set(sync::after_drag_begin(self.drive.get(), surface));
    }

    /// An offset changed on some surface.
    ///
    /// The source is irrelevant: propagation is driven by the latched drive
    /// state, reading the driver's stored offset. No-op while Idle, which
    /// covers programmatic writes before any drag has begun.
    pub fn offset_changed(&self) {
        sync::apply_mirror(&self.tracks, self.drive.get());
    }

    /// Current drive state (reactive).
    pub fn drive(&self) -> DriveState {
        self.drive.get()
    }

    /// The drive state signal, for host subscriptions.
    pub fn drive_signal(&self) -> Signal<DriveState> {
        self.drive.clone()
    }

    // =========================================================================
    // Offsets
    // =========================================================================

    /// Stored offset of a surface (reactive).
    pub fn offset(&self, surface: Surface) -> Offset {
        scroll::offset(self.tracks.index_of(surface))
    }

    /// Raw offset write to a surface. No clamping, no propagation.
    pub fn set_offset(&self, surface: Surface, offset: Offset) {
        scroll::set_offset(self.tracks.index_of(surface), offset);
    }

    /// Programmatic scroll: place all three surfaces at `index`'s pane.
    ///
    /// Like the initial positioning this writes all three offsets directly,
    /// independent of the drive state. Not bounds-checked.
    pub fn scroll_to_pane(&self, index: usize) {
        self.write_synced(self.metrics.initial_offset(index));
    }

    /// The pane nearest the main surface's current offset, clamped into
    /// range. None for an empty carousel or a zero-width viewport.
    pub fn current_pane(&self) -> Option<usize> {
        if self.panes.is_empty() || self.metrics.viewport_width <= 0.0 {
            return None;
        }
        let page = (scroll::offset(self.tracks.main).x / self.metrics.viewport_width).round();
        Some((page.max(0.0) as usize).min(self.panes.len() - 1))
    }

    /// Subscribe to a surface's offset. The callback runs immediately with
    /// the current offset and again on every change. Returns a cleanup.
    pub fn on_offset(&self, surface: Surface, callback: impl Fn(Offset) + 'static) -> Cleanup {
        let index = self.tracks.index_of(surface);
        Box::new(effect(move || {
            callback(scroll::offset(index));
        }))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The engine indices of the three tracks.
    pub fn tracks(&self) -> TrackSet {
        self.tracks
    }

    /// The dimensional inputs the carousel was mounted with.
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Degenerate configurations recorded at mount.
    pub fn degenerate_flags(&self) -> DegenerateFlags {
        self.flags
    }

    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Engine index of pane `i`.
    pub fn pane_index(&self, i: usize) -> Option<usize> {
        self.panes.get(i).copied()
    }

    /// Mutable access to pane `i`'s embedded content.
    pub fn content_mut(&mut self, i: usize) -> Option<&mut (dyn PaneContent + 'static)> {
        self.contents.get_mut(i).map(|content| content.as_mut())
    }

    /// Engine index of label `i`.
    pub fn label_index(&self, i: usize) -> Option<usize> {
        self.labels.get(i).copied()
    }

    /// Resolved rect of pane `i` within the main track.
    pub fn pane_rect(&self, i: usize) -> Option<Rect> {
        self.panes.get(i).map(|&pane| placement::get_rect(pane))
    }

    /// Resolved rect of label `i` within the menu track.
    pub fn label_rect(&self, i: usize) -> Option<Rect> {
        self.labels.get(i).map(|&label| placement::get_rect(label))
    }

    /// Title text of label `i`.
    pub fn label_text(&self, i: usize) -> Option<String> {
        self.labels.get(i).map(|&label| text::get_label_text(label))
    }

    /// Scrollable content extent of a surface's track.
    pub fn content_size(&self, surface: Surface) -> (f32, f32) {
        placement::get_content_size(self.tracks.index_of(surface))
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        // Children cascade: panes with main, labels with menu
        release_index(self.tracks.main);
        release_index(self.tracks.overlay);
        release_index(self.tracks.menu);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{get_allocated_count, get_index, reset_registry};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct RecordingContent {
        attachments: Rc<RefCell<Vec<(usize, Rect)>>>,
        destroyed: Rc<Cell<u32>>,
    }

    impl PaneContent for RecordingContent {
        fn attach(&mut self, pane_index: usize, bounds: Rect) -> Option<Cleanup> {
            self.attachments.borrow_mut().push((pane_index, bounds));
            let destroyed = self.destroyed.clone();
            Some(Box::new(move || destroyed.set(destroyed.get() + 1)))
        }
    }

    struct NullContent;

    impl PaneContent for NullContent {
        fn attach(&mut self, _pane_index: usize, _bounds: Rect) -> Option<Cleanup> {
            None
        }
    }

    fn contents(n: usize) -> Vec<Box<dyn PaneContent>> {
        (0..n).map(|_| Box::new(NullContent) as Box<dyn PaneContent>).collect()
    }

    fn mount_abc() -> Carousel {
        Carousel::mount(CarouselProps {
            viewport_width: 320.0,
            content_height: 200.0,
            menu_height: 44.0,
            contents: contents(3),
            titles: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            ..Default::default()
        })
    }

    fn setup() {
        reset_registry();
    }

    #[test]
    fn test_mount_geometry() {
        setup();

        let carousel = mount_abc();

        assert_eq!(carousel.pane_count(), 3);
        assert_eq!(carousel.label_count(), 3);
        assert_eq!(carousel.content_size(Surface::Main), (960.0, 200.0));
        assert_eq!(carousel.content_size(Surface::Overlay), (960.0, 200.0));
        assert_eq!(carousel.content_size(Surface::Menu), (480.0, 44.0));

        for i in 0..3 {
            let pane = carousel.pane_rect(i).unwrap();
            assert_eq!(pane.x, 320.0 * i as f32);
            assert_eq!(pane.width, 320.0);

            let label = carousel.label_rect(i).unwrap();
            assert_eq!(label.center_x(), (i + 1) as f32 * 160.0 - 8.0);
        }

        assert_eq!(carousel.label_text(0).as_deref(), Some("A"));
        assert_eq!(carousel.label_text(2).as_deref(), Some("C"));
        assert_eq!(carousel.degenerate_flags(), DegenerateFlags::NONE);
    }

    #[test]
    fn test_track_ids_registered() {
        setup();

        let carousel = Carousel::mount(CarouselProps {
            id: Some("tabs".to_string()),
            viewport_width: 320.0,
            content_height: 200.0,
            menu_height: 44.0,
            contents: contents(2),
            titles: vec!["A".to_string(), "B".to_string()],
            initial_index: 0,
            ..Default::default()
        });

        assert_eq!(get_index("tabs.main"), Some(carousel.tracks().main));
        assert_eq!(get_index("tabs.overlay"), Some(carousel.tracks().overlay));
        assert_eq!(get_index("tabs.menu"), Some(carousel.tracks().menu));
    }

    #[test]
    fn test_initial_offsets() {
        setup();

        let carousel = mount_abc();
        carousel.apply_initial_offsets();

        // Default initial index is 1
        assert_eq!(carousel.offset(Surface::Main), Offset::new(320.0, 0.0));
        assert_eq!(carousel.offset(Surface::Overlay), Offset::new(320.0, 0.0));
        assert_eq!(carousel.offset(Surface::Menu), Offset::new(160.0, 0.0));
    }

    #[test]
    fn test_idle_offset_change_propagates_nowhere() {
        setup();

        let carousel = mount_abc();
        carousel.set_offset(Surface::Main, Offset::new(500.0, 0.0));
        carousel.offset_changed();

        assert_eq!(carousel.offset(Surface::Overlay), Offset::ZERO);
        assert_eq!(carousel.offset(Surface::Menu), Offset::ZERO);
    }

    #[test]
    fn test_drag_main_mirrors_to_followers() {
        setup();

        let carousel = mount_abc();
        carousel.apply_initial_offsets();

        carousel.drag_began(Surface::Main);
        assert_eq!(carousel.drive(), DriveState::Main);

        carousel.set_offset(Surface::Main, Offset::new(480.0, -6.0));
        carousel.offset_changed();

        assert_eq!(carousel.offset(Surface::Overlay), Offset::new(480.0, -6.0));
        assert_eq!(carousel.offset(Surface::Menu), Offset::new(240.0, -6.0));
    }

    #[test]
    fn test_drag_overlay_mirrors_to_followers() {
        setup();

        let carousel = mount_abc();
        carousel.drag_began(Surface::Overlay);

        carousel.set_offset(Surface::Overlay, Offset::new(640.0, 0.0));
        carousel.offset_changed();

        assert_eq!(carousel.offset(Surface::Main), Offset::new(640.0, 0.0));
        assert_eq!(carousel.offset(Surface::Menu), Offset::new(320.0, 0.0));
    }

    #[test]
    fn test_menu_drag_never_claims_drive() {
        setup();

        let carousel = mount_abc();
        carousel.drag_began(Surface::Menu);
        assert_eq!(carousel.drive(), DriveState::Idle);

        carousel.drag_began(Surface::Main);
        carousel.drag_began(Surface::Menu);
        assert_eq!(carousel.drive(), DriveState::Main);
    }

    #[test]
    fn test_drive_signal_subscription() {
        setup();

        let carousel = mount_abc();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let drive = carousel.drive_signal();
        let stop = effect({
            let seen = seen.clone();
            move || seen.borrow_mut().push(drive.get())
        });
        assert_eq!(*seen.borrow(), vec![DriveState::Idle]);

        carousel.drag_began(Surface::Main);
        assert_eq!(seen.borrow().last().copied(), Some(DriveState::Main));

        carousel.drag_began(Surface::Overlay);
        assert_eq!(seen.borrow().last().copied(), Some(DriveState::Overlay));

        stop();
        carousel.drag_began(Surface::Main);
        assert_eq!(seen.borrow().last().copied(), Some(DriveState::Overlay));
    }

    #[test]
    fn test_child_indices_expose_engine_columns() {
        setup();

        let carousel = mount_abc();

        for i in 0..3 {
            let pane = carousel.pane_index(i).unwrap();
            assert_eq!(core::get_kind(pane), ComponentKind::Pane);
            assert_eq!(core::get_parent_index(pane), Some(carousel.tracks().main));
            assert_eq!(core::get_ordinal(pane), i);

            let label = carousel.label_index(i).unwrap();
            assert_eq!(core::get_kind(label), ComponentKind::Label);
            assert_eq!(core::get_parent_index(label), Some(carousel.tracks().menu));
            assert_eq!(core::get_ordinal(label), i);
        }

        assert_eq!(carousel.pane_index(3), None);
        assert_eq!(carousel.label_index(3), None);
    }

    #[test]
    fn test_scroll_to_pane_and_current_pane() {
        setup();

        let carousel = mount_abc();
        carousel.apply_initial_offsets();
        assert_eq!(carousel.current_pane(), Some(1));

        carousel.scroll_to_pane(2);
        assert_eq!(carousel.offset(Surface::Main), Offset::new(640.0, 0.0));
        assert_eq!(carousel.offset(Surface::Menu), Offset::new(320.0, 0.0));
        assert_eq!(carousel.current_pane(), Some(2));

        // Mid-drag positions round to the nearest pane
        carousel.set_offset(Surface::Main, Offset::new(170.0, 0.0));
        assert_eq!(carousel.current_pane(), Some(1));
        carousel.set_offset(Surface::Main, Offset::new(150.0, 0.0));
        assert_eq!(carousel.current_pane(), Some(0));

        // Beyond-content offsets clamp into range
        carousel.set_offset(Surface::Main, Offset::new(9000.0, 0.0));
        assert_eq!(carousel.current_pane(), Some(2));
    }

    #[test]
    fn test_attach_receives_full_pane_bounds() {
        setup();

        let attachments = Rc::new(RefCell::new(Vec::new()));
        let destroyed = Rc::new(Cell::new(0));
        let contents: Vec<Box<dyn PaneContent>> = (0..2)
            .map(|_| {
                Box::new(RecordingContent {
                    attachments: attachments.clone(),
                    destroyed: destroyed.clone(),
                }) as Box<dyn PaneContent>
            })
            .collect();

        let carousel = Carousel::mount(CarouselProps {
            viewport_width: 320.0,
            content_height: 200.0,
            menu_height: 44.0,
            contents,
            titles: vec!["A".to_string(), "B".to_string()],
            initial_index: 0,
            ..Default::default()
        });

        {
            let attached = attachments.borrow();
            assert_eq!(attached.len(), 2);
            assert_eq!(attached[0].1, Rect::new(0.0, 0.0, 320.0, 200.0));
            assert_eq!(attached[1].1, Rect::new(320.0, 0.0, 320.0, 200.0));
        }

        // Cleanups run when the panes are released
        assert_eq!(destroyed.get(), 0);
        drop(carousel);
        assert_eq!(destroyed.get(), 2);
    }

    #[test]
    fn test_content_reattach_through_content_mut() {
        setup();

        let attachments = Rc::new(RefCell::new(Vec::new()));
        let destroyed = Rc::new(Cell::new(0));
        let contents: Vec<Box<dyn PaneContent>> = (0..2)
            .map(|_| {
                Box::new(RecordingContent {
                    attachments: attachments.clone(),
                    destroyed: destroyed.clone(),
                }) as Box<dyn PaneContent>
            })
            .collect();

        let mut carousel = Carousel::mount(CarouselProps {
            viewport_width: 320.0,
            content_height: 200.0,
            menu_height: 44.0,
            contents,
            titles: vec!["A".to_string(), "B".to_string()],
            initial_index: 0,
            ..Default::default()
        });
        assert_eq!(attachments.borrow().len(), 2);

        // A host refresh re-attaches pane 1's content at its resolved bounds
        let pane = carousel.pane_index(1).unwrap();
        let rect = carousel.pane_rect(1).unwrap();
        let cleanup = carousel.content_mut(1).unwrap().attach(pane, rect);
        if let Some(cleanup) = cleanup {
            on_destroy(pane, cleanup);
        }
        assert_eq!(attachments.borrow().len(), 3);
        assert_eq!(attachments.borrow()[2], (pane, rect));

        assert!(carousel.content_mut(5).is_none());

        // Both cleanups registered on pane 1 run on release
        drop(carousel);
        assert_eq!(destroyed.get(), 3);
    }

    #[test]
    fn test_drop_releases_all_indices() {
        setup();

        let carousel = mount_abc();
        // 3 tracks + 3 panes + 3 labels
        assert_eq!(get_allocated_count(), 9);

        drop(carousel);
        assert_eq!(get_allocated_count(), 0);
    }

    #[test]
    fn test_degenerate_count_mismatch() {
        setup();

        let carousel = Carousel::mount(CarouselProps {
            viewport_width: 320.0,
            content_height: 200.0,
            menu_height: 44.0,
            contents: contents(3),
            titles: vec!["A".to_string(), "B".to_string()],
            initial_index: 0,
            ..Default::default()
        });

        assert!(carousel
            .degenerate_flags()
            .contains(DegenerateFlags::COUNT_MISMATCH));
        // Tracks simply span different widths
        assert_eq!(carousel.content_size(Surface::Main).0, 960.0);
        assert_eq!(carousel.content_size(Surface::Menu).0, 320.0);
    }

    #[test]
    fn test_degenerate_out_of_range_index() {
        setup();

        let carousel = Carousel::mount(CarouselProps {
            viewport_width: 320.0,
            content_height: 200.0,
            menu_height: 44.0,
            contents: contents(2),
            titles: vec!["A".to_string(), "B".to_string()],
            initial_index: 5,
            ..Default::default()
        });

        assert!(carousel
            .degenerate_flags()
            .contains(DegenerateFlags::INDEX_OUT_OF_RANGE));

        // Offsets land past the content edge, stored raw
        carousel.apply_initial_offsets();
        assert_eq!(carousel.offset(Surface::Main), Offset::new(1600.0, 0.0));
        assert_eq!(carousel.offset(Surface::Menu), Offset::new(800.0, 0.0));
    }

    #[test]
    fn test_degenerate_empty() {
        setup();

        let carousel = Carousel::mount(CarouselProps {
            viewport_width: 320.0,
            content_height: 200.0,
            menu_height: 44.0,
            ..Default::default()
        });

        assert!(carousel.degenerate_flags().contains(DegenerateFlags::EMPTY));
        // Default initial index 1 is out of range of zero panes
        assert!(carousel
            .degenerate_flags()
            .contains(DegenerateFlags::INDEX_OUT_OF_RANGE));
        assert_eq!(carousel.content_size(Surface::Main), (0.0, 200.0));
        assert_eq!(carousel.current_pane(), None);
    }

    #[test]
    fn test_degenerate_titles_without_panes() {
        setup();

        let carousel = Carousel::mount(CarouselProps {
            viewport_width: 320.0,
            content_height: 200.0,
            menu_height: 44.0,
            titles: vec!["A".to_string(), "B".to_string()],
            initial_index: 0,
            ..Default::default()
        });

        // One side empty is still an empty carousel
        assert!(carousel.degenerate_flags().contains(DegenerateFlags::EMPTY));
        assert!(carousel
            .degenerate_flags()
            .contains(DegenerateFlags::COUNT_MISMATCH));
        assert_eq!(carousel.current_pane(), None);

        // The menu track still spans its two labels
        assert_eq!(carousel.content_size(Surface::Main).0, 0.0);
        assert_eq!(carousel.content_size(Surface::Menu).0, 320.0);
    }

    #[test]
    fn test_on_offset_subscription() {
        setup();

        let carousel = mount_abc();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let cleanup = carousel.on_offset(Surface::Menu, {
            let seen = seen.clone();
            move |offset| seen.borrow_mut().push(offset.x)
        });

        // Runs immediately with the current offset
        assert_eq!(*seen.borrow(), vec![0.0]);

        carousel.drag_began(Surface::Main);
        carousel.set_offset(Surface::Main, Offset::new(320.0, 0.0));
        carousel.offset_changed();
        assert_eq!(seen.borrow().last().copied(), Some(160.0));

        cleanup();
        carousel.set_offset(Surface::Main, Offset::new(640.0, 0.0));
        carousel.offset_changed();
        assert_eq!(seen.borrow().last().copied(), Some(160.0));
    }
}
