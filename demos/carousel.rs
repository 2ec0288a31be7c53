//! Carousel Example - Interactive three-pane carousel
//!
//! This example demonstrates everything working together:
//! - Three content panes with a half-scale title menu
//! - Drag on the content band (the overlay captures it) or on the menu
//! - Wheel nudges, arrow-key paging
//! - Reactive repaint through offset effects
//!
//! Run with: cargo run --example carousel
//!
//! Drag with the mouse to scroll, wheel to nudge, Left/Right to page,
//! q or Escape to quit.

use std::cell::Cell;
use std::io::{stdout, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::style::{Color, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue, style};
use spark_signals::effect;

use spark_carousel::state::input::{self, InputEvent, PointerPhase};
use spark_carousel::{
    Carousel, CarouselProps, Cleanup, DragTracker, Offset, PaneContent, Rect, Surface,
    SurfaceRegions,
};

// Cell-scale metrics: one terminal cell per unit
const VIEWPORT_W: f32 = 48.0;
const CONTENT_H: f32 = 10.0;
const MENU_H: f32 = 3.0;

struct DemoPane;

impl PaneContent for DemoPane {
    fn attach(&mut self, _pane_index: usize, _bounds: Rect) -> Option<Cleanup> {
        // The demo draws pane fills itself from the placement arrays
        None
    }
}

const PANES: [(&str, char, Color); 3] = [
    ("Alpha", '.', Color::Cyan),
    ("Beta", ':', Color::Magenta),
    ("Gamma", '#', Color::Yellow),
];

fn main() -> std::io::Result<()> {
    spark_carousel::reset_registry();

    let carousel = Carousel::mount(CarouselProps {
        id: Some("demo".to_string()),
        viewport_width: VIEWPORT_W,
        content_height: CONTENT_H,
        menu_height: MENU_H,
        label_height: 1.0,
        contents: PANES
            .iter()
            .map(|_| Box::new(DemoPane) as Box<dyn PaneContent>)
            .collect(),
        titles: PANES.iter().map(|(name, _, _)| name.to_string()).collect(),
        ..Default::default()
    });
    carousel.apply_initial_offsets();

    // Menu strip on top, content band below, overlay covering the band
    let regions = SurfaceRegions {
        menu: Rect::new(0.0, 0.0, VIEWPORT_W, MENU_H),
        main: Rect::new(0.0, MENU_H, VIEWPORT_W, CONTENT_H),
        overlay: Rect::new(0.0, MENU_H, VIEWPORT_W, CONTENT_H),
    };

    // Repaint when any surface moves or the drive latches
    let dirty = Rc::new(Cell::new(true));
    let _offset_subs: Vec<Cleanup> = Surface::ALL
        .into_iter()
        .map(|surface| {
            carousel.on_offset(surface, {
                let dirty = dirty.clone();
                move |_| dirty.set(true)
            })
        })
        .collect();
    let _drive_sub = effect({
        let dirty = dirty.clone();
        let drive = carousel.drive_signal();
        move || {
            let _ = drive.get();
            dirty.set(true);
        }
    });

    terminal::enable_raw_mode()?;
    execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
    input::enable_mouse()?;

    let result = run(&carousel, &regions, &dirty);

    let _ = input::disable_mouse();
    let _ = execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run(carousel: &Carousel, regions: &SurfaceRegions, dirty: &Cell<bool>) -> std::io::Result<()> {
    let mut tracker = DragTracker::new();

    loop {
        if dirty.replace(false) {
            draw(carousel)?;
        }

        let Some(event) = input::poll_event(Duration::from_millis(16))? else {
            continue;
        };

        match event {
            InputEvent::Pointer(pointer) => {
                let (x, y) = (pointer.x as f32, pointer.y as f32);
                match pointer.phase {
                    PointerPhase::Down => {
                        tracker.press(carousel, regions, x, y);
                    }
                    PointerPhase::Drag => {
                        if tracker.drag(carousel, x, y) {
                            dirty.set(true);
                        }
                    }
                    PointerPhase::Up => {
                        tracker.release();
                    }
                }
            }
            InputEvent::Wheel(wheel) => {
                // A vertical wheel pages horizontally; the tracks have no
                // vertical scroll range of their own
                let delta_x = if wheel.delta_x != 0.0 {
                    wheel.delta_x
                } else {
                    wheel.delta_y
                };
                tracker.wheel(carousel, regions, wheel.x as f32, wheel.y as f32, delta_x, 0.0);
            }
            InputEvent::Key(key) => match key.as_str() {
                "q" | "Escape" => break,
                "ArrowLeft" => {
                    if let Some(current) = carousel.current_pane() {
                        carousel.scroll_to_pane(current.saturating_sub(1));
                    }
                }
                "ArrowRight" => {
                    if let Some(current) = carousel.current_pane() {
                        if current + 1 < carousel.pane_count() {
                            carousel.scroll_to_pane(current + 1);
                        }
                    }
                }
                _ => {}
            },
            InputEvent::Resize(..) => dirty.set(true),
            InputEvent::None => {}
        }
    }

    Ok(())
}

fn draw(carousel: &Carousel) -> std::io::Result<()> {
    let mut out = stdout();
    queue!(out, terminal::Clear(ClearType::All))?;

    let menu_offset = carousel.offset(Surface::Menu);
    let main_offset = carousel.offset(Surface::Main);
    let current = carousel.current_pane();

    // Menu strip: labels at their resolved centers, shifted by the offset
    for i in 0..carousel.label_count() {
        let Some(rect) = carousel.label_rect(i) else { continue };
        let Some(text) = carousel.label_text(i) else { continue };

        let center = rect.center_x() - menu_offset.x;
        let left = center - text.len() as f32 / 2.0;
        if left < 0.0 || left + text.len() as f32 > VIEWPORT_W {
            continue;
        }

        let color = if current == Some(i) { Color::White } else { Color::DarkGrey };
        queue!(
            out,
            cursor::MoveTo(left as u16, 1),
            SetForegroundColor(color),
            style::Print(text),
        )?;
    }

    // Content band: each pane's visible slice, filled with its pattern
    for i in 0..carousel.pane_count() {
        let Some(rect) = carousel.pane_rect(i) else { continue };
        let (_, fill, color) = PANES[i];

        let left = rect.x - main_offset.x;
        let start = left.max(0.0) as u16;
        let end = (left + rect.width).min(VIEWPORT_W).max(0.0) as u16;
        if start >= end {
            continue;
        }

        queue!(out, SetForegroundColor(color))?;
        let band: String = std::iter::repeat(fill).take((end - start) as usize).collect();
        for row in 0..CONTENT_H as u16 {
            queue!(out, cursor::MoveTo(start, MENU_H as u16 + row), style::Print(&band))?;
        }
    }

    // Status line
    queue!(
        out,
        cursor::MoveTo(0, (MENU_H + CONTENT_H) as u16 + 1),
        SetForegroundColor(Color::Grey),
        style::Print(format!(
            "drive: {:?}  main: {}  menu: {}  pane: {}",
            carousel.drive(),
            fmt_offset(main_offset),
            fmt_offset(menu_offset),
            current.map_or("-".to_string(), |i| i.to_string()),
        )),
        cursor::MoveTo(0, (MENU_H + CONTENT_H) as u16 + 2),
        SetForegroundColor(Color::DarkGrey),
        style::Print("drag to scroll | wheel to nudge | Left/Right to page | q to quit"),
    )?;

    out.flush()
}

fn fmt_offset(offset: Offset) -> String {
    format!("({:.0},{:.0})", offset.x, offset.y)
}
