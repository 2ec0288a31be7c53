//! Input Module - Terminal event conversion and polling
//!
//! Bridges crossterm's event system with the drag tracker. The carousel only
//! cares about one pointer (left button down/drag/up), wheel nudges, key
//! presses, and resizes; everything else converts to `InputEvent::None`.
//!
//! # API
//!
//! - `convert_mouse_event` - Convert crossterm MouseEvent to an InputEvent
//! - `convert_key_event` - Convert crossterm KeyEvent to a key name
//! - `poll_event` - Non-blocking event check with timeout
//! - `read_event` - Blocking event read
//! - `enable_mouse` / `disable_mouse` - Control mouse capture
//!
//! # Example
//!
//! ```ignore
//! use spark_carousel::state::input::{poll_event, InputEvent};
//! use std::time::Duration;
//!
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         // feed to DragTracker / key handling
//!     }
//! }
//! ```

use crossterm::event::{
    poll, read, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
    KeyEvent as CrosstermKeyEvent, KeyEventKind, MouseButton as CrosstermMouseButton,
    MouseEvent as CrosstermMouseEvent, MouseEventKind,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;

// =============================================================================
// EVENT TYPES
// =============================================================================

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Button pressed - may begin a drag session.
    Down,
    /// Pointer moved with the button held.
    Drag,
    /// Button released - ends the session.
    Up,
}

/// A single-pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: u16,
    pub y: u16,
}

/// A wheel nudge at a screen position, in unit steps.
///
/// Callers scale by their own step size (see `scroll::WHEEL_SCROLL`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub x: u16,
    pub y: u16,
    pub delta_x: f32,
    pub delta_y: f32,
}

/// Unified event type for the carousel's event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer event (down, drag, up).
    Pointer(PointerEvent),
    /// Wheel nudge.
    Wheel(WheelEvent),
    /// Key press, by name ("a", "Escape", "ArrowLeft", ...).
    Key(String),
    /// Terminal resize event (new width, height).
    Resize(u16, u16),
    /// No event or unhandled event type.
    None,
}

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert a crossterm MouseEvent to an InputEvent.
///
/// Only the left button participates in drag gestures; other buttons and
/// plain moves convert to `None`.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> InputEvent {
    let pointer = |phase| {
        InputEvent::Pointer(PointerEvent {
            phase,
            x: event.column,
            y: event.row,
        })
    };
    let wheel = |delta_x: f32, delta_y: f32| {
        InputEvent::Wheel(WheelEvent {
            x: event.column,
            y: event.row,
            delta_x,
            delta_y,
        })
    };

    match event.kind {
        MouseEventKind::Down(CrosstermMouseButton::Left) => pointer(PointerPhase::Down),
        MouseEventKind::Drag(CrosstermMouseButton::Left) => pointer(PointerPhase::Drag),
        MouseEventKind::Up(CrosstermMouseButton::Left) => pointer(PointerPhase::Up),
        MouseEventKind::ScrollUp => wheel(0.0, -1.0),
        MouseEventKind::ScrollDown => wheel(0.0, 1.0),
        MouseEventKind::ScrollLeft => wheel(-1.0, 0.0),
        MouseEventKind::ScrollRight => wheel(1.0, 0.0),
        _ => InputEvent::None,
    }
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert a crossterm KeyEvent press to a key name.
///
/// Returns `None` for releases/repeats and for unmapped keys.
pub fn convert_key_event(event: CrosstermKeyEvent) -> Option<String> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        _ => return None,
    };

    Some(key)
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    match read()? {
        CrosstermEvent::Mouse(mouse) => Ok(convert_mouse_event(mouse)),
        CrosstermEvent::Key(key) => Ok(convert_key_event(key)
            .map(InputEvent::Key)
            .unwrap_or(InputEvent::None)),
        CrosstermEvent::Resize(w, h) => Ok(InputEvent::Resize(w, h)),
        _ => Ok(InputEvent::None),
    }
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermMouseEvent {
        CrosstermMouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn key(code: KeyCode, kind: KeyEventKind) -> CrosstermKeyEvent {
        CrosstermKeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_convert_left_button_phases() {
        let phases = [
            (
                MouseEventKind::Down(CrosstermMouseButton::Left),
                PointerPhase::Down,
            ),
            (
                MouseEventKind::Drag(CrosstermMouseButton::Left),
                PointerPhase::Drag,
            ),
            (
                MouseEventKind::Up(CrosstermMouseButton::Left),
                PointerPhase::Up,
            ),
        ];

        for (kind, expected) in phases {
            let event = convert_mouse_event(mouse(kind, 10, 5));
            assert_eq!(
                event,
                InputEvent::Pointer(PointerEvent {
                    phase: expected,
                    x: 10,
                    y: 5,
                })
            );
        }
    }

    #[test]
    fn test_other_buttons_ignored() {
        for kind in [
            MouseEventKind::Down(CrosstermMouseButton::Right),
            MouseEventKind::Drag(CrosstermMouseButton::Middle),
            MouseEventKind::Up(CrosstermMouseButton::Right),
            MouseEventKind::Moved,
        ] {
            assert_eq!(convert_mouse_event(mouse(kind, 0, 0)), InputEvent::None);
        }
    }

    #[test]
    fn test_convert_wheel_directions() {
        let directions = [
            (MouseEventKind::ScrollUp, (0.0, -1.0)),
            (MouseEventKind::ScrollDown, (0.0, 1.0)),
            (MouseEventKind::ScrollLeft, (-1.0, 0.0)),
            (MouseEventKind::ScrollRight, (1.0, 0.0)),
        ];

        for (kind, (dx, dy)) in directions {
            let event = convert_mouse_event(mouse(kind, 3, 7));
            assert_eq!(
                event,
                InputEvent::Wheel(WheelEvent {
                    x: 3,
                    y: 7,
                    delta_x: dx,
                    delta_y: dy,
                })
            );
        }
    }

    #[test]
    fn test_convert_key_char() {
        let event = key(KeyCode::Char('q'), KeyEventKind::Press);
        assert_eq!(convert_key_event(event), Some("q".to_string()));
    }

    #[test]
    fn test_convert_key_named() {
        let named = [
            (KeyCode::Enter, "Enter"),
            (KeyCode::Tab, "Tab"),
            (KeyCode::Esc, "Escape"),
            (KeyCode::Up, "ArrowUp"),
            (KeyCode::Down, "ArrowDown"),
            (KeyCode::Left, "ArrowLeft"),
            (KeyCode::Right, "ArrowRight"),
            (KeyCode::Home, "Home"),
            (KeyCode::End, "End"),
        ];

        for (code, expected) in named {
            let event = key(code, KeyEventKind::Press);
            assert_eq!(convert_key_event(event), Some(expected.to_string()));
        }
    }

    #[test]
    fn test_key_release_and_repeat_ignored() {
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let event = key(KeyCode::Char('a'), kind);
            assert_eq!(convert_key_event(event), None);
        }
    }

    #[test]
    fn test_unmapped_key_ignored() {
        let event = key(KeyCode::F(5), KeyEventKind::Press);
        assert_eq!(convert_key_event(event), None);
    }
}
