//! Input events.

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Application event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard event
    Key(KeyEvent),
    /// Terminal resize event (columns, rows)
    Resize(u16, u16),
}

/// Blocking reader for terminal events.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Wait for the next event the browser cares about
    pub fn next(&self) -> Result<Event> {
        loop {
            if let Some(event) = translate(event::read()?) {
                return Ok(event);
            }
        }
    }
}

/// Keep key presses and resizes, drop everything else.
///
/// With the kitty keyboard protocol we also receive Release and Repeat
/// events; only Press is handled to avoid duplicate actions.
pub fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_press_is_kept() {
        let press = key(KeyEventKind::Press);
        assert_eq!(
            translate(CrosstermEvent::Key(press)),
            Some(Event::Key(press))
        );
    }

    #[test]
    fn test_release_and_repeat_are_dropped() {
        assert_eq!(translate(CrosstermEvent::Key(key(KeyEventKind::Release))), None);
        assert_eq!(translate(CrosstermEvent::Key(key(KeyEventKind::Repeat))), None);
    }

    #[test]
    fn test_resize_and_focus() {
        assert_eq!(
            translate(CrosstermEvent::Resize(80, 24)),
            Some(Event::Resize(80, 24))
        );
        assert_eq!(translate(CrosstermEvent::FocusGained), None);
    }
}
