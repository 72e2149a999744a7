//! Key bindings for tbrowse.
//!
//! Maps crossterm key events to browser [`Action`]s. Letter hotkeys also
//! work on a Russian (ЙЦУКЕН) layout by translating the key to the Latin
//! letter on the same physical key.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tbrowse_core::Action;

/// Latin letter on the same physical key as a Cyrillic one, for the
/// letters used as hotkeys.
pub fn cyrillic_to_latin(ch: char) -> char {
    match ch {
        'й' => 'q',
        'Й' => 'Q',
        'о' => 'j',
        'О' => 'J',
        'л' => 'k',
        'Л' => 'K',
        'р' => 'h',
        'Р' => 'H',
        'д' => 'l',
        'Д' => 'L',
        'к' => 'r',
        'К' => 'R',
        'с' => 'c',
        'С' => 'C',
        _ => ch,
    }
}

/// Decode a key press into a browser action.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    let code = match key.code {
        KeyCode::Char(ch) => KeyCode::Char(cyrillic_to_latin(ch)),
        other => other,
    };

    match (code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Some(Action::Refresh),
        (_, modifiers) if modifiers.contains(KeyModifiers::CONTROL) => None,

        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => Some(Action::MoveUp),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => Some(Action::MoveDown),
        (KeyCode::Enter, _) | (KeyCode::Right, _) | (KeyCode::Char('l'), _) => {
            Some(Action::Activate)
        }
        (KeyCode::Backspace, _) | (KeyCode::Left, _) | (KeyCode::Char('h'), _) => {
            Some(Action::Ascend)
        }
        (KeyCode::Esc, _) | (KeyCode::Char('q'), _) | (KeyCode::Char('Q'), _) => {
            Some(Action::Quit)
        }
        _ => None,
    }
}

/// Key hints shown in the footer, as (key, description) pairs
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("Q", "Quit"),
    ("↑↓", "Move"),
    ("Enter", "Open"),
    ("Bksp", "Up"),
    ("^R", "Refresh"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(action_for_key(key(KeyCode::Up)), Some(Action::MoveUp));
        assert_eq!(action_for_key(key(KeyCode::Down)), Some(Action::MoveDown));
        assert_eq!(action_for_key(key(KeyCode::Enter)), Some(Action::Activate));
        assert_eq!(action_for_key(key(KeyCode::Backspace)), Some(Action::Ascend));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for_key(key(KeyCode::Char('Q'))), Some(Action::Quit));
        assert_eq!(action_for_key(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_vi_keys() {
        assert_eq!(action_for_key(key(KeyCode::Char('k'))), Some(Action::MoveUp));
        assert_eq!(action_for_key(key(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(action_for_key(key(KeyCode::Char('l'))), Some(Action::Activate));
        assert_eq!(action_for_key(key(KeyCode::Char('h'))), Some(Action::Ascend));
    }

    #[test]
    fn test_russian_layout() {
        assert_eq!(action_for_key(key(KeyCode::Char('й'))), Some(Action::Quit));
        assert_eq!(action_for_key(key(KeyCode::Char('о'))), Some(Action::MoveDown));
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Char('к'), KeyModifiers::CONTROL)),
            Some(Action::Refresh)
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(action_for_key(key(KeyCode::Char('x'))), None);
        assert_eq!(action_for_key(key(KeyCode::Tab)), None);
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL)),
            None
        );
    }
}
