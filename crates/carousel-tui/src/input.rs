use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Prev,
    Next,
    /// Jump to a slide (zero-based)
    GoTo(usize),
    /// Select the current slide
    Select,
    ToggleAutoplay,
    /// Shorter autoplay period
    SpeedUp,
    /// Longer autoplay period
    SlowDown,
    /// Cycle the external pause override: none, paused, playing
    CyclePause,
    None,
}

/// Map a key press to an action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Navigation
        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, KeyModifiers::NONE) => {
            Action::Prev
        }
        (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, KeyModifiers::NONE) => {
            Action::Next
        }
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::GoTo(c as usize - '1' as usize)
        }
        (KeyCode::Enter, KeyModifiers::NONE) => Action::Select,

        // Autoplay ('+' arrives with SHIFT on some layouts)
        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::ToggleAutoplay,
        (KeyCode::Char('+'), _) | (KeyCode::Char('='), KeyModifiers::NONE) => Action::SpeedUp,
        (KeyCode::Char('-'), KeyModifiers::NONE) => Action::SlowDown,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::CyclePause,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('h'))), Action::Prev);
        assert_eq!(handle_key_event(key(KeyCode::Left)), Action::Prev);
        assert_eq!(handle_key_event(key(KeyCode::Char('l'))), Action::Next);
        assert_eq!(handle_key_event(key(KeyCode::Right)), Action::Next);
        assert_eq!(handle_key_event(key(KeyCode::Enter)), Action::Select);
    }

    #[test]
    fn test_digits_are_zero_based() {
        assert_eq!(handle_key_event(key(KeyCode::Char('1'))), Action::GoTo(0));
        assert_eq!(handle_key_event(key(KeyCode::Char('9'))), Action::GoTo(8));
        assert_eq!(handle_key_event(key(KeyCode::Char('0'))), Action::None);
    }

    #[test]
    fn test_quit_and_autoplay_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT)),
            Action::SpeedUp
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('-'))), Action::SlowDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('p'))), Action::CyclePause);
        assert_eq!(handle_key_event(key(KeyCode::Char('a'))), Action::ToggleAutoplay);
    }
}
