use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    HalfPageDown,
    HalfPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    NextSection,
    PrevSection,
    NextCard,
    PrevCard,
    /// Jump to a timeline entry by index (digit keys)
    ActivateDot(usize),
    Refresh,
    ToggleReducedMotion,
    Help,
    ExitOverlay,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Help overlay: any key dismisses it
    if app.mode == Mode::Help {
        return Action::ExitOverlay;
    }

    let binding = KeyBinding::new(key.code, key.modifiers);

    // gg requires double press
    if keymap.is_g_prefix(&binding) {
        if app.pending_key == Some('g') {
            return Action::JumpToTop;
        }
        return Action::PendingG;
    }

    // Digit keys activate timeline dots directly
    if let (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) = (key.code, key.modifiers) {
        return Action::ActivateDot(c as usize - '1' as usize);
    }

    if let Some(action) = keymap.get(&binding) {
        return *action;
    }

    // Shifted punctuation arrives with SHIFT set; the character already
    // encodes the shift, so retry the bare lookup.
    if let KeyCode::Char(c) = key.code {
        if !c.is_ascii_alphabetic() && key.modifiers == KeyModifiers::SHIFT {
            if let Some(action) = keymap.get(&KeyBinding::simple(key.code)) {
                return *action;
            }
        }
    }

    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_core::{AppConfig, PortfolioContent};

    fn test_app() -> App {
        App::new(&AppConfig::default(), PortfolioContent::builtin())
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_any_key_exits_help() {
        let mut app = test_app();
        app.mode = Mode::Help;
        let keymap = Keymap::default();
        let action = handle_key_event(
            press(KeyCode::Char('z'), KeyModifiers::NONE),
            &app,
            &keymap,
        );
        assert_eq!(action, Action::ExitOverlay);
    }

    #[test]
    fn test_digit_activates_dot() {
        let app = test_app();
        let keymap = Keymap::default();
        let action = handle_key_event(
            press(KeyCode::Char('2'), KeyModifiers::NONE),
            &app,
            &keymap,
        );
        assert_eq!(action, Action::ActivateDot(1));
    }

    #[test]
    fn test_double_g_jumps_to_top() {
        let mut app = test_app();
        let keymap = Keymap::default();
        let g = press(KeyCode::Char('g'), KeyModifiers::NONE);

        assert_eq!(handle_key_event(g, &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(g, &app, &keymap), Action::JumpToTop);
    }

    #[test]
    fn test_shifted_punctuation_falls_back_to_bare_lookup() {
        let app = test_app();
        let keymap = Keymap::default();
        // Many terminals report '?' with the SHIFT modifier still set
        let action = handle_key_event(
            press(KeyCode::Char('?'), KeyModifiers::SHIFT),
            &app,
            &keymap,
        );
        assert_eq!(action, Action::Help);
    }
}
