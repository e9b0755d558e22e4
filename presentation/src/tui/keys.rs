//! Key bindings: maps crossterm key events to actions

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Submit current input (Enter)
    Submit,
    /// Insert a newline into the input (Shift+Enter / Alt+Enter)
    InsertNewline,
    /// Quit application
    Quit,
    InsertChar(char),
    /// Delete character (Backspace)
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
    /// Scroll the message list one line
    ScrollUp,
    ScrollDown,
    /// Scroll the message list one page
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
    /// No action
    None,
}

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(key: KeyEvent) -> Action {
        // Windows reports releases too
        if key.kind == KeyEventKind::Release {
            return Action::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if ctrl => Action::Quit,

            KeyCode::Enter
                if key
                    .modifiers
                    .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
            {
                Action::InsertNewline
            }
            KeyCode::Enter => Action::Submit,

            KeyCode::Home if ctrl => Action::ScrollTop,
            KeyCode::End if ctrl => Action::ScrollBottom,
            KeyCode::Up => Action::ScrollUp,
            KeyCode::Down => Action::ScrollDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::PageDown => Action::PageDown,

            KeyCode::Char(_) if ctrl => Action::None,
            KeyCode::Char(c) => Action::InsertChar(c),
            KeyCode::Backspace => Action::DeleteChar,
            KeyCode::Left => Action::CursorLeft,
            KeyCode::Right => Action::CursorRight,
            KeyCode::Home => Action::CursorStart,
            KeyCode::End => Action::CursorEnd,
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(KeyHandler::handle(key(KeyCode::Char('a'))), Action::InsertChar('a'));
        assert_eq!(KeyHandler::handle(key(KeyCode::Backspace)), Action::DeleteChar);
        assert_eq!(KeyHandler::handle(key(KeyCode::Home)), Action::CursorStart);
        assert_eq!(KeyHandler::handle(key(KeyCode::End)), Action::CursorEnd);
        assert_eq!(KeyHandler::handle(key(KeyCode::Enter)), Action::Submit);
    }

    #[test]
    fn test_newline_modifiers() {
        let shift_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT);
        let alt_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);
        assert_eq!(KeyHandler::handle(shift_enter), Action::InsertNewline);
        assert_eq!(KeyHandler::handle(alt_enter), Action::InsertNewline);
    }

    #[test]
    fn test_scroll_keys() {
        assert_eq!(KeyHandler::handle(key(KeyCode::Up)), Action::ScrollUp);
        assert_eq!(KeyHandler::handle(key(KeyCode::PageDown)), Action::PageDown);
        assert_eq!(KeyHandler::handle(ctrl(KeyCode::Home)), Action::ScrollTop);
        assert_eq!(KeyHandler::handle(ctrl(KeyCode::End)), Action::ScrollBottom);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(KeyHandler::handle(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(KeyHandler::handle(ctrl(KeyCode::Char('c'))), Action::Quit);
        assert_eq!(KeyHandler::handle(ctrl(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn test_release_ignored() {
        let mut release = key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(KeyHandler::handle(release), Action::None);
    }
}
