//! Terminal event polling and key mapping.
//!
//! [`poll_event`] drives the main loop: it waits up to the poll timeout
//! for an input event so the loop can still tick (pruning toasts, redrawing)
//! when the user is idle. [`key_to_message`] translates board-level key
//! presses into [`Message`]s; keys consumed by an open form never reach it.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use taskdeck_protocol::Message;

/// How long to wait for an event before yielding back to the loop.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for the next terminal event, if any arrived within the timeout.
///
/// # Errors
///
/// Returns an error if reading from the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        return Ok(Some(event::read()?));
    }
    Ok(None)
}

/// Maps a key event to a board message.
///
/// Returns `None` for keys that have no board-level meaning.
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    // Ctrl+C always quits, regardless of anything else.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Left | KeyCode::Char('h') => Some(Message::NavigateLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Message::NavigateRight),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::NavigateUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::NavigateDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Grab),
        KeyCode::Char('a') => Some(Message::NewTask),
        KeyCode::Char('e') => Some(Message::EditSelected),
        KeyCode::Char('d') => Some(Message::DeleteSelected),
        KeyCode::Char('m') => Some(Message::ToggleMenu),
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('s') => Some(Message::Sort),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_message(event), Some(Message::Quit));
    }

    #[test]
    fn plain_c_does_not_quit() {
        assert_eq!(key_to_message(key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn arrows_and_vi_keys_navigate() {
        assert_eq!(key_to_message(key(KeyCode::Left)), Some(Message::NavigateLeft));
        assert_eq!(key_to_message(key(KeyCode::Char('h'))), Some(Message::NavigateLeft));
        assert_eq!(key_to_message(key(KeyCode::Down)), Some(Message::NavigateDown));
        assert_eq!(key_to_message(key(KeyCode::Char('j'))), Some(Message::NavigateDown));
    }

    #[test]
    fn action_keys_map_to_messages() {
        assert_eq!(key_to_message(key(KeyCode::Char('a'))), Some(Message::NewTask));
        assert_eq!(key_to_message(key(KeyCode::Char('e'))), Some(Message::EditSelected));
        assert_eq!(key_to_message(key(KeyCode::Char('d'))), Some(Message::DeleteSelected));
        assert_eq!(key_to_message(key(KeyCode::Char('m'))), Some(Message::ToggleMenu));
        assert_eq!(key_to_message(key(KeyCode::Char('r'))), Some(Message::Refresh));
        assert_eq!(key_to_message(key(KeyCode::Char('s'))), Some(Message::Sort));
        assert_eq!(key_to_message(key(KeyCode::Char('?'))), Some(Message::ToggleHelp));
        assert_eq!(key_to_message(key(KeyCode::Enter)), Some(Message::Grab));
        assert_eq!(key_to_message(key(KeyCode::Esc)), Some(Message::Escape));
    }

    #[test]
    fn unmapped_keys_yield_nothing() {
        assert_eq!(key_to_message(key(KeyCode::Char('z'))), None);
        assert_eq!(key_to_message(key(KeyCode::F(1))), None);
    }
}
