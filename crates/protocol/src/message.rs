//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between the
//! TUI input handler and the application state while the board has focus.
//! Form input is handled separately by the form itself.

use serde::{Deserialize, Serialize};

/// Messages that represent user intents on the board.
///
/// These messages are produced by the input handler and consumed by the
/// application state to update the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the column on the left.
    NavigateLeft,
    /// Move selection to the column on the right.
    NavigateRight,
    /// Move selection up within the current column.
    NavigateUp,
    /// Move selection down within the current column.
    NavigateDown,
    /// Pick up the selected card, or drop a held card into the current
    /// column (keyboard counterpart of a mouse drag).
    Grab,
    /// Contextual cancel: close menu/form/help or release a held card.
    Escape,
    /// Open the add-task form.
    NewTask,
    /// Open the edit form for the selected task.
    EditSelected,
    /// Delete the selected task.
    DeleteSelected,
    /// Toggle the per-card action menu for the selected task.
    ToggleMenu,
    /// Reload the task list from the server.
    Refresh,
    /// Re-sort the columns by due date.
    Sort,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::Grab.is_navigation());
    /// ```
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub const fn is_terminating(self) -> bool {
        matches!(self, Self::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_detection() {
        assert!(Message::NavigateLeft.is_navigation());
        assert!(Message::NavigateRight.is_navigation());
        assert!(Message::NavigateUp.is_navigation());
        assert!(Message::NavigateDown.is_navigation());
        assert!(!Message::Grab.is_navigation());
        assert!(!Message::Quit.is_navigation());
    }

    #[test]
    fn terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
    }

    #[test]
    fn serialization_roundtrip() {
        let messages = [
            Message::NavigateLeft,
            Message::Grab,
            Message::NewTask,
            Message::EditSelected,
            Message::DeleteSelected,
            Message::ToggleMenu,
            Message::Refresh,
            Message::Sort,
            Message::ToggleHelp,
            Message::Quit,
        ];

        for msg in messages {
            let json = serde_json::to_string(&msg).unwrap();
            let parsed: Message = serde_json::from_str(&json).unwrap();
            assert_eq!(msg, parsed);
        }
    }
}
