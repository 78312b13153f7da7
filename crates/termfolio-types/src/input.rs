//! Platform-agnostic input event types.
//!
//! The front end maps its native key events to these. The interpreter never
//! sees raw terminal input.

use serde::{Deserialize, Serialize};

/// An input event delivered to a terminal session.
///
/// Only `Submit` causes command evaluation. Every other event edits or
/// navigates the pending input buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Character typed.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// Enter: evaluate the pending input.
    Submit,
    /// Recall the previous history entry.
    HistoryPrev,
    /// Recall the next history entry (or an empty buffer past the end).
    HistoryNext,
    /// Tab: complete the pending input to a unique command name.
    Complete,
    /// Discard the pending input without submitting.
    ClearInput,
}

impl InputEvent {
    /// Whether this event evaluates the input buffer.
    pub fn is_submit(&self) -> bool {
        matches!(self, Self::Submit)
    }
}
