//! TUI message types (Elm Messages).

use crate::keymap::KeyAction;

/// Messages that drive the form update cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiMessage {
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
    /// Terminal resized; the next draw picks up the new area.
    Resize,
    /// Tick event for periodic redraws.
    Tick,
}
