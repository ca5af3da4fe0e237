//! Component event handling types and traits.
//!
//! Components handle their own keys; the host only routes key presses to
//! the focused component and stops propagation on `Consumed`.

use crate::keys::KeyCombo;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

impl From<bool> for EventResult {
    fn from(handled: bool) -> Self {
        if handled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

/// Trait for components that react to the keyboard.
pub trait ComponentEvents {
    /// Handle a key event when this component is focused.
    ///
    /// Return `EventResult::Consumed` to prevent the key from being
    /// processed further.
    fn on_key(&self, _key: &KeyCombo) -> EventResult {
        EventResult::Ignored
    }
}
