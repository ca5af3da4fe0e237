//! Event handling for the Checkbox component.

use uidom::Key;

use crate::components::events::{ComponentEvents, EventResult};
use crate::keys::KeyCombo;

use super::Checkbox;

impl ComponentEvents for Checkbox {
    fn on_key(&self, key: &KeyCombo) -> EventResult {
        // Only handle keys without modifiers
        if key.modifiers.ctrl || key.modifiers.alt || key.modifiers.shift {
            return EventResult::Ignored;
        }

        match key.key {
            Key::Char(' ') | Key::Enter => self.toggle().is_some().into(),
            _ => EventResult::Ignored,
        }
    }
}
