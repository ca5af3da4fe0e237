//! Event handling for the Pagination component.

use uidom::Key;

use crate::components::events::{ComponentEvents, EventResult};
use crate::keys::KeyCombo;

use super::Pagination;

impl ComponentEvents for Pagination {
    fn on_key(&self, key: &KeyCombo) -> EventResult {
        if key.has_command_modifier() || key.modifiers.shift {
            return EventResult::Ignored;
        }

        // Boundary presses are still consumed so focus does not jump away
        match key.key {
            Key::Left | Key::PageUp => {
                self.prev();
                EventResult::Consumed
            }
            Key::Right | Key::PageDown => {
                self.next();
                EventResult::Consumed
            }
            Key::Home => {
                self.first();
                EventResult::Consumed
            }
            Key::End => {
                self.last();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
