//! Event handling for the Slider component.

use uidom::Key;

use crate::components::events::{ComponentEvents, EventResult};
use crate::keys::KeyCombo;

use super::Slider;

impl ComponentEvents for Slider {
    fn on_key(&self, key: &KeyCombo) -> EventResult {
        if key.has_command_modifier() || self.is_disabled() {
            return EventResult::Ignored;
        }

        match key.key {
            Key::Right | Key::Up => {
                self.increment();
            }
            Key::Left | Key::Down => {
                self.decrement();
            }
            Key::PageUp => {
                self.page_up();
            }
            Key::PageDown => {
                self.page_down();
            }
            Key::Home => {
                self.to_min();
            }
            Key::End => {
                self.to_max();
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}
