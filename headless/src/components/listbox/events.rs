//! Event handling for the Listbox component.

use std::time::Instant;

use uidom::Key;

use crate::components::events::{ComponentEvents, EventResult};
use crate::keys::KeyCombo;

use super::Listbox;

/// Event fired when the keyboard highlight moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightChangeEvent {
    /// Previous highlight (None if nothing was highlighted).
    pub previous: Option<usize>,
    /// Current highlight.
    pub current: Option<usize>,
}

/// Event fired when the selected option changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChangeEvent {
    pub previous: Option<usize>,
    pub current: usize,
}

/// Pending events to be dispatched after input handling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListboxEvents {
    pub highlight_change: Option<HighlightChangeEvent>,
    pub selection_change: Option<SelectionChangeEvent>,
    /// Whether the key was handled at all.
    pub handled: bool,
}

impl Listbox {
    /// Handle a key press at `now` (used for the typeahead timeout).
    /// Returns events that should be dispatched.
    pub fn handle_key(&self, key: &KeyCombo, now: Instant) -> ListboxEvents {
        let mut events = ListboxEvents::default();
        if key.has_command_modifier() {
            return events;
        }

        let previous_highlight = self.highlighted();
        let previous_selection = self.selected();

        if let Some(action) = self.config().action(key) {
            // The highlight always points into the options, so this only
            // fails if options were swapped without set_options
            if let Err(e) = self.navigate(action) {
                log::warn!("[listbox] navigation failed: {e}");
                return events;
            }
            events.handled = true;
        } else {
            match key.key {
                Key::Enter | Key::Char(' ') => {
                    self.select_highlighted();
                    events.handled = true;
                }
                other => {
                    if let Some(c) = other.printable() {
                        self.type_char(c, now);
                        events.handled = true;
                    }
                }
            }
        }

        let current_highlight = self.highlighted();
        if current_highlight != previous_highlight {
            events.highlight_change = Some(HighlightChangeEvent {
                previous: previous_highlight,
                current: current_highlight,
            });
        }
        if let Some(current) = self.selected()
            && previous_selection != Some(current)
        {
            events.selection_change = Some(SelectionChangeEvent {
                previous: previous_selection,
                current,
            });
        }

        events
    }
}

impl ComponentEvents for Listbox {
    fn on_key(&self, key: &KeyCombo) -> EventResult {
        self.handle_key(key, Instant::now()).handled.into()
    }
}
