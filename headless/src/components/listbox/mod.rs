//! Listbox component: a single-select list driven by the keyboard.
//!
//! Also covers the keyboard model of menus, tabs and radio groups through
//! [`NavConfig`](crate::navigation::NavConfig): arrow keys move the
//! highlight over enabled options, Home/End jump to the ends, and typing
//! jumps to a matching label.
//!
//! # Example
//!
//! ```ignore
//! let listbox = Listbox::with_options(vec![
//!     ListboxOption::new("Apple"),
//!     ListboxOption::new("Banana").disabled(),
//!     ListboxOption::new("Cherry"),
//! ]);
//! listbox.highlight_next()?; // Apple
//! listbox.highlight_next()?; // Cherry, Banana is skipped
//! listbox.select_highlighted();
//! ```

mod events;
mod state;

pub use events::{HighlightChangeEvent, ListboxEvents, SelectionChangeEvent};
pub use state::{Listbox, ListboxOption};
