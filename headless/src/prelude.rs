//! Prelude module for convenient imports.
//!
//! ```ignore
//! use headless::prelude::*;
//! ```

pub use crate::components::checkbox::{tri_bool, CheckItem, CheckList, Checkbox, TriBool};
pub use crate::components::listbox::{Listbox, ListboxEvents, ListboxOption};
pub use crate::components::pagination::{
    pagination_positions, with_separators, Pagination, PaginationConfig, PaginationItem,
};
pub use crate::components::slider::{Slider, SliderConfig};
pub use crate::components::{ComponentEvents, EventResult};
pub use crate::error::{Error, NavigationError, PaginationError, SliderError};
pub use crate::filter::{filter_options, FilterMatch, FilterMode};
pub use crate::keys::KeyCombo;
pub use crate::navigation::{
    first_enabled_index, last_enabled_index, next_enabled_index, prev_enabled_index, NavConfig,
    NavItem, Orientation,
};
pub use crate::typeahead::{typeahead_match, Typeahead, TypeaheadItem};

pub use uidom::{Key, Modifiers};
