//! Checkbox components with tri-state support.
//!
//! A "select all" checkbox shows the aggregate of its children: checked
//! when every child is checked, unchecked when none is, indeterminate
//! otherwise.

mod events;
mod state;
mod tri_bool;

pub use state::{CheckItem, CheckList, Checkbox};
pub use tri_bool::{tri_bool, TriBool};
