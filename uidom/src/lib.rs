pub mod element;
pub mod event;
pub mod focus;

pub use element::{find_element, is_within, Element};
pub use event::{Event, Key, Modifiers};
pub use focus::{
    collect_focusable, collect_focusable_in, next_focusable, prev_focusable, FocusState, FocusTrap,
};
