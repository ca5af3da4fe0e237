pub mod components;
pub mod error;
pub mod filter;
pub mod keys;
pub mod navigation;
pub mod prelude;
pub mod typeahead;

pub use error::{Error, NavigationError, PaginationError, Result, SliderError};
pub use keys::KeyCombo;
