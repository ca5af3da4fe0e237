//! Pagination component.
//!
//! The window builder decides which page buttons a pagination control
//! shows: the boundary pages at each end, the current page with its
//! siblings, and a single separator for every longer gap.
//!
//! # Example
//!
//! ```ignore
//! use headless::prelude::*;
//!
//! let config = PaginationConfig::new().sibling_count(1);
//! let items = pagination_positions(10, 20, &config)?;
//! // [1, ..., 9, 10, 11, ..., 20]
//!
//! let pagination = Pagination::with_config(20, config)?;
//! pagination.set_page(10)?;
//! for item in pagination.items() {
//!     match item {
//!         PaginationItem::Page(page) => { /* render a page button */ }
//!         PaginationItem::Separator => { /* render "..." */ }
//!     }
//! }
//! ```

mod config;
mod events;
mod positions;
mod state;

pub use config::PaginationConfig;
pub use positions::{pagination_positions, with_separators, PaginationItem};
pub use state::Pagination;
