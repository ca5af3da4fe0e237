//! Headless components with self-managed state.
//!
//! Each component lives in its own module with:
//! - `state.rs` - the component state type
//! - `events.rs` - keyboard handling
//! - `mod.rs` - public exports and the pure algorithms behind the state

pub mod checkbox;
mod events;
pub mod listbox;
pub mod pagination;
pub mod slider;

pub use events::{ComponentEvents, EventResult};
