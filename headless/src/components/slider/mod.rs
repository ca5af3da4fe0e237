//! Slider component.
//!
//! Values are clamped into `[min, max]` and snapped to the nearest step
//! counted from `min`.

mod config;
mod events;
mod state;
mod value;

pub use config::SliderConfig;
pub use state::Slider;
pub use value::{clamp_value, percent_to_value, snap_to_step, value_to_percent};
