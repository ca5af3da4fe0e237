//! Slider configuration.

use serde::{Deserialize, Serialize};

use crate::error::SliderError;

/// Range and step of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    /// Distance between selectable values.
    pub step: f64,
    /// Steps moved by PageUp/PageDown.
    pub page_multiplier: u32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            page_multiplier: 10,
        }
    }
}

impl SliderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value range.
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn page_multiplier(mut self, multiplier: u32) -> Self {
        self.page_multiplier = multiplier;
        self
    }

    /// Distance moved by PageUp/PageDown.
    pub fn page_step(&self) -> f64 {
        self.step * f64::from(self.page_multiplier.max(1))
    }

    pub fn validate(&self) -> Result<(), SliderError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(SliderError::NonFiniteBounds);
        }
        if self.min >= self.max {
            return Err(SliderError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SliderError::InvalidStep(self.step));
        }
        Ok(())
    }
}
