//! Slider component state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{snap_to_step, value_to_percent, SliderConfig};
use crate::error::SliderError;

#[derive(Debug)]
struct SliderInner {
    value: f64,
    config: SliderConfig,
    disabled: bool,
}

/// A single-thumb slider.
///
/// The value is always a snapped step inside the configured range.
#[derive(Debug)]
pub struct Slider {
    inner: Arc<RwLock<SliderInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Slider {
    /// Create a slider at `config.min`.
    pub fn new(config: SliderConfig) -> Result<Self, SliderError> {
        config.validate()?;
        Ok(Self {
            inner: Arc::new(RwLock::new(SliderInner {
                value: config.min,
                config,
                disabled: false,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Create a slider at `value` (snapped).
    pub fn with_value(config: SliderConfig, value: f64) -> Result<Self, SliderError> {
        let slider = Self::new(config)?;
        slider.set_value(value);
        slider.clear_dirty();
        Ok(slider)
    }

    fn read(&self) -> RwLockReadGuard<'_, SliderInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SliderInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn value(&self) -> f64 {
        self.read().value
    }

    pub fn config(&self) -> SliderConfig {
        self.read().config
    }

    /// Thumb position, 0 to 100.
    pub fn percent(&self) -> f64 {
        let guard = self.read();
        value_to_percent(guard.value, &guard.config)
    }

    pub fn is_disabled(&self) -> bool {
        self.read().disabled
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the value (clamped and snapped). Returns whether it changed.
    pub fn set_value(&self, value: f64) -> bool {
        let mut guard = self.write();
        if value.is_nan() {
            log::warn!("[slider] ignoring NaN value");
            return false;
        }
        let snapped = snap_to_step(value, &guard.config);
        if snapped == guard.value {
            return false;
        }
        log::debug!("[slider] value {} -> {}", guard.value, snapped);
        guard.value = snapped;
        self.dirty.store(true, Ordering::SeqCst);
        true
    }

    /// Move by `delta`. Ignored while disabled.
    pub fn step_by(&self, delta: f64) -> bool {
        let target = {
            let guard = self.read();
            if guard.disabled {
                return false;
            }
            guard.value + delta
        };
        self.set_value(target)
    }

    pub fn increment(&self) -> bool {
        let step = self.config().step;
        self.step_by(step)
    }

    pub fn decrement(&self) -> bool {
        let step = self.config().step;
        self.step_by(-step)
    }

    pub fn page_up(&self) -> bool {
        let step = self.config().page_step();
        self.step_by(step)
    }

    pub fn page_down(&self) -> bool {
        let step = self.config().page_step();
        self.step_by(-step)
    }

    pub fn to_min(&self) -> bool {
        if self.is_disabled() {
            return false;
        }
        let min = self.config().min;
        self.set_value(min)
    }

    pub fn to_max(&self) -> bool {
        if self.is_disabled() {
            return false;
        }
        let max = self.config().max;
        self.set_value(max)
    }

    /// Replace the config; the value is re-snapped into the new range.
    pub fn set_config(&self, config: SliderConfig) -> Result<(), SliderError> {
        config.validate()?;
        let mut guard = self.write();
        guard.config = config;
        guard.value = snap_to_step(guard.value, &config);
        self.dirty.store(true, Ordering::SeqCst);
        Ok(())
    }

    pub fn set_disabled(&self, disabled: bool) {
        let mut guard = self.write();
        if guard.disabled != disabled {
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the slider state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Slider {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
