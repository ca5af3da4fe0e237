//! Pagination configuration.

use serde::{Deserialize, Serialize};

use crate::error::PaginationError;

/// Controls how many page buttons surround the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Pages shown on each side of the current page.
    pub sibling_count: usize,

    /// Pages always shown at the start and at the end. Must be at least 1.
    pub boundary_count: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            sibling_count: 1,
            boundary_count: 1,
        }
    }
}

impl PaginationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sibling pages.
    pub fn sibling_count(mut self, count: usize) -> Self {
        self.sibling_count = count;
        self
    }

    /// Set the number of boundary pages.
    pub fn boundary_count(mut self, count: usize) -> Self {
        self.boundary_count = count;
        self
    }

    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.boundary_count == 0 {
            return Err(PaginationError::InvalidBoundaryCount);
        }
        Ok(())
    }
}
