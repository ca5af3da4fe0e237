//! Error types

use thiserror::Error;

/// Errors from building a pagination window or changing pages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// A pagination control needs at least one page.
    #[error("total page count must be at least 1")]
    NoPages,

    /// The requested page is outside `1..=total`.
    #[error("page {page} is outside 1..={total}")]
    PageOutOfRange {
        /// The rejected page.
        page: usize,
        /// The total page count.
        total: usize,
    },

    /// First and last pages are always shown, so at least one boundary page
    /// is required on each side.
    #[error("boundary count must be at least 1")]
    InvalidBoundaryCount,
}

/// Errors from keyboard list navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The current index does not point into the item list.
    #[error("index {index} out of bounds for {len} items")]
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// The item count.
        len: usize,
    },
}

/// Errors from slider configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    #[error("slider range is empty: min {min} must be below max {max}")]
    EmptyRange { min: f64, max: f64 },

    #[error("slider step must be a positive finite number, got {0}")]
    InvalidStep(f64),

    #[error("slider bounds must be finite")]
    NonFiniteBounds,
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Slider(#[from] SliderError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
