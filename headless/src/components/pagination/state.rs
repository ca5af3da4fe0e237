//! Pagination component state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{pagination_positions, PaginationConfig, PaginationItem};
use crate::error::PaginationError;

/// Internal state for a Pagination component
#[derive(Debug)]
struct PaginationInner {
    /// Current page (1-based)
    page: usize,
    /// Total number of pages (at least 1)
    total_pages: usize,
    config: PaginationConfig,
}

/// A pagination control's state.
///
/// Clones share state, so a handler and the view can both hold one.
/// The current page always stays within `1..=total_pages`.
///
/// # Example
///
/// ```ignore
/// let pagination = Pagination::new(12)?;
/// pagination.next();
/// assert_eq!(pagination.page(), 2);
/// ```
#[derive(Debug)]
pub struct Pagination {
    inner: Arc<RwLock<PaginationInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Pagination {
    /// Create a pagination with default config, starting at page 1.
    pub fn new(total_pages: usize) -> Result<Self, PaginationError> {
        Self::with_config(total_pages, PaginationConfig::default())
    }

    /// Create a pagination with the given config, starting at page 1.
    pub fn with_config(
        total_pages: usize,
        config: PaginationConfig,
    ) -> Result<Self, PaginationError> {
        config.validate()?;
        if total_pages == 0 {
            return Err(PaginationError::NoPages);
        }
        Ok(Self {
            inner: Arc::new(RwLock::new(PaginationInner {
                page: 1,
                total_pages,
                config,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, PaginationInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, PaginationInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Current page (1-based).
    pub fn page(&self) -> usize {
        self.read().page
    }

    pub fn total_pages(&self) -> usize {
        self.read().total_pages
    }

    pub fn config(&self) -> PaginationConfig {
        self.read().config
    }

    pub fn has_prev(&self) -> bool {
        self.read().page > 1
    }

    pub fn has_next(&self) -> bool {
        let guard = self.read();
        guard.page < guard.total_pages
    }

    /// The page buttons and separators to render.
    pub fn items(&self) -> Vec<PaginationItem> {
        let guard = self.read();
        pagination_positions(guard.page, guard.total_pages, &guard.config).unwrap_or_else(|e| {
            // Unreachable while the setters keep the state valid
            log::warn!("[pagination] invalid state: {e}");
            Vec::new()
        })
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Go to a page. Returns whether the page changed.
    pub fn set_page(&self, page: usize) -> Result<bool, PaginationError> {
        let mut guard = self.write();
        if page == 0 || page > guard.total_pages {
            return Err(PaginationError::PageOutOfRange {
                page,
                total: guard.total_pages,
            });
        }
        Ok(self.apply_page(&mut guard, page))
    }

    /// Go to the next page. Returns false on the last page.
    pub fn next(&self) -> bool {
        let mut guard = self.write();
        let page = (guard.page + 1).min(guard.total_pages);
        self.apply_page(&mut guard, page)
    }

    /// Go to the previous page. Returns false on the first page.
    pub fn prev(&self) -> bool {
        let mut guard = self.write();
        let page = guard.page.saturating_sub(1).max(1);
        self.apply_page(&mut guard, page)
    }

    pub fn first(&self) -> bool {
        let mut guard = self.write();
        self.apply_page(&mut guard, 1)
    }

    pub fn last(&self) -> bool {
        let mut guard = self.write();
        let page = guard.total_pages;
        self.apply_page(&mut guard, page)
    }

    /// Change the page count. The current page is clamped into range.
    pub fn set_total_pages(&self, total_pages: usize) -> Result<(), PaginationError> {
        if total_pages == 0 {
            return Err(PaginationError::NoPages);
        }
        let mut guard = self.write();
        if guard.total_pages != total_pages {
            guard.total_pages = total_pages;
            let page = guard.page.min(total_pages);
            if page != guard.page {
                log::debug!("[pagination] page clamped {} -> {}", guard.page, page);
                guard.page = page;
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
        Ok(())
    }

    pub fn set_config(&self, config: PaginationConfig) -> Result<(), PaginationError> {
        config.validate()?;
        let mut guard = self.write();
        if guard.config != config {
            guard.config = config;
            self.dirty.store(true, Ordering::SeqCst);
        }
        Ok(())
    }

    fn apply_page(&self, guard: &mut PaginationInner, page: usize) -> bool {
        if guard.page == page {
            return false;
        }
        log::debug!("[pagination] page {} -> {}", guard.page, page);
        guard.page = page;
        self.dirty.store(true, Ordering::SeqCst);
        true
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the pagination state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Pagination {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
