//! Listbox component state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;
use crate::filter::{filter_options, FilterMatch, FilterMode};
use crate::navigation::{self, NavAction, NavConfig, NavItem};
use crate::typeahead::{typeahead_match, Typeahead, TypeaheadItem};

/// One option of a [`Listbox`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListboxOption {
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
}

impl ListboxOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    /// Mark the option as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl NavItem for ListboxOption {
    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl TypeaheadItem for ListboxOption {
    fn label(&self) -> &str {
        &self.label
    }
}

/// Internal state for a Listbox component
#[derive(Debug, Default)]
struct ListboxInner {
    options: Vec<ListboxOption>,
    /// Keyboard highlight (never a disabled option)
    highlighted: Option<usize>,
    selected: Option<usize>,
    config: NavConfig,
    typeahead: Typeahead,
}

/// A single-select listbox.
#[derive(Debug)]
pub struct Listbox {
    inner: Arc<RwLock<ListboxInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Listbox {
    /// Create an empty listbox
    pub fn new() -> Self {
        Self::with_options(Vec::new())
    }

    pub fn with_options(options: Vec<ListboxOption>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ListboxInner {
                options,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the navigation config
    pub fn with_config(self, config: NavConfig) -> Self {
        self.write().config = config;
        self
    }

    fn read(&self) -> RwLockReadGuard<'_, ListboxInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ListboxInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn options(&self) -> Vec<ListboxOption> {
        self.read().options.clone()
    }

    pub fn len(&self) -> usize {
        self.read().options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().options.is_empty()
    }

    pub fn config(&self) -> NavConfig {
        self.read().config
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.read().highlighted
    }

    pub fn selected(&self) -> Option<usize> {
        self.read().selected
    }

    pub fn selected_label(&self) -> Option<String> {
        let guard = self.read();
        guard
            .selected
            .and_then(|index| guard.options.get(index))
            .map(|option| option.label.clone())
    }

    /// Options matching `query`, for combobox-style filtering.
    pub fn filter(&self, query: &str, mode: FilterMode) -> Vec<FilterMatch> {
        let guard = self.read();
        let labels: Vec<&str> = guard.options.iter().map(|o| o.label.as_str()).collect();
        filter_options(query, &labels, mode)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Replace the options. Highlight and selection are cleared when they
    /// no longer point at an enabled option.
    pub fn set_options(&self, options: Vec<ListboxOption>) {
        let mut guard = self.write();
        let inner = &mut *guard;
        inner.options = options;
        let valid = |index: Option<usize>, options: &[ListboxOption]| {
            index.filter(|&i| options.get(i).is_some_and(|o| !o.disabled))
        };
        inner.highlighted = valid(inner.highlighted, &inner.options);
        inner.selected = valid(inner.selected, &inner.options);
        inner.typeahead.clear();
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Highlight a specific option. Disabled options are refused.
    /// Returns whether the highlight changed.
    pub fn highlight(&self, index: usize) -> Result<bool, NavigationError> {
        let mut guard = self.write();
        let len = guard.options.len();
        let option = guard
            .options
            .get(index)
            .ok_or(NavigationError::IndexOutOfBounds { index, len })?;
        if option.disabled {
            return Ok(false);
        }
        Ok(self.apply_highlight(&mut guard, Some(index)))
    }

    pub fn highlight_next(&self) -> Result<Option<usize>, NavigationError> {
        self.navigate(NavAction::Next)
    }

    pub fn highlight_prev(&self) -> Result<Option<usize>, NavigationError> {
        self.navigate(NavAction::Prev)
    }

    pub fn highlight_first(&self) -> Option<usize> {
        self.navigate(NavAction::First).ok().flatten()
    }

    pub fn highlight_last(&self) -> Option<usize> {
        self.navigate(NavAction::Last).ok().flatten()
    }

    /// Move the highlight and return where it landed.
    pub(crate) fn navigate(&self, action: NavAction) -> Result<Option<usize>, NavigationError> {
        let mut guard = self.write();
        let target = navigation::resolve(
            &guard.options,
            guard.highlighted,
            action,
            guard.config.looping,
        )?;
        log::trace!("[listbox] {:?} from {:?} -> {:?}", action, guard.highlighted, target);
        self.apply_highlight(&mut guard, target);
        Ok(target)
    }

    /// Feed a typed character to typeahead. Returns the matched option,
    /// which also becomes the highlight.
    pub fn type_char(&self, c: char, now: Instant) -> Option<usize> {
        let mut guard = self.write();
        let query = guard.typeahead.push(c, now).to_string();
        let found = typeahead_match(&guard.options, guard.highlighted, &query)?;
        log::trace!("[listbox] typeahead {:?} -> {}", query, found);
        self.apply_highlight(&mut guard, Some(found));
        Some(found)
    }

    /// Select the highlighted option. Returns the selection if it changed.
    pub fn select_highlighted(&self) -> Option<usize> {
        let mut guard = self.write();
        let index = guard.highlighted?;
        if guard.selected == Some(index) {
            return None;
        }
        guard.selected = Some(index);
        self.dirty.store(true, Ordering::SeqCst);
        Some(index)
    }

    /// Select an option directly (click). Disabled options are refused.
    /// Returns whether the selection changed.
    pub fn select(&self, index: usize) -> Result<bool, NavigationError> {
        let mut guard = self.write();
        let len = guard.options.len();
        let option = guard
            .options
            .get(index)
            .ok_or(NavigationError::IndexOutOfBounds { index, len })?;
        if option.disabled || guard.selected == Some(index) {
            return Ok(false);
        }
        guard.selected = Some(index);
        guard.highlighted = Some(index);
        self.dirty.store(true, Ordering::SeqCst);
        Ok(true)
    }

    pub fn clear_selection(&self) {
        let mut guard = self.write();
        if guard.selected.take().is_some() {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn apply_highlight(&self, guard: &mut ListboxInner, target: Option<usize>) -> bool {
        if guard.highlighted == target {
            return false;
        }
        guard.highlighted = target;
        self.dirty.store(true, Ordering::SeqCst);
        true
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the listbox state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Listbox {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for Listbox {
    fn default() -> Self {
        Self::new()
    }
}
