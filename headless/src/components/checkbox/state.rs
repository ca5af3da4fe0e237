//! Checkbox and checklist state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use super::{tri_bool, TriBool};
use crate::navigation::NavItem;

#[derive(Debug, Default)]
struct CheckboxInner {
    value: TriBool,
    disabled: bool,
}

/// A single checkbox that may be indeterminate.
#[derive(Debug)]
pub struct Checkbox {
    inner: Arc<RwLock<CheckboxInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Checkbox {
    /// Create an unchecked checkbox
    pub fn new() -> Self {
        Self::with_value(TriBool::False)
    }

    pub fn with_value(value: impl Into<TriBool>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CheckboxInner {
                value: value.into(),
                disabled: false,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, CheckboxInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CheckboxInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn value(&self) -> TriBool {
        self.read().value
    }

    pub fn is_checked(&self) -> bool {
        self.read().value.is_checked()
    }

    pub fn is_disabled(&self) -> bool {
        self.read().disabled
    }

    /// Set the value. Returns whether it changed.
    pub fn set_value(&self, value: impl Into<TriBool>) -> bool {
        let value = value.into();
        let mut guard = self.write();
        if guard.value == value {
            return false;
        }
        guard.value = value;
        self.dirty.store(true, Ordering::SeqCst);
        true
    }

    /// Toggle like a click would. Returns the new value, or None if the
    /// checkbox is disabled.
    pub fn toggle(&self) -> Option<TriBool> {
        let mut guard = self.write();
        if guard.disabled {
            log::debug!("[checkbox] toggle ignored, disabled");
            return None;
        }
        guard.value = guard.value.toggled();
        self.dirty.store(true, Ordering::SeqCst);
        Some(guard.value)
    }

    pub fn set_disabled(&self, disabled: bool) {
        let mut guard = self.write();
        if guard.disabled != disabled {
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the checkbox state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Checkbox {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

/// One child of a [`CheckList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckItem {
    pub label: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl CheckItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checked: false,
            disabled: false,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl NavItem for CheckItem {
    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// A group of checkboxes with a derived "select all" value.
///
/// # Example
///
/// ```ignore
/// let list = CheckList::with_items(vec![
///     CheckItem::new("Email"),
///     CheckItem::new("SMS").checked(true),
/// ]);
/// assert_eq!(list.aggregate(), TriBool::Indeterminate);
/// list.toggle_all();
/// assert_eq!(list.aggregate(), TriBool::True);
/// ```
#[derive(Debug)]
pub struct CheckList {
    inner: Arc<RwLock<Vec<CheckItem>>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl CheckList {
    /// Create an empty checklist
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<CheckItem>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(items)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<CheckItem>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<CheckItem>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn items(&self) -> Vec<CheckItem> {
        self.read().clone()
    }

    /// Checked flags of all children, in order.
    pub fn values(&self) -> Vec<bool> {
        self.read().iter().map(|item| item.checked).collect()
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.read().get(index).is_some_and(|item| item.checked)
    }

    /// The "select all" value.
    pub fn aggregate(&self) -> TriBool {
        tri_bool(self.read().iter().map(|item| item.checked))
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    pub fn push(&self, item: CheckItem) {
        self.write().push(item);
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Set one child. Disabled children and out-of-range indices are left
    /// alone. Returns whether anything changed.
    pub fn set_child(&self, index: usize, checked: bool) -> bool {
        self.update_child(index, |_| checked)
    }

    /// Flip one child. Returns whether anything changed.
    pub fn toggle_child(&self, index: usize) -> bool {
        self.update_child(index, |current| !current)
    }

    pub fn set_disabled(&self, index: usize, disabled: bool) {
        let mut guard = self.write();
        if let Some(item) = guard.get_mut(index)
            && item.disabled != disabled
        {
            item.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check or uncheck every enabled child.
    pub fn set_all(&self, checked: bool) {
        let mut guard = self.write();
        self.apply_all(&mut guard, checked);
    }

    /// Click on the "select all" checkbox.
    ///
    /// Unchecks the enabled children when they are all checked, checks them
    /// otherwise. Disabled children keep their value, so a list with a
    /// disabled unchecked child still toggles. Returns the new aggregate.
    pub fn toggle_all(&self) -> TriBool {
        let mut guard = self.write();
        let all_enabled_checked = guard
            .iter()
            .filter(|item| !item.disabled)
            .all(|item| item.checked);
        self.apply_all(&mut guard, !all_enabled_checked);
        let aggregate = tri_bool(guard.iter().map(|item| item.checked));
        log::debug!("[checklist] toggle_all -> {:?}", aggregate);
        aggregate
    }

    /// Decide and write one child under a single write lock.
    fn update_child(&self, index: usize, next: impl FnOnce(bool) -> bool) -> bool {
        let mut guard = self.write();
        let Some(item) = guard.get_mut(index) else {
            log::warn!("[checklist] child {index} out of range");
            return false;
        };
        if item.disabled {
            return false;
        }
        let checked = next(item.checked);
        if item.checked == checked {
            return false;
        }
        item.checked = checked;
        self.dirty.store(true, Ordering::SeqCst);
        true
    }

    fn apply_all(&self, items: &mut [CheckItem], checked: bool) {
        let mut changed = false;
        for item in items.iter_mut().filter(|item| !item.disabled) {
            if item.checked != checked {
                item.checked = checked;
                changed = true;
            }
        }
        if changed {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the checklist state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for CheckList {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for CheckList {
    fn default() -> Self {
        Self::new()
    }
}
