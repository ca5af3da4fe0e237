//! Keyboard list navigation that skips disabled items.
//!
//! These functions back every arrow-key driven component (listbox, menu,
//! tabs, radio group). "No enabled item" is reported as `Ok(None)`; an
//! out-of-range current index is an error rather than being clamped.

use serde::{Deserialize, Serialize};
use uidom::{Element, Key};

use crate::error::NavigationError;
use crate::keys::KeyCombo;

/// An item that can be skipped during keyboard navigation.
pub trait NavItem {
    fn is_disabled(&self) -> bool;
}

/// A plain `bool` is its own disabled flag.
impl NavItem for bool {
    fn is_disabled(&self) -> bool {
        *self
    }
}

impl<T: NavItem + ?Sized> NavItem for &T {
    fn is_disabled(&self) -> bool {
        (**self).is_disabled()
    }
}

impl NavItem for Element {
    fn is_disabled(&self) -> bool {
        self.disabled || self.hidden
    }
}

/// Axis the arrow keys move along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Up/Down move (listbox, menu).
    #[default]
    Vertical,
    /// Left/Right move (tabs, toolbar).
    Horizontal,
}

/// Navigation behavior shared by list-like components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Wrap from the last item to the first and back.
    pub looping: bool,
    pub orientation: Orientation,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            looping: true,
            orientation: Orientation::Vertical,
        }
    }
}

impl NavConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether navigation wraps around.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Map a key press to a navigation action for this orientation.
    pub fn action(&self, key: &KeyCombo) -> Option<NavAction> {
        if key.has_command_modifier() || key.modifiers.shift {
            return None;
        }
        match (key.key, self.orientation) {
            (Key::Down, Orientation::Vertical) | (Key::Right, Orientation::Horizontal) => {
                Some(NavAction::Next)
            }
            (Key::Up, Orientation::Vertical) | (Key::Left, Orientation::Horizontal) => {
                Some(NavAction::Prev)
            }
            (Key::Home, _) => Some(NavAction::First),
            (Key::End, _) => Some(NavAction::Last),
            _ => None,
        }
    }
}

/// A movement requested by the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Prev,
    First,
    Last,
}

fn check_bounds(current: Option<usize>, len: usize) -> Result<(), NavigationError> {
    match current {
        Some(index) if index >= len => Err(NavigationError::IndexOutOfBounds { index, len }),
        _ => Ok(()),
    }
}

/// Index of the next enabled item after `current`.
///
/// `current == None` means nothing is highlighted yet and the search starts
/// at index 0. With `looping`, the search wraps past the end. Without it,
/// the search stops at the end and falls back to `current` when that item
/// is enabled.
///
/// Returns `Ok(None)` when no enabled item can be reached.
pub fn next_enabled_index<T: NavItem>(
    items: &[T],
    current: Option<usize>,
    looping: bool,
) -> Result<Option<usize>, NavigationError> {
    let len = items.len();
    check_bounds(current, len)?;

    let start = current.map_or(0, |c| c + 1);
    let found = if looping {
        (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&i| !items[i].is_disabled())
    } else {
        (start..len).find(|&i| !items[i].is_disabled())
    };

    Ok(found.or_else(|| current.filter(|&c| !items[c].is_disabled())))
}

/// Index of the previous enabled item before `current`.
///
/// `current == None` starts the search at the last item. Boundary and
/// wrapping rules mirror [`next_enabled_index`].
pub fn prev_enabled_index<T: NavItem>(
    items: &[T],
    current: Option<usize>,
    looping: bool,
) -> Result<Option<usize>, NavigationError> {
    let len = items.len();
    check_bounds(current, len)?;

    let found = if looping {
        let base = current.unwrap_or(len);
        (1..=len)
            .map(|offset| (base + len - offset) % len)
            .find(|&i| !items[i].is_disabled())
    } else {
        let end = current.unwrap_or(len);
        (0..end).rev().find(|&i| !items[i].is_disabled())
    };

    Ok(found.or_else(|| current.filter(|&c| !items[c].is_disabled())))
}

/// First enabled item (Home).
pub fn first_enabled_index<T: NavItem>(items: &[T]) -> Option<usize> {
    items.iter().position(|item| !item.is_disabled())
}

/// Last enabled item (End).
pub fn last_enabled_index<T: NavItem>(items: &[T]) -> Option<usize> {
    items.iter().rposition(|item| !item.is_disabled())
}

/// Resolve a navigation action to a target index.
pub fn resolve<T: NavItem>(
    items: &[T],
    current: Option<usize>,
    action: NavAction,
    looping: bool,
) -> Result<Option<usize>, NavigationError> {
    match action {
        NavAction::Next => next_enabled_index(items, current, looping),
        NavAction::Prev => prev_enabled_index(items, current, looping),
        NavAction::First => Ok(first_enabled_index(items)),
        NavAction::Last => Ok(last_enabled_index(items)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bounds() {
        assert!(check_bounds(None, 0).is_ok());
        assert!(check_bounds(Some(2), 3).is_ok());
        assert_eq!(
            check_bounds(Some(3), 3),
            Err(NavigationError::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_action_by_orientation() {
        let vertical = NavConfig::new();
        let horizontal = NavConfig::new().orientation(Orientation::Horizontal);

        assert_eq!(vertical.action(&KeyCombo::key(Key::Down)), Some(NavAction::Next));
        assert_eq!(vertical.action(&KeyCombo::key(Key::Right)), None);
        assert_eq!(horizontal.action(&KeyCombo::key(Key::Left)), Some(NavAction::Prev));
        assert_eq!(horizontal.action(&KeyCombo::key(Key::Up)), None);
        assert_eq!(vertical.action(&KeyCombo::key(Key::End)), Some(NavAction::Last));
        assert_eq!(vertical.action(&KeyCombo::key(Key::Down).ctrl()), None);
    }
}
