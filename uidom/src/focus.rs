use crossterm::event::{Event as CrosstermEvent, KeyEventKind};

use crate::element::{find_element, is_within, Element};
use crate::event::{Event, Key, Modifiers};

/// A region that keeps Tab / Shift+Tab cycling inside its descendants.
///
/// The container is referenced by element ID, so the trap survives
/// re-rendering as long as the container keeps its ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTrap {
    /// ID of the element whose descendants receive focus.
    pub container: String,
    /// Element focused before the trap was activated. Restored on release.
    pub return_focus: Option<String>,
    /// Whether Escape releases the trap.
    pub escape_deactivates: bool,
}

impl FocusTrap {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            return_focus: None,
            escape_deactivates: true,
        }
    }

    pub fn escape_deactivates(mut self, enabled: bool) -> Self {
        self.escape_deactivates = enabled;
        self
    }

    /// Tabbable elements inside the trap, in tab order.
    ///
    /// Falls back to the container itself when it is focusable but holds
    /// nothing tabbable, so focus never escapes an empty dialog.
    pub fn focusable(&self, root: &Element) -> Vec<String> {
        let ids = collect_focusable_in(root, &self.container);
        if !ids.is_empty() {
            return ids;
        }
        match find_element(root, &self.container) {
            Some(container) if container.focusable && !container.disabled && !container.hidden => {
                vec![container.id.clone()]
            }
            _ => Vec::new(),
        }
    }

    pub fn first(&self, root: &Element) -> Option<String> {
        self.focusable(root).first().cloned()
    }

    pub fn last(&self, root: &Element) -> Option<String> {
        self.focusable(root).last().cloned()
    }

    /// Element after `current`; wraps from last to first.
    pub fn next(&self, root: &Element, current: Option<&str>) -> Option<String> {
        next_focusable(&self.focusable(root), current)
    }

    /// Element before `current`; wraps from first to last.
    pub fn prev(&self, root: &Element, current: Option<&str>) -> Option<String> {
        prev_focusable(&self.focusable(root), current)
    }

    /// Whether `id` is the container or one of its descendants.
    pub fn contains(&self, root: &Element, id: &str) -> bool {
        is_within(root, &self.container, id)
    }
}

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
    /// Active traps, innermost last.
    traps: Vec<FocusTrap>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// The innermost active trap.
    pub fn active_trap(&self) -> Option<&FocusTrap> {
        self.traps.last()
    }

    /// Number of stacked traps.
    pub fn trap_depth(&self) -> usize {
        self.traps.len()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed. Elements outside the active trap
    /// are rejected.
    pub fn focus(&mut self, id: &str, root: &Element) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        if let Some(trap) = self.traps.last()
            && !trap.contains(root, id)
        {
            log::debug!("[focus] rejected {} outside trap {}", id, trap.container);
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Tab order of the current scope: the active trap, or the whole tree.
    pub fn tab_order(&self, root: &Element) -> Vec<String> {
        match self.traps.last() {
            Some(trap) => trap.focusable(root),
            None => collect_focusable(root),
        }
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let order = self.tab_order(root);
        let new_focus = next_focusable(&order, self.focused.as_deref())?;
        self.move_to(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let order = self.tab_order(root);
        let new_focus = prev_focusable(&order, self.focused.as_deref())?;
        self.move_to(new_focus)
    }

    /// Focus the first element of the current scope.
    pub fn focus_first(&mut self, root: &Element) -> Option<String> {
        let new_focus = self.tab_order(root).into_iter().next()?;
        self.move_to(new_focus)
    }

    /// Focus the last element of the current scope.
    pub fn focus_last(&mut self, root: &Element) -> Option<String> {
        let new_focus = self.tab_order(root).pop()?;
        self.move_to(new_focus)
    }

    /// Activate a trap and move focus to its first focusable element.
    ///
    /// Traps stack, so a dialog opened from inside another dialog confines
    /// focus to the inner one until it is released. Returns the newly
    /// focused element, or None if the container holds nothing focusable.
    ///
    /// The container must exist and be an `interaction_scope`; otherwise
    /// the trap is not activated, focus is left alone and None is returned.
    pub fn activate_trap(&mut self, mut trap: FocusTrap, root: &Element) -> Option<String> {
        match find_element(root, &trap.container) {
            None => {
                log::warn!("[focus] trap container {} not found", trap.container);
                return None;
            }
            Some(container) if !container.interaction_scope => {
                log::warn!(
                    "[focus] trap container {} is not an interaction scope",
                    trap.container
                );
                return None;
            }
            Some(_) => {}
        }

        trap.return_focus = self.focused.clone();
        let first = trap.first(root);
        log::debug!(
            "[focus] trap {} activated (depth {}), return_focus={:?}, first={:?}",
            trap.container,
            self.traps.len() + 1,
            trap.return_focus,
            first
        );
        self.traps.push(trap);

        match first {
            Some(id) => {
                self.focused = Some(id.clone());
                Some(id)
            }
            None => {
                log::warn!("[focus] trap activated with nothing focusable");
                self.focused = None;
                None
            }
        }
    }

    /// Release the innermost trap and restore the focus it saved.
    pub fn deactivate_trap(&mut self) -> Option<FocusTrap> {
        let trap = self.traps.pop()?;
        log::debug!(
            "[focus] trap {} released, restoring {:?}",
            trap.container,
            trap.return_focus
        );
        self.focused = trap.return_focus.clone();
        Some(trap)
    }

    /// Process raw crossterm events and produce high-level events.
    pub fn process_events(&mut self, raw: &[CrosstermEvent], root: &Element) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            let CrosstermEvent::Key(key_event) = raw_event else {
                continue;
            };
            // Only process key press events (not release/repeat on some terminals)
            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            let key: Key = key_event.code.into();
            let modifiers: Modifiers = key_event.modifiers.into();
            log::trace!("[focus] key {:?} {:?} focused={:?}", key, modifiers, self.focused);

            let backwards = key == Key::BackTab || (key == Key::Tab && modifiers.shift);
            if key == Key::Tab || key == Key::BackTab {
                let old = self.focused.clone();
                let new = if backwards {
                    self.focus_prev(root)
                } else {
                    self.focus_next(root)
                };
                if let Some(new) = new {
                    if let Some(old) = old {
                        events.push(Event::Blur {
                            target: old,
                            new_target: Some(new.clone()),
                        });
                    }
                    events.push(Event::Focus { target: new });
                }
                continue;
            }

            if key == Key::Escape {
                if self.traps.last().is_some_and(|trap| trap.escape_deactivates) {
                    let old = self.focused.clone();
                    if let Some(trap) = self.deactivate_trap() {
                        let restored = trap.return_focus.clone();
                        if let Some(old) = old {
                            events.push(Event::Blur {
                                target: old,
                                new_target: restored.clone(),
                            });
                        }
                        events.push(Event::TrapReleased {
                            container: trap.container,
                        });
                        if let Some(restored) = restored {
                            events.push(Event::Focus { target: restored });
                        }
                    }
                    continue;
                }

                // Escape blurs focused element outside traps; only emits key
                // event if nothing focused
                if self.traps.is_empty()
                    && let Some(old) = self.focused.take()
                {
                    events.push(Event::Blur {
                        target: old,
                        new_target: None,
                    });
                    continue;
                }
            }

            events.push(Event::Key {
                target: self.focused.clone(),
                key,
                modifiers,
            });
        }

        events
    }

    fn move_to(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }
}

/// Collect all tabbable element IDs in tab order.
///
/// Elements with a positive `tab_index` come first (ascending, ties in tree
/// order), followed by `tab_index == 0` elements in tree order. Hidden and
/// disabled subtrees and negative `tab_index` elements are skipped.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut candidates = Vec::new();
    collect_focusable_recursive(element, false, &mut candidates);
    tab_order(candidates)
}

/// Collect tabbable descendants of `container_id` (the container itself is
/// not included). Empty if the container does not exist.
pub fn collect_focusable_in(root: &Element, container_id: &str) -> Vec<String> {
    let Some(container) = find_element(root, container_id) else {
        return Vec::new();
    };
    if container.hidden || container.disabled {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for child in container.child_elements() {
        collect_focusable_recursive(child, false, &mut candidates);
    }
    tab_order(candidates)
}

/// Next ID after `current`, wrapping. Starts at the first when `current` is
/// None or not in `ids`.
pub fn next_focusable(ids: &[String], current: Option<&str>) -> Option<String> {
    if ids.is_empty() {
        return None;
    }
    let idx = current.and_then(|current| ids.iter().position(|id| id == current));
    match idx {
        Some(i) => Some(ids[(i + 1) % ids.len()].clone()),
        None => Some(ids[0].clone()),
    }
}

/// Previous ID before `current`, wrapping. Starts at the last when `current`
/// is None or not in `ids`.
pub fn prev_focusable(ids: &[String], current: Option<&str>) -> Option<String> {
    let last = ids.len().checked_sub(1)?;
    let idx = current.and_then(|current| ids.iter().position(|id| id == current));
    match idx {
        Some(0) | None => Some(ids[last].clone()),
        Some(i) => Some(ids[i - 1].clone()),
    }
}

fn collect_focusable_recursive(
    element: &Element,
    inherited_disabled: bool,
    result: &mut Vec<(String, i32)>,
) {
    if element.hidden {
        return;
    }
    let disabled = inherited_disabled || element.disabled;
    if element.focusable && !disabled && element.tab_index >= 0 {
        result.push((element.id.clone(), element.tab_index));
    }
    for child in element.child_elements() {
        collect_focusable_recursive(child, disabled, result);
    }
}

fn tab_order(candidates: Vec<(String, i32)>) -> Vec<String> {
    let (mut positive, natural): (Vec<_>, Vec<_>) =
        candidates.into_iter().partition(|(_, tab_index)| *tab_index > 0);
    // sort_by_key is stable, so equal tab indices keep tree order
    positive.sort_by_key(|(_, tab_index)| *tab_index);
    positive
        .into_iter()
        .chain(natural)
        .map(|(id, _)| id)
        .collect()
}
