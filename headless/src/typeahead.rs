//! Type-to-select for listboxes and menus.
//!
//! Typing characters in quick succession builds a query that jumps to the
//! first enabled item whose label starts with it. Repeating a single
//! character cycles through the items starting with that character.

use std::time::{Duration, Instant};

use crate::navigation::NavItem;

/// Inactivity after which the typed query starts over.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// An item with a label that typeahead can match against.
pub trait TypeaheadItem: NavItem {
    fn label(&self) -> &str;
}

/// Find the item matching `query`, searching from `current` and wrapping.
///
/// Matching is a case-insensitive prefix match on the label. A query of one
/// repeated character starts after `current` so that pressing the same key
/// again moves to the next match; any other query starts at `current` so
/// that extending a matching query keeps the highlight in place.
pub fn typeahead_match<T: TypeaheadItem>(
    items: &[T],
    current: Option<usize>,
    query: &str,
) -> Option<usize> {
    let query = query.to_lowercase();
    let mut chars = query.chars();
    let first = chars.next()?;
    let len = items.len();
    if len == 0 {
        return None;
    }

    let repeated = chars.all(|c| c == first);
    let needle = if repeated {
        first.to_string()
    } else {
        query.clone()
    };
    let start = match current {
        Some(c) if repeated => c + 1,
        Some(c) => c,
        None => 0,
    };

    (0..len)
        .map(|offset| (start + offset) % len)
        .find(|&i| {
            let item = &items[i];
            !item.is_disabled() && item.label().to_lowercase().starts_with(&needle)
        })
}

/// Accumulates typed characters until the user pauses.
#[derive(Debug, Clone)]
pub struct Typeahead {
    buffer: String,
    last_input: Option<Instant>,
    timeout: Duration,
}

impl Default for Typeahead {
    fn default() -> Self {
        Self::new()
    }
}

impl Typeahead {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            last_input: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::new()
        }
    }

    /// Append a character typed at `now` and return the current query.
    pub fn push(&mut self, c: char, now: Instant) -> &str {
        let expired = self
            .last_input
            .is_some_and(|last| now.saturating_duration_since(last) > self.timeout);
        if expired {
            self.buffer.clear();
        }
        self.buffer.push(c);
        self.last_input = Some(now);
        &self.buffer
    }

    pub fn query(&self) -> &str {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.last_input = None;
    }
}
