//! Pagination window building.

use serde::{Deserialize, Serialize};

use super::PaginationConfig;
use crate::error::PaginationError;

/// One entry of a pagination control.
///
/// Serializes as `{"page": n}` or `{"separator": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ItemRepr", into = "ItemRepr")]
pub enum PaginationItem {
    /// A 1-based page button.
    Page(usize),
    /// Stands in for two or more hidden pages.
    Separator,
}

impl PaginationItem {
    /// The page number, if this is a page.
    pub fn page(&self) -> Option<usize> {
        match self {
            PaginationItem::Page(page) => Some(*page),
            PaginationItem::Separator => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, PaginationItem::Separator)
    }
}

impl std::fmt::Display for PaginationItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaginationItem::Page(page) => write!(f, "{page}"),
            PaginationItem::Separator => write!(f, "..."),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<usize>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    separator: bool,
}

impl From<PaginationItem> for ItemRepr {
    fn from(item: PaginationItem) -> Self {
        match item {
            PaginationItem::Page(page) => ItemRepr {
                page: Some(page),
                separator: false,
            },
            PaginationItem::Separator => ItemRepr {
                page: None,
                separator: true,
            },
        }
    }
}

impl TryFrom<ItemRepr> for PaginationItem {
    type Error = String;

    fn try_from(repr: ItemRepr) -> Result<Self, Self::Error> {
        match (repr.page, repr.separator) {
            (Some(page), false) => Ok(PaginationItem::Page(page)),
            (None, true) => Ok(PaginationItem::Separator),
            (Some(_), true) => Err("pagination item cannot be both a page and a separator".into()),
            (None, false) => Err("pagination item needs a page or a separator".into()),
        }
    }
}

/// Build the pagination window for `current` out of `total` pages.
///
/// Shows `config.boundary_count` pages at each end and
/// `config.sibling_count` pages on each side of `current`, then collapses
/// the gaps with [`with_separators`]. The first page, the last page and
/// the current page are always present.
///
/// # Errors
///
/// - [`PaginationError::NoPages`] if `total == 0`
/// - [`PaginationError::PageOutOfRange`] if `current` is not in `1..=total`
/// - [`PaginationError::InvalidBoundaryCount`] if the config is invalid
pub fn pagination_positions(
    current: usize,
    total: usize,
    config: &PaginationConfig,
) -> Result<Vec<PaginationItem>, PaginationError> {
    config.validate()?;
    if total == 0 {
        return Err(PaginationError::NoPages);
    }
    if current == 0 || current > total {
        return Err(PaginationError::PageOutOfRange {
            page: current,
            total,
        });
    }

    // Neither count can show more than `total` pages
    let boundary = config.boundary_count.min(total);
    let siblings = config.sibling_count.min(total);
    let siblings_start = current.saturating_sub(siblings).max(1);
    let siblings_end = current.saturating_add(siblings).min(total);

    let capacity = boundary
        .saturating_mul(2)
        .saturating_add(siblings_end - siblings_start + 1);
    let mut pages: Vec<usize> = Vec::with_capacity(capacity.min(total));
    pages.extend(1..=boundary);
    pages.extend(siblings_start..=siblings_end);
    pages.extend(total - boundary + 1..=total);

    Ok(with_separators(&pages))
}

/// Turn a set of shown pages into pagination items.
///
/// Pages are sorted and deduplicated first; page 0 is dropped. A gap of a
/// single hidden page shows that page instead of a separator, since a
/// separator would take the same space. Longer gaps become one separator.
///
/// `[1, 4, 5, 6, 20]` becomes `[1, ..., 4, 5, 6, ..., 20]`.
pub fn with_separators(pages: &[usize]) -> Vec<PaginationItem> {
    let mut sorted: Vec<usize> = pages.iter().copied().filter(|&page| page > 0).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut items = Vec::with_capacity(sorted.len() + 2);
    let mut previous: Option<usize> = None;
    for page in sorted {
        if let Some(previous) = previous {
            match page - previous {
                1 => {}
                2 => items.push(PaginationItem::Page(previous + 1)),
                _ => items.push(PaginationItem::Separator),
            }
        }
        items.push(PaginationItem::Page(page));
        previous = Some(page);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repr_rejects_ambiguous_items() {
        let both = ItemRepr {
            page: Some(3),
            separator: true,
        };
        assert!(PaginationItem::try_from(both).is_err());

        let neither = ItemRepr {
            page: None,
            separator: false,
        };
        assert!(PaginationItem::try_from(neither).is_err());
    }
}
