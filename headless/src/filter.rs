//! Option filtering for comboboxes.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::{Deserialize, Serialize};

/// How typed input narrows the option list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Case-insensitive substring match, original order kept.
    #[default]
    Contains,
    /// Fuzzy match ranked by score.
    Fuzzy,
}

/// Result of a filter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
    /// Match score (higher is better). Always 0 for `Contains`.
    pub score: u32,
}

/// Filter `items` by `query`.
///
/// Empty query returns all items with score 0.
pub fn filter_options<S: AsRef<str>>(query: &str, items: &[S], mode: FilterMode) -> Vec<FilterMatch> {
    if query.is_empty() {
        return items
            .iter()
            .enumerate()
            .map(|(index, _)| FilterMatch { index, score: 0 })
            .collect();
    }

    match mode {
        FilterMode::Contains => contains_filter(query, items),
        FilterMode::Fuzzy => fuzzy_filter(query, items),
    }
}

fn contains_filter<S: AsRef<str>>(query: &str, items: &[S]) -> Vec<FilterMatch> {
    let needle = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, label)| label.as_ref().to_lowercase().contains(&needle))
        .map(|(index, _)| FilterMatch { index, score: 0 })
        .collect()
}

fn fuzzy_filter<S: AsRef<str>>(query: &str, items: &[S]) -> Vec<FilterMatch> {
    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(label.as_ref(), &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    // Stable sort keeps original order among equal scores
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    log::trace!("[filter] fuzzy {:?} matched {} of {}", query, matches.len(), items.len());

    matches
}
