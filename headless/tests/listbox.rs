use std::time::{Duration, Instant};

use headless::components::listbox::{
    HighlightChangeEvent, Listbox, ListboxEvents, ListboxOption, SelectionChangeEvent,
};
use headless::filter::{filter_options, FilterMode};
use headless::navigation::{NavConfig, Orientation};
use headless::typeahead::{typeahead_match, Typeahead};
use headless::{KeyCombo, NavigationError};
use uidom::Key;

fn fruits() -> Listbox {
    Listbox::with_options(vec![
        ListboxOption::new("Apple"),
        ListboxOption::new("Banana"),
        ListboxOption::new("Blueberry"),
        ListboxOption::new("Cherry").disabled(),
        ListboxOption::new("Date"),
    ])
}

fn press(listbox: &Listbox, key: Key) -> ListboxEvents {
    listbox.handle_key(&KeyCombo::key(key), Instant::now())
}

// ============================================================================
// Highlight navigation
// ============================================================================

#[test]
fn test_arrow_keys_skip_disabled() {
    let listbox = fruits();

    let events = press(&listbox, Key::Down);
    assert!(events.handled);
    assert_eq!(
        events.highlight_change,
        Some(HighlightChangeEvent {
            previous: None,
            current: Some(0),
        })
    );

    press(&listbox, Key::Down);
    press(&listbox, Key::Down);
    assert_eq!(listbox.highlighted(), Some(2));
    press(&listbox, Key::Down);
    assert_eq!(listbox.highlighted(), Some(4));

    // Wraps by default
    press(&listbox, Key::Down);
    assert_eq!(listbox.highlighted(), Some(0));
    press(&listbox, Key::Up);
    assert_eq!(listbox.highlighted(), Some(4));
}

#[test]
fn test_no_wrap_when_looping_disabled() {
    let listbox = fruits().with_config(NavConfig::new().looping(false));
    press(&listbox, Key::End);
    assert_eq!(listbox.highlighted(), Some(4));

    let events = press(&listbox, Key::Down);
    assert!(events.handled);
    assert_eq!(events.highlight_change, None);
    assert_eq!(listbox.highlighted(), Some(4));
}

#[test]
fn test_home_end() {
    let listbox = Listbox::with_options(vec![
        ListboxOption::new("Off").disabled(),
        ListboxOption::new("Low"),
        ListboxOption::new("High"),
        ListboxOption::new("Max").disabled(),
    ]);
    press(&listbox, Key::End);
    assert_eq!(listbox.highlighted(), Some(2));
    press(&listbox, Key::Home);
    assert_eq!(listbox.highlighted(), Some(1));
}

#[test]
fn test_horizontal_orientation() {
    let tabs = fruits().with_config(NavConfig::new().orientation(Orientation::Horizontal));

    assert!(!press(&tabs, Key::Down).handled);
    assert!(press(&tabs, Key::Right).handled);
    assert_eq!(tabs.highlighted(), Some(0));
    press(&tabs, Key::Left);
    assert_eq!(tabs.highlighted(), Some(4));
}

#[test]
fn test_all_disabled_highlights_nothing() {
    let listbox = Listbox::with_options(vec![
        ListboxOption::new("A").disabled(),
        ListboxOption::new("B").disabled(),
    ]);
    assert_eq!(listbox.highlight_next(), Ok(None));
    assert_eq!(listbox.highlight_last(), None);
    assert_eq!(listbox.highlighted(), None);
}

#[test]
fn test_highlight_directly() {
    let listbox = fruits();
    assert_eq!(listbox.highlight(1), Ok(true));
    assert_eq!(listbox.highlight(1), Ok(false));
    // Disabled option is refused
    assert_eq!(listbox.highlight(3), Ok(false));
    assert_eq!(listbox.highlighted(), Some(1));
    assert_eq!(
        listbox.highlight(9),
        Err(NavigationError::IndexOutOfBounds { index: 9, len: 5 })
    );
}

#[test]
fn test_modified_keys_are_ignored() {
    let listbox = fruits();
    let events = listbox.handle_key(&KeyCombo::key(Key::Down).ctrl(), Instant::now());
    assert_eq!(events, Default::default());
    assert_eq!(listbox.highlighted(), None);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_enter_selects_highlight() {
    let listbox = fruits();
    press(&listbox, Key::Down);
    press(&listbox, Key::Down);

    let events = press(&listbox, Key::Enter);
    assert_eq!(
        events.selection_change,
        Some(SelectionChangeEvent {
            previous: None,
            current: 1,
        })
    );
    assert_eq!(listbox.selected_label().as_deref(), Some("Banana"));

    // Selecting the same option again reports nothing
    let events = press(&listbox, Key::Char(' '));
    assert!(events.handled);
    assert_eq!(events.selection_change, None);
}

#[test]
fn test_enter_without_highlight() {
    let listbox = fruits();
    let events = press(&listbox, Key::Enter);
    assert!(events.handled);
    assert_eq!(events.selection_change, None);
    assert_eq!(listbox.selected(), None);
}

#[test]
fn test_select_directly() {
    let listbox = fruits();
    assert_eq!(listbox.select(4), Ok(true));
    assert_eq!(listbox.highlighted(), Some(4));
    assert_eq!(listbox.select(3), Ok(false));
    assert_eq!(listbox.selected(), Some(4));
    assert!(listbox.select(5).is_err());

    listbox.clear_selection();
    assert_eq!(listbox.selected(), None);
}

#[test]
fn test_set_options_drops_stale_indices() {
    let listbox = fruits();
    listbox.select(4).unwrap();
    listbox.clear_dirty();

    listbox.set_options(vec![ListboxOption::new("Only")]);
    assert!(listbox.is_dirty());
    assert_eq!(listbox.len(), 1);
    assert_eq!(listbox.highlighted(), None);
    assert_eq!(listbox.selected(), None);

    let listbox = fruits();
    listbox.select(1).unwrap();
    listbox.set_options(vec![ListboxOption::new("X"), ListboxOption::new("Y").disabled()]);
    assert_eq!(listbox.selected(), None);
}

#[test]
fn test_clones_share_state() {
    let listbox = fruits();
    let view = listbox.clone();
    view.highlight(2).unwrap();
    assert_eq!(listbox.highlighted(), Some(2));
    assert!(listbox.is_dirty());
}

// ============================================================================
// Typeahead
// ============================================================================

#[test]
fn test_typeahead_jumps_and_cycles() {
    let listbox = fruits();
    let start = Instant::now();
    let typed = |c: char, ms: u64| {
        listbox.handle_key(&KeyCombo::key(Key::Char(c)), start + Duration::from_millis(ms))
    };

    assert!(typed('b', 0).handled);
    assert_eq!(listbox.highlighted(), Some(1));
    // Same letter again moves to the next match
    typed('b', 100);
    assert_eq!(listbox.highlighted(), Some(2));
    typed('b', 200);
    assert_eq!(listbox.highlighted(), Some(1));

    // After a pause the query starts over
    typed('d', 2000);
    assert_eq!(listbox.highlighted(), Some(4));
}

#[test]
fn test_typeahead_extends_query() {
    let listbox = fruits();
    let now = Instant::now();
    listbox.type_char('b', now);
    assert_eq!(listbox.highlighted(), Some(1));
    listbox.type_char('L', now);
    assert_eq!(listbox.highlighted(), Some(2));
    // No match keeps the highlight
    assert_eq!(listbox.type_char('z', now), None);
    assert_eq!(listbox.highlighted(), Some(2));
}

#[test]
fn test_typeahead_skips_disabled() {
    let options = fruits().options();
    assert_eq!(typeahead_match(&options, None, "c"), None);
    assert_eq!(typeahead_match(&options, Some(2), "a"), Some(0));
    assert_eq!(typeahead_match(&options, None, ""), None);
}

#[test]
fn test_typeahead_buffer_timeout() {
    let mut typeahead = Typeahead::with_timeout(Duration::from_millis(500));
    let start = Instant::now();
    assert_eq!(typeahead.push('a', start), "a");
    assert_eq!(typeahead.push('b', start + Duration::from_millis(400)), "ab");
    assert_eq!(typeahead.push('c', start + Duration::from_millis(1000)), "c");

    typeahead.clear();
    assert_eq!(typeahead.query(), "");
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_filter_contains_keeps_order() {
    let items = ["Banana", "Mango", "Cherry"];
    let indices: Vec<usize> = filter_options("AN", &items, FilterMode::Contains)
        .into_iter()
        .map(|m| m.index)
        .collect();
    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn test_filter_empty_query_returns_all() {
    let items = ["a", "b", "c"];
    assert_eq!(filter_options("", &items, FilterMode::Fuzzy).len(), 3);
}

#[test]
fn test_filter_fuzzy() {
    let items = ["apple", "banana", "grape", "pineapple"];
    let matches = filter_options("apl", &items, FilterMode::Fuzzy);

    let mut indices: Vec<usize> = matches.iter().map(|m| m.index).collect();
    indices.sort();
    assert_eq!(indices, vec![0, 3]);
    assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_listbox_filter() {
    let listbox = fruits();
    let matches = listbox.filter("berry", FilterMode::Contains);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].index, 2);
}
