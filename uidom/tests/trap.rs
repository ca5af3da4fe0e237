use crossterm::event::{Event as CtEvent, KeyCode, KeyEvent, KeyModifiers};
use uidom::{Element, Event, FocusState, FocusTrap};

fn press(code: KeyCode) -> CtEvent {
    CtEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn page_with_dialog() -> Element {
    Element::box_()
        .id("root")
        .child(Element::button("Open").id("open"))
        .child(Element::button("Help").id("help"))
        .child(
            Element::dialog()
                .id("dialog")
                .child(Element::input("").id("field"))
                .child(Element::button("OK").id("ok"))
                .child(Element::button("Cancel").id("cancel")),
        )
}

// ============================================================================
// FocusTrap helpers
// ============================================================================

#[test]
fn test_trap_first_last_next_prev() {
    let root = page_with_dialog();
    let trap = FocusTrap::new("dialog");

    assert_eq!(trap.first(&root), Some("field".to_string()));
    assert_eq!(trap.last(&root), Some("cancel".to_string()));
    assert_eq!(trap.next(&root, Some("field")), Some("ok".to_string()));
    assert_eq!(trap.next(&root, Some("cancel")), Some("field".to_string()));
    assert_eq!(trap.prev(&root, Some("field")), Some("cancel".to_string()));
    assert!(trap.contains(&root, "ok"));
    assert!(!trap.contains(&root, "open"));
}

#[test]
fn test_trap_falls_back_to_focusable_container() {
    let root = Element::box_()
        .child(Element::button("Open").id("open"))
        .child(
            Element::dialog()
                .id("alert")
                .focusable(true)
                .child(Element::text("Saved")),
        );

    let trap = FocusTrap::new("alert");
    assert_eq!(trap.focusable(&root), vec!["alert"]);
}

// ============================================================================
// Trap activation
// ============================================================================

#[test]
fn test_activate_focuses_first_and_saves_return_focus() {
    let root = page_with_dialog();
    let mut focus = FocusState::new();
    focus.focus("open", &root);

    let first = focus.activate_trap(FocusTrap::new("dialog"), &root);
    assert_eq!(first, Some("field".to_string()));
    assert_eq!(focus.focused(), Some("field"));
    assert_eq!(
        focus.active_trap().and_then(|t| t.return_focus.as_deref()),
        Some("open")
    );
}

#[test]
fn test_activate_missing_container() {
    let root = page_with_dialog();
    let mut focus = FocusState::new();

    assert_eq!(focus.activate_trap(FocusTrap::new("nope"), &root), None);
    assert_eq!(focus.trap_depth(), 0);
}

#[test]
fn test_activate_requires_interaction_scope() {
    let root = Element::box_()
        .child(Element::button("Open").id("open"))
        .child(
            Element::box_()
                .id("panel")
                .child(Element::button("Save").id("save")),
        );
    let mut focus = FocusState::new();
    focus.focus("open", &root);

    assert_eq!(focus.activate_trap(FocusTrap::new("panel"), &root), None);
    assert_eq!(focus.trap_depth(), 0);
    assert_eq!(focus.focused(), Some("open"));

    // The same box becomes a valid trap once it is marked as a scope
    let root = Element::box_().child(
        Element::box_()
            .id("panel")
            .interaction_scope(true)
            .child(Element::button("Save").id("save")),
    );
    assert_eq!(
        focus.activate_trap(FocusTrap::new("panel"), &root),
        Some("save".to_string())
    );
    assert_eq!(focus.trap_depth(), 1);
}

#[test]
fn test_tab_cycles_inside_trap() {
    let root = page_with_dialog();
    let mut focus = FocusState::new();
    focus.activate_trap(FocusTrap::new("dialog"), &root);

    assert_eq!(focus.focus_next(&root), Some("ok".to_string()));
    assert_eq!(focus.focus_next(&root), Some("cancel".to_string()));
    // Tab from last wraps to first
    assert_eq!(focus.focus_next(&root), Some("field".to_string()));
    // Shift+Tab from first wraps to last
    assert_eq!(focus.focus_prev(&root), Some("cancel".to_string()));
}

#[test]
fn test_programmatic_focus_outside_trap_rejected() {
    let root = page_with_dialog();
    let mut focus = FocusState::new();
    focus.activate_trap(FocusTrap::new("dialog"), &root);

    assert!(!focus.focus("help", &root));
    assert_eq!(focus.focused(), Some("field"));
    assert!(focus.focus("cancel", &root));
}

#[test]
fn test_deactivate_restores_focus() {
    let root = page_with_dialog();
    let mut focus = FocusState::new();
    focus.focus("help", &root);
    focus.activate_trap(FocusTrap::new("dialog"), &root);

    let trap = focus.deactivate_trap();
    assert_eq!(trap.map(|t| t.container), Some("dialog".to_string()));
    assert_eq!(focus.focused(), Some("help"));
    assert_eq!(focus.deactivate_trap(), None);

    // Tab order is the whole tree again
    assert_eq!(focus.focus_next(&root), Some("field".to_string()));
}

#[test]
fn test_nested_traps() {
    let root = Element::box_()
        .child(Element::button("Open").id("open"))
        .child(
            Element::dialog()
                .id("outer")
                .child(Element::button("Confirm").id("confirm"))
                .child(
                    Element::dialog()
                        .id("inner")
                        .child(Element::button("Yes").id("yes"))
                        .child(Element::button("No").id("no")),
                ),
        );

    let mut focus = FocusState::new();
    focus.activate_trap(FocusTrap::new("outer"), &root);
    assert_eq!(focus.focused(), Some("confirm"));

    focus.activate_trap(FocusTrap::new("inner"), &root);
    assert_eq!(focus.trap_depth(), 2);
    assert_eq!(focus.focus_next(&root), Some("no".to_string()));
    assert_eq!(focus.focus_next(&root), Some("yes".to_string()));

    focus.deactivate_trap();
    assert_eq!(focus.focused(), Some("confirm"));
    assert_eq!(focus.tab_order(&root), vec!["confirm", "yes", "no"]);
}

// ============================================================================
// Event Processing
// ============================================================================

#[test]
fn test_escape_releases_trap() {
    let root = page_with_dialog();
    let mut focus = FocusState::new();
    focus.focus("open", &root);
    focus.activate_trap(FocusTrap::new("dialog"), &root);

    let events = focus.process_events(&[press(KeyCode::Esc)], &root);
    assert_eq!(
        events,
        vec![
            Event::Blur {
                target: "field".to_string(),
                new_target: Some("open".to_string()),
            },
            Event::TrapReleased {
                container: "dialog".to_string()
            },
            Event::Focus {
                target: "open".to_string()
            },
        ]
    );
    assert_eq!(focus.trap_depth(), 0);
}

#[test]
fn test_escape_ignored_when_trap_is_sticky() {
    let root = page_with_dialog();
    let mut focus = FocusState::new();
    focus.activate_trap(FocusTrap::new("dialog").escape_deactivates(false), &root);

    let events = focus.process_events(&[press(KeyCode::Esc)], &root);
    assert_eq!(focus.trap_depth(), 1);
    assert_eq!(focus.focused(), Some("field"));
    assert!(matches!(events.as_slice(), [Event::Key { .. }]));
}

#[test]
fn test_tab_events_stay_in_trap() {
    let root = page_with_dialog();
    let mut focus = FocusState::new();
    focus.activate_trap(FocusTrap::new("dialog"), &root);

    let tabs = vec![press(KeyCode::Tab); 3];
    focus.process_events(&tabs, &root);
    assert_eq!(focus.focused(), Some("field"));
}
