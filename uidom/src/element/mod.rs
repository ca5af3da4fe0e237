mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Check whether `id` is `ancestor_id` itself or one of its descendants.
pub fn is_within(root: &Element, ancestor_id: &str, id: &str) -> bool {
    find_element(root, ancestor_id).is_some_and(|ancestor| find_element(ancestor, id).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Element {
        Element::box_().id("root").children([
            Element::text("Title").id("title"),
            Element::dialog()
                .id("dialog")
                .child(Element::button("OK").id("ok")),
        ])
    }

    #[test]
    fn test_find_element() {
        let root = tree();
        let dialog = find_element(&root, "dialog").unwrap();
        assert!(dialog.interaction_scope);
        assert_eq!(
            find_element(&root, "title").map(|e| &e.content),
            Some(&Content::Text("Title".to_string()))
        );
        assert!(find_element(&root, "missing").is_none());
    }

    #[test]
    fn test_is_within() {
        let root = tree();
        assert!(is_within(&root, "dialog", "ok"));
        assert!(is_within(&root, "dialog", "dialog"));
        assert!(!is_within(&root, "dialog", "title"));
        assert!(!is_within(&root, "missing", "ok"));
    }
}
