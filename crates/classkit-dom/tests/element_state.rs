//! Element state tests for classkit-dom
//!
//! Class list and inline style behavior as seen through the tree.

use classkit_dom::{ClassList, DomTree, InlineStyle};

#[test]
fn test_class_attribute_roundtrip() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");

    tree.element_mut(div).unwrap().classes = ClassList::from_str_list("card card  shadow");
    let classes = &tree.element(div).unwrap().classes;

    assert_eq!(classes.len(), 2, "duplicate tokens collapse");
    assert_eq!(classes.value(), "card shadow");
}

#[test]
fn test_style_attribute_roundtrip() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");

    tree.element_mut(div).unwrap().style = InlineStyle::from_str_decls("color:red;  width : 10px ;");
    let style = &tree.element(div).unwrap().style;

    assert_eq!(style.get("color"), Some("red"));
    assert_eq!(style.get("width"), Some("10px"));
    assert_eq!(style.value(), "color: red; width: 10px");
}

#[test]
fn test_class_mutation_is_per_element() {
    let mut tree = DomTree::new();
    let a = tree.create_element("div");
    let b = tree.create_element("div");

    tree.element_mut(a).unwrap().classes.add("active");

    assert!(tree.element(a).unwrap().classes.contains("active"));
    assert!(!tree.element(b).unwrap().classes.contains("active"));
}

#[test]
fn test_deep_containment() {
    let mut tree = DomTree::new();
    let mut parent = tree.root();
    let mut leaf = parent;
    for _ in 0..50 {
        let child = tree.create_element("div");
        tree.append_child(parent, child).unwrap();
        parent = child;
        leaf = child;
    }

    assert!(tree.contains(tree.root(), leaf));
    assert!(!tree.contains(leaf, tree.root()));
}
