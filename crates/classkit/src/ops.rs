//! Stateless class and style helpers
//!
//! Free functions over one element's class list or inline style map. The
//! target element is passed explicitly on every call and nothing is kept
//! between calls. Every mutation is safe to repeat: the desired state is
//! ensured, never asserted. An invalid node reference surfaces the host's
//! `DomError` unchanged.

use std::collections::HashMap;

use classkit_dom::{DomResult, DomTree, InlineStyle, NodeId};

/// Ensure `name` is in the element's class list
pub fn add_class(tree: &mut DomTree, el: NodeId, name: &str) -> DomResult<()> {
    tree.element_mut(el)?.classes.add(name);
    Ok(())
}

/// Ensure `name` is not in the element's class list
pub fn remove_class(tree: &mut DomTree, el: NodeId, name: &str) -> DomResult<()> {
    tree.element_mut(el)?.classes.remove(name);
    Ok(())
}

/// Membership test, no side effect
pub fn has_class(tree: &DomTree, el: NodeId, name: &str) -> DomResult<bool> {
    Ok(tree.element(el)?.classes.contains(name))
}

/// Remove `name` if present, add it otherwise
pub fn toggle_class(tree: &mut DomTree, el: NodeId, name: &str) -> DomResult<()> {
    tree.element_mut(el)?.classes.toggle(name);
    Ok(())
}

/// Swap `old` for `new`. When `old` is absent, `new` is still added.
pub fn replace_class(tree: &mut DomTree, el: NodeId, old: &str, new: &str) -> DomResult<()> {
    let classes = &mut tree.element_mut(el)?.classes;
    classes.remove(old);
    classes.add(new);
    Ok(())
}

/// Add every name in `names`, each independently
pub fn add_classes(tree: &mut DomTree, el: NodeId, names: &[&str]) -> DomResult<()> {
    let classes = &mut tree.element_mut(el)?.classes;
    for name in names {
        classes.add(name);
    }
    Ok(())
}

/// Remove every name in `names`, each independently
pub fn remove_classes(tree: &mut DomTree, el: NodeId, names: &[&str]) -> DomResult<()> {
    let classes = &mut tree.element_mut(el)?.classes;
    for name in names {
        classes.remove(name);
    }
    Ok(())
}

/// Apply `replace_class` for every (old, new) entry.
///
/// Entries are independent and iteration order is unspecified; set semantics
/// dedupe a new name that appears twice.
pub fn replace_classes(
    tree: &mut DomTree,
    el: NodeId,
    renames: &HashMap<&str, &str>,
) -> DomResult<()> {
    for (old, new) in renames {
        replace_class(tree, el, old, new)?;
    }
    Ok(())
}

/// Empty the class list regardless of prior contents
pub fn remove_all_classes(tree: &mut DomTree, el: NodeId) -> DomResult<()> {
    tree.element_mut(el)?.classes.clear();
    Ok(())
}

/// Force membership from a flag: true adds, false removes.
///
/// Deterministic, not a toggle: the last call wins independent of prior state.
pub fn set_class(tree: &mut DomTree, el: NodeId, name: &str, on: bool) -> DomResult<()> {
    tree.element_mut(el)?.classes.set(name, on);
    Ok(())
}

/// Apply `set_class` for every (name, flag) entry
pub fn set_classes(tree: &mut DomTree, el: NodeId, flags: &HashMap<&str, bool>) -> DomResult<()> {
    let classes = &mut tree.element_mut(el)?.classes;
    for (name, on) in flags {
        classes.set(name, *on);
    }
    Ok(())
}

/// Snapshot of the element's classes; mutating it leaves the element alone
pub fn all_classes(tree: &DomTree, el: NodeId) -> DomResult<Vec<String>> {
    Ok(tree.element(el)?.classes.iter().map(String::from).collect())
}

/// Set each property to its given value, overwriting prior inline values.
/// Properties not mentioned stay untouched.
pub fn add_styles(tree: &mut DomTree, el: NodeId, styles: &HashMap<&str, &str>) -> DomResult<()> {
    let style = &mut tree.element_mut(el)?.style;
    for (prop, value) in styles {
        style.set(prop, value);
    }
    Ok(())
}

/// Clear each named inline property, letting stylesheet-derived style take over
pub fn remove_styles(tree: &mut DomTree, el: NodeId, props: &[&str]) -> DomResult<()> {
    let style = &mut tree.element_mut(el)?.style;
    for prop in props {
        style.remove(prop);
    }
    Ok(())
}

/// Snapshot of the inline style map in declaration order
pub fn all_styles(tree: &DomTree, el: NodeId) -> DomResult<InlineStyle> {
    Ok(tree.element(el)?.style.clone())
}

/// Hide the element irrespective of stylesheet rules
pub fn hide(tree: &mut DomTree, el: NodeId) -> DomResult<()> {
    tree.element_mut(el)?.style.set("display", "none");
    Ok(())
}

/// Drop the inline `display` override, reverting to whatever the stylesheet
/// would produce. Absence of an override, not a forced value.
pub fn show(tree: &mut DomTree, el: NodeId) -> DomResult<()> {
    tree.element_mut(el)?.style.remove("display");
    Ok(())
}
