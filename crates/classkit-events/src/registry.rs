//! Event Listener Registry
//!
//! Maps (target node, event type) to listener payloads. Registration hands
//! back a `ListenerId` so callers can detach a listener explicitly instead
//! of accumulating them for the life of the target.

use std::collections::HashMap;

use classkit_dom::NodeId;

/// Handle to a registered listener, usable to detach it later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Listener storage: target node -> event type -> payloads
#[derive(Debug)]
pub struct ListenerRegistry<P> {
    by_target: HashMap<NodeId, HashMap<String, Vec<(ListenerId, P)>>>,
    /// Reverse index for removal by id
    index: HashMap<ListenerId, (NodeId, String)>,
    next_id: u64,
}

impl<P> ListenerRegistry<P> {
    pub fn new() -> Self {
        Self {
            by_target: HashMap::new(),
            index: HashMap::new(),
            next_id: 0,
        }
    }

    /// Register a listener, returning its detach handle
    pub fn add(&mut self, target: NodeId, event_type: &str, payload: P) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;

        self.by_target
            .entry(target)
            .or_default()
            .entry(event_type.to_string())
            .or_default()
            .push((id, payload));
        self.index.insert(id, (target, event_type.to_string()));

        tracing::debug!(?target, event_type, ?id, "listener registered");
        id
    }

    /// Detach a listener. Returns false for unknown or already-removed ids.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let Some((target, event_type)) = self.index.remove(&id) else {
            return false;
        };
        if let Some(by_type) = self.by_target.get_mut(&target) {
            if let Some(list) = by_type.get_mut(&event_type) {
                list.retain(|(lid, _)| *lid != id);
            }
        }
        tracing::debug!(?target, event_type, ?id, "listener removed");
        true
    }

    /// Listeners registered for (target, event_type), in registration order
    pub fn listeners_for<'a>(
        &'a self,
        target: NodeId,
        event_type: &str,
    ) -> impl Iterator<Item = (ListenerId, &'a P)> + 'a {
        self.by_target
            .get(&target)
            .and_then(|by_type| by_type.get(event_type))
            .map(|list| list.iter())
            .into_iter()
            .flatten()
            .map(|(id, payload)| (*id, payload))
    }

    /// Drop every listener attached to `target`
    pub fn clear_target(&mut self, target: NodeId) {
        if let Some(by_type) = self.by_target.remove(&target) {
            for (_, list) in by_type {
                for (id, _) in list {
                    self.index.remove(&id);
                }
            }
        }
    }

    /// Total number of registered listeners
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl<P> Default for ListenerRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classkit_dom::DomTree;

    #[test]
    fn test_add_and_lookup() {
        let mut tree = DomTree::new();
        let button = tree.create_element("button");

        let mut registry: ListenerRegistry<&str> = ListenerRegistry::new();
        registry.add(button, "click", "first");
        registry.add(button, "click", "second");
        registry.add(button, "keydown", "third");

        let clicks: Vec<&str> = registry
            .listeners_for(button, "click")
            .map(|(_, p)| *p)
            .collect();
        assert_eq!(clicks, vec!["first", "second"]);
        assert_eq!(registry.listeners_for(button, "keydown").count(), 1);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_remove_by_id() {
        let mut tree = DomTree::new();
        let button = tree.create_element("button");

        let mut registry: ListenerRegistry<u32> = ListenerRegistry::new();
        let id = registry.add(button, "click", 7);

        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert_eq!(registry.listeners_for(button, "click").count(), 0);
    }

    #[test]
    fn test_clear_target() {
        let mut tree = DomTree::new();
        let a = tree.create_element("a");
        let b = tree.create_element("b");

        let mut registry: ListenerRegistry<u32> = ListenerRegistry::new();
        registry.add(a, "click", 1);
        registry.add(a, "mouseover", 2);
        registry.add(b, "click", 3);

        registry.clear_target(a);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.listeners_for(b, "click").count(), 1);
    }
}
