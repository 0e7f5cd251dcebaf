//! Event-bound class mutations
//!
//! A `ClassBinder` pairs one element with one class name for its lifetime
//! and wires event triggers that mutate that pair through the stateless
//! helpers. The binder registers plain-data bindings: the bound element id
//! and class name are copied into each registration and each scheduled
//! mutation, so nothing is looked up dynamically at fire time.

use classkit_dom::{DomResult, DomTree, NodeId};
use classkit_events::{KeyboardEvent, ListenerId};

use crate::hub::{ClassOp, EventHub};
use crate::ops;

/// A fixed (element, class name) pair with event-binding sugar.
///
/// Immutable after construction. The binder holds the element id only; the
/// host owns the element itself.
#[derive(Debug, Clone)]
pub struct ClassBinder {
    element: NodeId,
    class: String,
}

impl ClassBinder {
    /// Bind `class` on `element` for the binder's lifetime
    pub fn new(element: NodeId, class: &str) -> Self {
        Self {
            element,
            class: class.to_string(),
        }
    }

    /// The bound element
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// The bound class name
    pub fn class(&self) -> &str {
        &self.class
    }

    /// On every `event_type` firing from any of `triggers`, add the bound
    /// class after `delay_ms`. Each firing schedules its own uncancellable
    /// mutation; rapid firings are not coalesced.
    pub fn add_class_on_event(
        &self,
        hub: &mut EventHub,
        triggers: &[NodeId],
        delay_ms: u64,
        event_type: &str,
    ) -> Vec<ListenerId> {
        triggers
            .iter()
            .map(|&trigger| {
                hub.add_listener(
                    trigger,
                    event_type,
                    self.element,
                    &self.class,
                    ClassOp::Add,
                    delay_ms,
                )
            })
            .collect()
    }

    /// On every `event_type` firing from `trigger`, remove the bound class
    /// after `delay_ms`
    pub fn remove_class_on_event(
        &self,
        hub: &mut EventHub,
        trigger: NodeId,
        delay_ms: u64,
        event_type: &str,
    ) -> ListenerId {
        hub.add_listener(
            trigger,
            event_type,
            self.element,
            &self.class,
            ClassOp::Remove,
            delay_ms,
        )
    }

    /// On every `event_type` firing from `trigger`, toggle the bound class
    /// after `delay_ms`.
    ///
    /// Overlapping delayed toggles from rapid firings each read and flip the
    /// state independently once due. The class can land in either state;
    /// that interleaving is accepted, not serialized away.
    pub fn toggle_class_on_event(
        &self,
        hub: &mut EventHub,
        trigger: NodeId,
        delay_ms: u64,
        event_type: &str,
    ) -> ListenerId {
        hub.add_listener(
            trigger,
            event_type,
            self.element,
            &self.class,
            ClassOp::Toggle,
            delay_ms,
        )
    }

    /// Toggle the bound class right away if the dispatched key-down event
    /// matches `shortcut_key_code` with `alt` held. No listener is
    /// registered; callers wire this into their own key-down handling.
    pub fn toggle_class_on_key_down(
        &self,
        tree: &mut DomTree,
        shortcut_key_code: u32,
        event: &KeyboardEvent,
    ) -> DomResult<()> {
        if event.key_code == shortcut_key_code && event.modifiers.alt {
            ops::toggle_class(tree, self.element, &self.class)?;
        }
        Ok(())
    }

    /// Register a document-level click listener that removes the bound class
    /// whenever a click lands outside both `exempt` and the bound element.
    ///
    /// The listener stays attached until the caller detaches it with the
    /// returned handle via [`EventHub::remove_listener`].
    pub fn remove_class_on_outside_click(&self, hub: &mut EventHub, exempt: NodeId) -> ListenerId {
        hub.add_outside_click(self.element, &self.class, exempt)
    }

    /// Invoke `callback` if one was supplied, synchronously, with no
    /// arguments and no bound context. Escape hatch for arbitrary caller
    /// logic; whatever the callback does propagates untouched.
    pub fn manipulate<F: FnOnce()>(&self, callback: Option<F>) {
        if let Some(callback) = callback {
            callback();
        }
    }
}
