//! Event Hub
//!
//! Deterministic stand-in for browser dispatch and `setTimeout`: listeners
//! are plain data, each firing schedules an owned (element, class, op) task,
//! and `tick` applies whatever has come due. Events dispatched on a node are
//! also seen by listeners on the document root, which is how outside-click
//! listeners observe every click.

use classkit_dom::{DomResult, DomTree, NodeId};
use classkit_events::{ListenerId, ListenerRegistry, TimerQueue};

use crate::ops;

/// Class mutation applied when a binding fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassOp {
    Add,
    Remove,
    Toggle,
}

/// What a registered listener does when its trigger fires
#[derive(Debug, Clone)]
enum ListenerAction {
    /// Schedule a delayed mutation of the bound element
    Scheduled {
        target: NodeId,
        class: String,
        op: ClassOp,
        delay_ms: u64,
    },
    /// Remove `class` from `target` unless the event target lies inside the
    /// exempt element or the bound element itself
    OutsideClick {
        target: NodeId,
        class: String,
        exempt: NodeId,
    },
}

/// A mutation whose delay is running; owns copies of both bound values
#[derive(Debug, Clone)]
struct PendingMutation {
    target: NodeId,
    class: String,
    op: ClassOp,
}

/// Owns listener registrations and pending delayed mutations.
///
/// Everything is single-threaded: `dispatch` returns as soon as the firing's
/// mutations are scheduled, and they apply only when `tick` advances the
/// clock far enough.
#[derive(Debug, Default)]
pub struct EventHub {
    listeners: ListenerRegistry<ListenerAction>,
    timers: TimerQueue<PendingMutation>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scheduled class mutation for `event_type` firings of `trigger`
    pub fn add_listener(
        &mut self,
        trigger: NodeId,
        event_type: &str,
        target: NodeId,
        class: &str,
        op: ClassOp,
        delay_ms: u64,
    ) -> ListenerId {
        self.listeners.add(
            trigger,
            event_type,
            ListenerAction::Scheduled {
                target,
                class: class.to_string(),
                op,
                delay_ms,
            },
        )
    }

    /// Register a document-level click listener that strips `class` from
    /// `target` on any click outside both `exempt` and `target`
    pub fn add_outside_click(&mut self, target: NodeId, class: &str, exempt: NodeId) -> ListenerId {
        self.listeners.add(
            NodeId::ROOT,
            "click",
            ListenerAction::OutsideClick {
                target,
                class: class.to_string(),
                exempt,
            },
        )
    }

    /// Detach a listener registered through this hub
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Fire `event_type` at `target`.
    ///
    /// Every matching listener reacts once per firing; rapid repeated firings
    /// schedule one mutation each, with no debouncing or coalescing.
    pub fn dispatch(&mut self, tree: &mut DomTree, event_type: &str, target: NodeId) -> DomResult<()> {
        let mut actions: Vec<ListenerAction> = self
            .listeners
            .listeners_for(target, event_type)
            .map(|(_, action)| action.clone())
            .collect();
        // the event also reaches document-level listeners
        if target != NodeId::ROOT {
            actions.extend(
                self.listeners
                    .listeners_for(NodeId::ROOT, event_type)
                    .map(|(_, action)| action.clone()),
            );
        }

        for action in actions {
            match action {
                ListenerAction::Scheduled {
                    target,
                    class,
                    op,
                    delay_ms,
                } => {
                    tracing::debug!(?target, %class, ?op, delay_ms, "mutation scheduled");
                    self.timers
                        .schedule(PendingMutation { target, class, op }, delay_ms);
                }
                ListenerAction::OutsideClick {
                    target: bound,
                    class,
                    exempt,
                } => {
                    if !tree.contains(exempt, target) && !tree.contains(bound, target) {
                        tracing::debug!(?bound, %class, "outside click, removing class");
                        ops::remove_class(tree, bound, &class)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Advance the clock and apply every due mutation, in expiry order.
    ///
    /// A failing mutation surfaces its `DomError`; mutations due later in the
    /// same tick are dropped along with it.
    pub fn tick(&mut self, tree: &mut DomTree, delta_ms: u64) -> DomResult<()> {
        for mutation in self.timers.tick(delta_ms) {
            tracing::debug!(target = ?mutation.target, class = %mutation.class, op = ?mutation.op, "applying mutation");
            match mutation.op {
                ClassOp::Add => ops::add_class(tree, mutation.target, &mutation.class)?,
                ClassOp::Remove => ops::remove_class(tree, mutation.target, &mutation.class)?,
                ClassOp::Toggle => ops::toggle_class(tree, mutation.target, &mutation.class)?,
            }
        }
        Ok(())
    }

    /// Number of scheduled mutations that have not applied yet
    pub fn pending_mutations(&self) -> usize {
        self.timers.pending()
    }

    /// Check if nothing is scheduled
    pub fn is_idle(&self) -> bool {
        self.timers.is_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (DomTree, NodeId, NodeId) {
        let mut tree = DomTree::new();
        let panel = tree.create_element("div");
        let button = tree.create_element("button");
        tree.append_child(tree.root(), panel).unwrap();
        tree.append_child(tree.root(), button).unwrap();
        (tree, panel, button)
    }

    #[test]
    fn test_dispatch_schedules_tick_applies() {
        let (mut tree, panel, button) = setup();
        let mut hub = EventHub::new();
        hub.add_listener(button, "click", panel, "open", ClassOp::Add, 100);

        hub.dispatch(&mut tree, "click", button).unwrap();
        assert_eq!(hub.pending_mutations(), 1);
        assert!(!ops::has_class(&tree, panel, "open").unwrap());

        hub.tick(&mut tree, 50).unwrap();
        assert!(!ops::has_class(&tree, panel, "open").unwrap());

        hub.tick(&mut tree, 50).unwrap();
        assert!(ops::has_class(&tree, panel, "open").unwrap());
        assert!(hub.is_idle());
    }

    #[test]
    fn test_each_firing_schedules_independently() {
        let (mut tree, panel, button) = setup();
        let mut hub = EventHub::new();
        hub.add_listener(button, "click", panel, "open", ClassOp::Toggle, 10);

        hub.dispatch(&mut tree, "click", button).unwrap();
        hub.dispatch(&mut tree, "click", button).unwrap();
        assert_eq!(hub.pending_mutations(), 2, "no coalescing");

        // both toggles apply, restoring the original state
        hub.tick(&mut tree, 10).unwrap();
        assert!(!ops::has_class(&tree, panel, "open").unwrap());
    }

    #[test]
    fn test_mutations_apply_in_expiry_order() {
        let (mut tree, panel, button) = setup();
        let mut hub = EventHub::new();
        hub.add_listener(button, "click", panel, "slow", ClassOp::Add, 200);
        hub.add_listener(button, "click", panel, "replaced", ClassOp::Remove, 50);

        ops::add_class(&mut tree, panel, "replaced").unwrap();
        hub.dispatch(&mut tree, "click", button).unwrap();
        hub.tick(&mut tree, 250).unwrap();

        assert!(ops::has_class(&tree, panel, "slow").unwrap());
        assert!(!ops::has_class(&tree, panel, "replaced").unwrap());
    }

    #[test]
    fn test_event_type_filters() {
        let (mut tree, panel, button) = setup();
        let mut hub = EventHub::new();
        hub.add_listener(button, "mouseover", panel, "hot", ClassOp::Add, 0);

        hub.dispatch(&mut tree, "click", button).unwrap();
        assert!(hub.is_idle());

        hub.dispatch(&mut tree, "mouseover", button).unwrap();
        assert_eq!(hub.pending_mutations(), 1);
    }

    #[test]
    fn test_removed_listener_stops_firing() {
        let (mut tree, panel, button) = setup();
        let mut hub = EventHub::new();
        let id = hub.add_listener(button, "click", panel, "open", ClassOp::Add, 0);

        assert!(hub.remove_listener(id));
        hub.dispatch(&mut tree, "click", button).unwrap();
        assert!(hub.is_idle());
    }

    #[test]
    fn test_outside_click_checks_containment() {
        let (mut tree, panel, button) = setup();
        let inner = tree.create_element("span");
        tree.append_child(panel, inner).unwrap();
        let elsewhere = tree.create_element("div");
        tree.append_child(tree.root(), elsewhere).unwrap();

        let mut hub = EventHub::new();
        ops::add_class(&mut tree, panel, "open").unwrap();
        hub.add_outside_click(panel, "open", button);

        // click inside the bound element: class stays
        hub.dispatch(&mut tree, "click", inner).unwrap();
        assert!(ops::has_class(&tree, panel, "open").unwrap());

        // click on the exempt element: class stays
        hub.dispatch(&mut tree, "click", button).unwrap();
        assert!(ops::has_class(&tree, panel, "open").unwrap());

        // click anywhere else: class removed immediately
        hub.dispatch(&mut tree, "click", elsewhere).unwrap();
        assert!(!ops::has_class(&tree, panel, "open").unwrap());
    }
}
