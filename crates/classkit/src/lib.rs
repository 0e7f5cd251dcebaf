//! classkit
//!
//! Convenience helpers for adding, removing, toggling, and replacing CSS
//! classes and inline styles on DOM elements, plus event-binding sugar
//! (click / outside-click / keydown) that applies those mutations after an
//! optional timer delay.
//!
//! Two pieces:
//! - [`ops`]: stateless one-shot helpers over a single element, passed
//!   explicitly on every call
//! - [`ClassBinder`]: a fixed (element, class name) pair whose methods wire
//!   event triggers, through an [`EventHub`], back into [`ops`]
//!
//! # Example
//! ```rust,ignore
//! use classkit::{ops, ClassBinder, DomTree, EventHub};
//!
//! let mut tree = DomTree::new();
//! let panel = tree.create_element("div");
//! let button = tree.create_element("button");
//!
//! let mut hub = EventHub::new();
//! let binder = ClassBinder::new(panel, "open");
//! binder.add_class_on_event(&mut hub, &[button], 0, "click");
//!
//! hub.dispatch(&mut tree, "click", button)?;
//! hub.tick(&mut tree, 0)?;
//! assert!(ops::has_class(&tree, panel, "open")?);
//! ```

pub mod ops;

mod binder;
mod hub;

pub use binder::ClassBinder;
pub use hub::{ClassOp, EventHub};

// Re-export the host surface for downstream users
pub use classkit_dom as dom;
pub use classkit_events as events;

pub use classkit_dom::{ClassList, DomError, DomResult, DomTree, InlineStyle, NodeId};
pub use classkit_events::{KeyModifiers, KeyboardEvent, ListenerId};
