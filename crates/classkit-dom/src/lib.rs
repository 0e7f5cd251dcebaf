//! classkit DOM - host element surface
//!
//! Arena-backed DOM tree with a class list and an inline style map on every
//! element. This crate is the collaborator the class helpers mutate through;
//! it knows nothing about bindings or timers.

mod classlist;
mod node;
mod style;
mod tree;

pub use classlist::ClassList;
pub use node::{ElementData, Node, NodeData};
pub use style::InlineStyle;
pub use tree::{Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The document root node
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node" (absent parent/sibling links)
    pub(crate) const NONE: NodeId = NodeId(u32::MAX);

    /// Check whether this id refers to a node at all
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("node {0:?} does not exist")]
    NodeNotFound(NodeId),

    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
}
