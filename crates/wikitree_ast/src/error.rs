//! Tree assembly and navigation error types.

use thiserror::Error;

use crate::NodeId;

/// Errors raised while assembling or restructuring a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The id does not belong to this arena.
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// The node is already owned by another parent.
    #[error("Node {child} is already a child of {parent}")]
    AlreadyParented {
        /// The node that was offered as a child.
        child: NodeId,
        /// Its current owner.
        parent: NodeId,
    },

    /// A page can only be the root of a tree.
    #[error("Page node {0} cannot be a child")]
    PageAsChild(NodeId),

    /// The move would make a node its own ancestor.
    #[error("Moving {child} under {parent} would create a cycle")]
    Cycle {
        /// The node being moved.
        child: NodeId,
        /// The requested new parent.
        parent: NodeId,
    },

    /// Following the parent chain did not end at a page.
    #[error("Root of {node} is {root}, which is not a page")]
    RootNotPage {
        /// The node navigation started from.
        node: NodeId,
        /// The parentless ancestor that was found.
        root: NodeId,
    },
}
