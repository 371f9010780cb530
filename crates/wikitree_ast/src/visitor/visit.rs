//! Visitor trait for traversing wiki tree nodes.
//!
//! Each `visit_*` method has a default implementation that walks children,
//! so implementors override only the node types they care about.

use std::ops::ControlFlow;

use crate::WikiNode;

use super::walk::walk_children;

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue traversal
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Visitor trait for traversing wiki tree nodes without modification.
///
/// Returning without calling [`walk_children`] from a `visit_*` method skips
/// that node's subtree.
pub trait Visitor<'a>: Sized {
    /// Called before dispatching on any node.
    #[inline]
    fn enter_node(&mut self, _node: WikiNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after a node and its subtree were visited.
    #[inline]
    fn exit_node(&mut self, _node: WikiNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    fn visit_page(&mut self, node: WikiNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    fn visit_section(&mut self, node: WikiNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    fn visit_template(&mut self, node: WikiNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    fn visit_property(&mut self, node: WikiNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    fn visit_text(&mut self, _node: WikiNode<'a>) -> VisitResult {
        ControlFlow::Continue(()) // Text leaf
    }

    fn visit_internal_link(&mut self, node: WikiNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    fn visit_external_link(&mut self, node: WikiNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    fn visit_table(&mut self, node: WikiNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    fn visit_table_row(&mut self, node: WikiNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    fn visit_table_cell(&mut self, node: WikiNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    fn visit_parser_function(&mut self, node: WikiNode<'a>) -> VisitResult {
        walk_children(self, node)
    }
}
