//! Visitor pattern for wiki tree traversal.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`walk_node`] - Dispatch function for type-specific visitors
//! - [`walk_children`] - Traverse all children of a node
//!
//! # Example
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use wikitree_ast::{NodeArena, NodeKind, WikiNode};
//! use wikitree_ast::visitor::{Visitor, VisitResult, walk_node};
//!
//! struct TextCollector<'a> {
//!     texts: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for TextCollector<'a> {
//!     fn visit_text(&mut self, node: WikiNode<'a>) -> VisitResult {
//!         self.texts.extend(node.text());
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let mut arena = NodeArena::new();
//! let a = arena.alloc_text(1, "hello");
//! let b = arena.alloc_text(1, "world");
//! let cell = arena.alloc_parent(NodeKind::TableCell, 1, &[a, b]).unwrap();
//!
//! let mut collector = TextCollector { texts: Vec::new() };
//! walk_node(&mut collector, arena.node(cell));
//! assert_eq!(collector.texts, vec!["hello", "world"]);
//! ```

mod visit;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use walk::{walk_children, walk_node};
