//! # wikitree_ast
//!
//! Syntax tree model for parsed wiki markup.
//!
//! ## Architecture
//!
//! - Nodes are stored in a [`NodeArena`] and addressed by [`NodeId`]
//! - Trees are assembled bottom-up: allocating a parent adopts its children
//! - [`WikiNode`] handles expose navigation (`root`, `section`), text access,
//!   typed annotations, diagnostic records and template queries
//! - Navigation results are memoized; trees are treated as immutable once
//!   navigation has started
//!
//! The arena is single-threaded: annotation and record writes go through
//! shared handles and are not synchronized.
//!
//! ## Example
//!
//! ```rust
//! use wikitree_ast::{NodeArena, NodeKind, PageData, WikiTitle};
//!
//! let mut arena = NodeArena::new();
//! let heading = arena.alloc_text(1, "History");
//! let section = arena
//!     .alloc_parent(NodeKind::section("History", 2), 1, &[heading])
//!     .unwrap();
//! let body = arena.alloc_text(2, "Founded in 1900.");
//! let page = arena
//!     .alloc_page(PageData::new(WikiTitle::main("Acme"), 7, 123), &[section, body])
//!     .unwrap();
//!
//! let body = arena.node(body);
//! assert_eq!(body.root().node_id(), page);
//! assert_eq!(body.section().map(|s| s.node_id()), Some(section));
//! ```

mod annotation;
mod arena;
mod error;
mod node;
mod node_kind;
mod record;
mod render;
mod templates;
mod title;
pub mod visitor;

pub use annotation::{AnnotationKey, AnnotationStore};
pub use arena::{NodeArena, NodeId};
pub use error::TreeError;
pub use node::{PSEUDO_ID_OFFSET, WikiNode};
pub use node_kind::{NodeKind, NodeType, PageData};
pub use record::{RecordEntry, RecordSubject, Severity};
pub use templates::collect_templates;
pub use title::{Language, Namespace, WikiTitle};

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor};
