//! # wikitree_uri
//!
//! Readable, deduplicated URIs for wiki syntax tree nodes.
//!
//! This crate provides:
//! - [`UriGenerator`], which normalizes text into a URI suffix and appends a
//!   per-candidate counter
//! - [`UriMinter`], which applies a configurable [`GeneratorScope`]
//! - The text normalization primitives in [`normalize`]
//!
//! ## Example
//!
//! ```rust
//! use wikitree_ast::{NodeArena, NodeKind, PageData, WikiTitle};
//! use wikitree_uri::{UriConfig, UriMinter};
//!
//! let mut arena = NodeArena::new();
//! let heading = arena.alloc_text(1, "Early life");
//! let section = arena
//!     .alloc_parent(NodeKind::section("Early life", 2), 1, &[heading])
//!     .unwrap();
//! arena
//!     .alloc_page(PageData::new(WikiTitle::main("Ann"), 1, 1), &[section])
//!     .unwrap();
//!
//! let mut minter = UriMinter::new(UriConfig::default());
//! let uri = minter.mint("http://example.org/resource/Ann", Some(arena.node(section)));
//! assert_eq!(uri, "http://example.org/resource/Ann__Early_life__1");
//! ```

mod config;
mod error;
mod generator;
mod minter;
pub mod normalize;

pub use config::{GeneratorScope, UriConfig};
pub use error::UriError;
pub use generator::{UriGenerator, contributed_text};
pub use minter::UriMinter;
