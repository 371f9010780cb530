//! Node variant definitions.
//!
//! [`NodeType`] is the bare discriminant used for dispatch and serialization,
//! [`NodeKind`] carries the variant-specific payload.

use serde::{Deserialize, Serialize};

use crate::WikiTitle;

/// Node types of the wiki syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub enum NodeType {
    /// Root node for one wiki page.
    Page,
    /// Heading boundary (`== Name ==`).
    Section,
    /// Transclusion (`{{Name|...}}`).
    Template,
    /// Template or parser function argument.
    Property,
    /// Literal text.
    Text,
    /// `[[Target|label]]`.
    InternalLink,
    /// `[http://target label]`.
    ExternalLink,
    /// `{| ... |}`.
    Table,
    TableRow,
    TableCell,
    /// `{{#name:...}}`.
    ParserFunction,
}

impl NodeType {
    /// Returns true for variants that carry their own text.
    #[inline]
    pub const fn is_text(self) -> bool {
        matches!(self, NodeType::Text)
    }
}

/// Page payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageData {
    pub title: WikiTitle,
    /// Wiki page id.
    pub id: i64,
    /// Revision id, negative when unknown.
    pub revision: i64,
}

impl PageData {
    pub fn new(title: WikiTitle, id: i64, revision: i64) -> Self {
        Self {
            title,
            id,
            revision,
        }
    }

    /// Returns true if the page carries a known revision.
    #[inline]
    pub const fn has_revision(&self) -> bool {
        self.revision >= 0
    }
}

/// Variant-specific node data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Page(PageData),
    Section { name: String, level: u8 },
    Template { title: WikiTitle },
    Property { key: String },
    Text(String),
    InternalLink { destination: WikiTitle },
    ExternalLink { destination: String },
    Table { caption: Option<String> },
    TableRow,
    TableCell,
    ParserFunction { name: String },
}

impl NodeKind {
    /// Returns the discriminant of this kind.
    pub const fn node_type(&self) -> NodeType {
        match self {
            NodeKind::Page(_) => NodeType::Page,
            NodeKind::Section { .. } => NodeType::Section,
            NodeKind::Template { .. } => NodeType::Template,
            NodeKind::Property { .. } => NodeType::Property,
            NodeKind::Text(_) => NodeType::Text,
            NodeKind::InternalLink { .. } => NodeType::InternalLink,
            NodeKind::ExternalLink { .. } => NodeType::ExternalLink,
            NodeKind::Table { .. } => NodeType::Table,
            NodeKind::TableRow => NodeType::TableRow,
            NodeKind::TableCell => NodeType::TableCell,
            NodeKind::ParserFunction { .. } => NodeType::ParserFunction,
        }
    }

    pub fn section(name: impl Into<String>, level: u8) -> Self {
        NodeKind::Section {
            name: name.into(),
            level,
        }
    }

    pub fn template(title: WikiTitle) -> Self {
        NodeKind::Template { title }
    }

    pub fn property(key: impl Into<String>) -> Self {
        NodeKind::Property { key: key.into() }
    }

    pub fn internal_link(destination: WikiTitle) -> Self {
        NodeKind::InternalLink { destination }
    }

    pub fn external_link(destination: impl Into<String>) -> Self {
        NodeKind::ExternalLink {
            destination: destination.into(),
        }
    }

    pub fn table(caption: Option<String>) -> Self {
        NodeKind::Table { caption }
    }

    pub fn parser_function(name: impl Into<String>) -> Self {
        NodeKind::ParserFunction { name: name.into() }
    }

    /// Returns the literal text of a text node.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        match self {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }
}
