//! WikiNode definition.
//!
//! A [`WikiNode`] is a cheap, copyable handle on one node of a [`NodeArena`].
//! All node operations (navigation, text access, annotations, records and
//! identifiers) are exposed through it.

use std::any::Any;
use std::cell::Ref;
use std::fmt::{self, Write};
use std::ptr;

use serde::Serialize;
use tracing::{debug, trace};

use crate::arena::NodeSlot;
use crate::{
    AnnotationKey, NodeArena, NodeId, NodeKind, NodeType, PageData, RecordEntry, TreeError,
};

/// Offset added to content hashes to form pseudo ids.
///
/// Pseudo ids land in `[2^62, 2^63)`, above any realistic page id.
pub const PSEUDO_ID_OFFSET: i64 = 1 << 62;

/// A node in a wiki syntax tree.
#[derive(Clone, Copy)]
pub struct WikiNode<'a> {
    arena: &'a NodeArena,
    id: NodeId,
}

impl<'a> WikiNode<'a> {
    #[inline]
    pub(crate) fn new(arena: &'a NodeArena, id: NodeId) -> Self {
        Self { arena, id }
    }

    #[inline]
    fn slot(&self) -> &'a NodeSlot {
        self.arena.slot_unchecked(self.id)
    }

    #[inline]
    fn handle(&self, id: NodeId) -> WikiNode<'a> {
        WikiNode::new(self.arena, id)
    }

    /// The arena-local id of this node.
    #[inline]
    pub fn node_id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn arena(&self) -> &'a NodeArena {
        self.arena
    }

    #[inline]
    pub fn kind(&self) -> &'a NodeKind {
        &self.slot().kind
    }

    #[inline]
    pub fn node_type(&self) -> NodeType {
        self.slot().kind.node_type()
    }

    /// Source line number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.slot().line
    }

    /// The owning node, `None` for the page root.
    #[inline]
    pub fn parent(&self) -> Option<WikiNode<'a>> {
        self.slot().parent.map(|id| self.handle(id))
    }

    /// Children in document order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = WikiNode<'a>> + use<'a> {
        let arena = self.arena;
        self.slot()
            .children
            .iter()
            .map(move |&id| WikiNode::new(arena, id))
    }

    #[inline]
    pub fn child(&self, index: usize) -> Option<WikiNode<'a>> {
        self.slot().children.get(index).map(|&id| self.handle(id))
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.slot().children.len()
    }

    #[inline]
    pub fn has_children(&self) -> bool {
        !self.slot().children.is_empty()
    }

    /// The literal text of a text node.
    #[inline]
    pub fn text(&self) -> Option<&'a str> {
        self.slot().kind.text()
    }

    /// The page payload if this node is a page.
    #[inline]
    pub fn page(&self) -> Option<&'a PageData> {
        match &self.slot().kind {
            NodeKind::Page(page) => Some(page),
            _ => None,
        }
    }

    /// Returns the page at the top of this node's parent chain.
    ///
    /// The result is memoized on success. Fails if the parentless ancestor is
    /// not a page.
    pub fn try_root(&self) -> Result<WikiNode<'a>, TreeError> {
        let slot = self.slot();
        if let Some(&root) = slot.root.get() {
            return Ok(self.handle(root));
        }

        let mut current = *self;
        while let Some(parent) = current.parent() {
            current = parent;
        }
        if current.page().is_none() {
            return Err(TreeError::RootNotPage {
                node: self.id,
                root: current.id,
            });
        }

        Ok(self.handle(*slot.root.get_or_init(|| current.id)))
    }

    /// Returns the page at the top of this node's parent chain.
    ///
    /// # Panics
    ///
    /// Panics if the chain does not end at a page. Every tree handed to
    /// navigation must be rooted at a page.
    pub fn root(&self) -> WikiNode<'a> {
        match self.try_root() {
            Ok(root) => root,
            Err(err) => panic!("{err}"),
        }
    }

    fn root_page(&self) -> &'a PageData {
        match self.root().kind() {
            NodeKind::Page(page) => page,
            _ => unreachable!("root() only returns pages"),
        }
    }

    /// Returns the nearest section starting at or before this node's line.
    ///
    /// Only the root's direct children are considered, in line order.
    pub fn section(&self) -> Option<WikiNode<'a>> {
        let section = *self.slot().section.get_or_init(|| {
            let line = self.line();
            let mut found = None;
            for child in self.root().children() {
                if child.line() > line {
                    break;
                }
                if child.node_type() == NodeType::Section {
                    found = Some(child.id);
                }
            }
            found
        });
        section.map(|id| self.handle(id))
    }

    /// Returns the text of this node or of its only child.
    ///
    /// Only one hop is taken: a single child that itself wraps text yields
    /// `None`.
    pub fn retrieve_text(&self) -> Option<&'a str> {
        self.retrieve_text_with(true)
    }

    fn retrieve_text_with(&self, recurse: bool) -> Option<&'a str> {
        if self.node_type().is_text() {
            return self.text();
        }
        if recurse && self.child_count() == 1 {
            self.child(0)?.retrieve_text_with(false)
        } else {
            None
        }
    }

    pub fn annotation<T: Any + Clone>(&self, key: AnnotationKey<T>) -> Option<T> {
        self.slot().annotations.borrow().get(key).cloned()
    }

    pub fn set_annotation<T: Any>(&self, key: AnnotationKey<T>, value: T) {
        self.slot().annotations.borrow_mut().set(key, value);
    }

    /// Stores a diagnostic record on this node.
    ///
    /// Records about nodes are stored as given. Records without a subject are
    /// rebound to this node. Records about other entities are discarded.
    pub fn add_extraction_record(&self, entry: RecordEntry) {
        match entry.adopt_for(self.id) {
            Some(entry) => {
                debug!(
                    "Record on node {} (line {}): {}",
                    self.id,
                    self.line(),
                    entry.message
                );
                self.slot()
                    .records
                    .borrow_mut()
                    .get_or_insert_with(Vec::new)
                    .push(entry);
            }
            None => trace!("Discarding foreign-subject record on node {}", self.id),
        }
    }

    /// Records stored on this node, oldest first.
    pub fn record_entries(&self) -> Ref<'a, [RecordEntry]> {
        Ref::map(self.slot().records.borrow(), |records| {
            records.as_deref().unwrap_or(&[])
        })
    }

    /// The id carried by the variant itself, if any.
    pub fn natural_id(&self) -> Option<i64> {
        self.page().map(|page| page.id)
    }

    /// The natural id, or a pseudo id derived from the content hash.
    ///
    /// Pseudo ids are not unique: nodes with equal revision, line and markup
    /// share one.
    pub fn id(&self) -> i64 {
        self.natural_id()
            .unwrap_or_else(|| (self.content_hash() >> 2) as i64 + PSEUDO_ID_OFFSET)
    }

    /// Hash over the page revision, the line and the rendered wiki text.
    ///
    /// Memoized on first call.
    pub fn content_hash(&self) -> u64 {
        *self.slot().content_hash.get_or_init(|| {
            let mut hasher = blake3::Hasher::new();
            hasher.update(&self.root_page().revision.to_le_bytes());
            hasher.update(&self.line().to_le_bytes());
            hasher.update(self.to_wiki_text().as_bytes());

            let mut prefix = [0u8; 8];
            prefix.copy_from_slice(&hasher.finalize().as_bytes()[..8]);
            u64::from_le_bytes(prefix)
        })
    }

    /// Locator of the page this node belongs to.
    pub fn source_iri(&self) -> String {
        let page = self.root_page();
        let mut iri = page.title.page_iri();
        if page.has_revision() {
            let _ = write!(
                iri,
                "?oldid={}&ns={}",
                page.revision,
                page.title.namespace().code()
            );
        }
        iri
    }

    /// [`source_iri`](Self::source_iri) with a fragment pointing at this node.
    pub fn source_location_iri(&self) -> String {
        let mut iri = self.source_iri();
        match self.section() {
            Some(section) => {
                let name = match section.kind() {
                    NodeKind::Section { name, .. } => name.replace(' ', "_"),
                    _ => String::new(),
                };
                let _ = write!(
                    iri,
                    "#section={}&relative-line={}&absolute-line={}",
                    name,
                    self.line().saturating_sub(section.line()),
                    self.line()
                );
            }
            None if self.line() >= 1 => {
                let _ = write!(iri, "#absolute-line={}", self.line());
            }
            None => {}
        }
        iri
    }
}

impl PartialEq for WikiNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}

impl Eq for WikiNode<'_> {}

impl fmt::Debug for WikiNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WikiNode")
            .field("id", &self.id)
            .field("type", &self.node_type())
            .field("line", &self.line())
            .finish()
    }
}

impl Serialize for WikiNode<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        struct Children<'n>(WikiNode<'n>);

        impl Serialize for Children<'_> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_seq(self.0.children())
            }
        }

        let mut state = serializer.serialize_struct("WikiNode", 4)?;
        state.serialize_field("type", &self.node_type())?;
        state.serialize_field("line", &self.line())?;

        match self.kind() {
            NodeKind::Page(page) => {
                state.serialize_field("title", &page.title.to_string())?;
                state.serialize_field("revision", &page.revision)?;
            }
            NodeKind::Section { name, level } => {
                state.serialize_field("name", name)?;
                state.serialize_field("level", level)?;
            }
            NodeKind::Template { title } => {
                state.serialize_field("title", title.decoded())?;
            }
            NodeKind::Property { key } => state.serialize_field("key", key)?,
            NodeKind::Text(text) => state.serialize_field("value", text)?,
            NodeKind::InternalLink { destination } => {
                state.serialize_field("destination", &destination.to_string())?;
            }
            NodeKind::ExternalLink { destination } => {
                state.serialize_field("destination", destination)?;
            }
            NodeKind::Table { caption: Some(caption) } => {
                state.serialize_field("caption", caption)?;
            }
            NodeKind::ParserFunction { name } => state.serialize_field("name", name)?,
            NodeKind::Table { caption: None } | NodeKind::TableRow | NodeKind::TableCell => {}
        }

        if self.has_children() {
            state.serialize_field("children", &Children(*self))?;
        }
        state.end()
    }
}
