//! Index-based node storage.
//!
//! A [`NodeArena`] owns every node of one tree. Parents own their children
//! through ordered id lists; the parent link is a plain id back-reference.
//! Trees are assembled bottom-up: children are allocated first, and
//! allocating a parent adopts them.

use std::cell::{OnceCell, RefCell};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{AnnotationStore, NodeKind, PageData, RecordEntry, TreeError, WikiNode};

/// Identifier of a node within its arena.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub(crate) struct NodeSlot {
    pub(crate) kind: NodeKind,
    pub(crate) line: u32,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) root: OnceCell<NodeId>,
    pub(crate) section: OnceCell<Option<NodeId>>,
    pub(crate) content_hash: OnceCell<u64>,
    pub(crate) annotations: RefCell<AnnotationStore>,
    /// Created on first write.
    pub(crate) records: RefCell<Option<Vec<RecordEntry>>>,
}

impl NodeSlot {
    fn new(kind: NodeKind, line: u32, children: Vec<NodeId>) -> Self {
        Self {
            kind,
            line,
            children,
            parent: None,
            root: OnceCell::new(),
            section: OnceCell::new(),
            content_hash: OnceCell::new(),
            annotations: RefCell::new(AnnotationStore::new()),
            records: RefCell::new(None),
        }
    }

    fn has_memoized_navigation(&self) -> bool {
        self.root.get().is_some()
            || self.section.get().is_some()
            || self.content_hash.get().is_some()
    }
}

/// Storage for the nodes of one wiki syntax tree.
///
/// # Example
///
/// ```rust
/// use wikitree_ast::{NodeArena, NodeKind, PageData, WikiTitle};
///
/// let mut arena = NodeArena::new();
/// let text = arena.alloc_text(1, "Hello");
/// let page = arena
///     .alloc_page(PageData::new(WikiTitle::main("Greeting"), 1, 42), &[text])
///     .unwrap();
///
/// assert_eq!(arena.node(text).parent().map(|p| p.node_id()), Some(page));
/// assert_eq!(arena.node(text).root().node_id(), page);
/// ```
#[derive(Default)]
pub struct NodeArena {
    nodes: Vec<NodeSlot>,
}

impl NodeArena {
    /// Creates a new empty arena.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new arena with room for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocates a text node.
    pub fn alloc_text(&mut self, line: u32, text: impl Into<String>) -> NodeId {
        self.push(NodeSlot::new(NodeKind::Text(text.into()), line, Vec::new()))
    }

    /// Allocates a node without children.
    pub fn alloc_leaf(&mut self, kind: NodeKind, line: u32) -> NodeId {
        self.push(NodeSlot::new(kind, line, Vec::new()))
    }

    /// Allocates a node and adopts `children` in the given order.
    ///
    /// Every child must already exist in this arena, must not have a parent
    /// yet, and must not be a page.
    pub fn alloc_parent(
        &mut self,
        kind: NodeKind,
        line: u32,
        children: &[NodeId],
    ) -> Result<NodeId, TreeError> {
        let id = self.next_id();
        for (i, &child) in children.iter().enumerate() {
            let slot = self.slot(child)?;
            if let Some(parent) = slot.parent {
                return Err(TreeError::AlreadyParented { child, parent });
            }
            if matches!(slot.kind, NodeKind::Page(_)) {
                return Err(TreeError::PageAsChild(child));
            }
            if children[..i].contains(&child) {
                return Err(TreeError::AlreadyParented { child, parent: id });
            }
        }

        for &child in children {
            self.nodes[child.index()].parent = Some(id);
        }
        Ok(self.push(NodeSlot::new(kind, line, children.to_vec())))
    }

    /// Allocates the page root of a tree.
    pub fn alloc_page(&mut self, page: PageData, children: &[NodeId]) -> Result<NodeId, TreeError> {
        self.alloc_parent(NodeKind::Page(page), 0, children)
    }

    /// Moves `child` to the end of `new_parent`'s children.
    ///
    /// Both child lists are kept consistent. Memoized navigation results
    /// (`root`, `section`, content hash) of the moved subtree are not
    /// recomputed; trees should only be restructured before first navigation.
    pub fn reparent(&mut self, child: NodeId, new_parent: NodeId) -> Result<(), TreeError> {
        if matches!(self.slot(child)?.kind, NodeKind::Page(_)) {
            return Err(TreeError::PageAsChild(child));
        }
        self.slot(new_parent)?;

        let mut cursor = Some(new_parent);
        while let Some(ancestor) = cursor {
            if ancestor == child {
                return Err(TreeError::Cycle {
                    child,
                    parent: new_parent,
                });
            }
            cursor = self.nodes[ancestor.index()].parent;
        }

        if self.subtree_has_memoized_navigation(child) {
            warn!(
                "Reparenting {} under {} after navigation; cached root/section values are stale",
                child, new_parent
            );
        }

        if let Some(old_parent) = self.nodes[child.index()].parent {
            self.nodes[old_parent.index()]
                .children
                .retain(|&id| id != child);
        }
        self.nodes[new_parent.index()].children.push(child);
        self.nodes[child.index()].parent = Some(new_parent);
        Ok(())
    }

    /// Returns a handle to the node, or `None` if the id is not from this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<WikiNode<'_>> {
        (id.index() < self.nodes.len()).then(|| WikiNode::new(self, id))
    }

    /// Returns a handle to the node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn node(&self, id: NodeId) -> WikiNode<'_> {
        assert!(id.index() < self.nodes.len(), "unknown node {id}");
        WikiNode::new(self, id)
    }

    /// Iterates over all nodes in allocation order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = WikiNode<'_>> + '_ {
        (0..self.nodes.len()).map(move |index| WikiNode::new(self, NodeId::new(index as u32)))
    }

    #[inline]
    pub(crate) fn slot_unchecked(&self, id: NodeId) -> &NodeSlot {
        &self.nodes[id.index()]
    }

    fn slot(&self, id: NodeId) -> Result<&NodeSlot, TreeError> {
        self.nodes.get(id.index()).ok_or(TreeError::UnknownNode(id))
    }

    fn next_id(&self) -> NodeId {
        NodeId::new(self.nodes.len() as u32)
    }

    fn push(&mut self, slot: NodeSlot) -> NodeId {
        let id = self.next_id();
        self.nodes.push(slot);
        id
    }

    fn subtree_has_memoized_navigation(&self, id: NodeId) -> bool {
        let slot = &self.nodes[id.index()];
        slot.has_memoized_navigation()
            || slot
                .children
                .iter()
                .any(|&child| self.subtree_has_memoized_navigation(child))
    }
}

impl fmt::Debug for NodeArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeArena")
            .field("nodes", &self.nodes.len())
            .finish()
    }
}
