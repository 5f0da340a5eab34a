//! Core node types for the explorer tree

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Unique identifier for a node within a tree
///
/// Assigned once when the node is created and never reused by the store that
/// issued it, so it stays valid across renames and sibling removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display(fmt = "#{}", _0)]
pub struct NodeId(u64);

impl NodeId {
    /// Get the inner value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for u64 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// The kind of a node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A folder - holds an ordered list of children
    #[display(fmt = "folder")]
    Folder,
    /// A file - always a leaf
    #[display(fmt = "file")]
    File,
}

impl NodeKind {
    /// Returns true if this is a folder
    pub const fn is_folder(self) -> bool {
        matches!(self, NodeKind::Folder)
    }

    /// Returns true if this is a file
    pub const fn is_file(self) -> bool {
        matches!(self, NodeKind::File)
    }
}

/// Kind-specific contents of a node
///
/// Files carry no children collection at all, so nothing can be appended to
/// one by accident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Folder { children: Vec<Node> },
    File,
}

/// A single folder or file in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    name: String,
    entry: Entry,
}

impl Node {
    /// Create a node with no children
    pub(crate) fn new(id: NodeId, name: impl Into<String>, kind: NodeKind) -> Self {
        let entry = match kind {
            NodeKind::Folder => Entry::Folder {
                children: Vec::new(),
            },
            NodeKind::File => Entry::File,
        };
        Self {
            id,
            name: name.into(),
            entry,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        match self.entry {
            Entry::Folder { .. } => NodeKind::Folder,
            Entry::File => NodeKind::File,
        }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn is_folder(&self) -> bool {
        self.kind().is_folder()
    }

    pub fn is_file(&self) -> bool {
        self.kind().is_file()
    }

    /// Children of a folder, or `None` for a file
    pub fn children(&self) -> Option<&[Node]> {
        match &self.entry {
            Entry::Folder { children } => Some(children),
            Entry::File => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match &mut self.entry {
            Entry::Folder { children } => Some(children),
            Entry::File => None,
        }
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Depth-first search for a node by id, starting with `self`
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children()?.iter().find_map(|child| child.find(id))
    }

    pub(crate) fn find_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if self.id == id {
            return Some(self);
        }
        self.children_mut()?
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }

    /// Depth-first search for the folder directly containing `id`
    ///
    /// Returns `None` when `id` is this node itself or is not below it.
    pub fn find_parent(&self, id: NodeId) -> Option<&Node> {
        let children = self.children()?;
        if children.iter().any(|child| child.id == id) {
            return Some(self);
        }
        children.iter().find_map(|child| child.find_parent(id))
    }

    pub(crate) fn find_parent_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        // Decide first, then borrow mutably: the direct hit and the recursive
        // search can't hold the same borrow.
        let is_direct_parent = self
            .children()
            .is_some_and(|children| children.iter().any(|child| child.id == id));
        if is_direct_parent {
            return Some(self);
        }
        self.children_mut()?
            .iter_mut()
            .find_map(|child| child.find_parent_mut(id))
    }

    /// Ids of this node and every descendant, in pre-order
    pub fn subtree_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids(&self, ids: &mut Vec<NodeId>) {
        ids.push(self.id);
        for child in self.children().unwrap_or_default() {
            child.collect_ids(ids);
        }
    }

    /// Set of ids in this subtree, for membership checks
    pub fn id_set(&self) -> HashSet<NodeId> {
        self.subtree_ids().into_iter().collect()
    }

    /// Number of nodes in this subtree, including `self`
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children()
            .unwrap_or_default()
            .iter()
            .map(Node::subtree_size)
            .sum::<usize>()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.name, self.kind(), self.id)
    }
}
