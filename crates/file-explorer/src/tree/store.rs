//! Owned in-memory tree with id-based structural mutations

use crate::error::{ExplorerError, Result};
use crate::tree::{Node, NodeId, NodeKind, SeedNode, Tree};
use log::{debug, info, trace, warn};

/// Owner of the folder/file tree
///
/// All structural changes go through `&mut self`, so there is exactly one
/// writer at a time and a reference obtained from [`TreeStore::get`] can
/// never observe a half-applied mutation. Callers that need to keep a view
/// across a mutation take a [`TreeStore::snapshot`].
///
/// Every lookup is a depth-first search by id in child order; names are
/// never used for identity.
#[derive(Debug, Clone)]
pub struct TreeStore {
    root: Node,
    /// Next id to hand out; ids are never reused
    next_id: u64,
}

impl TreeStore {
    /// Create a store holding only an empty root folder
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root: Node::new(NodeId::from(0), root_name, NodeKind::Folder),
            next_id: 1,
        }
    }

    /// Build a store from a nested seed structure
    ///
    /// Ids are assigned in pre-order, the same way [`TreeStore::insert`]
    /// would assign them.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::InvalidSeed`] if the seed root is not a
    /// folder or a file record lists children.
    pub fn from_seed(seed: SeedNode) -> Result<Self> {
        if !seed.kind.is_folder() {
            return Err(ExplorerError::InvalidSeed(format!(
                "root '{}' must be a folder",
                seed.name
            )));
        }

        let mut store = Self::new(seed.name);
        let root_id = store.root.id();
        for child in seed.children.unwrap_or_default() {
            store.graft(root_id, child)?;
        }

        info!(
            "Seeded tree '{}' with {} nodes",
            store.root.name(),
            store.node_count()
        );
        Ok(store)
    }

    fn graft(&mut self, parent: NodeId, seed: SeedNode) -> Result<()> {
        let children = match (seed.kind, seed.children) {
            (NodeKind::File, Some(children)) if !children.is_empty() => {
                return Err(ExplorerError::InvalidSeed(format!(
                    "file '{}' cannot have children",
                    seed.name
                )));
            }
            (NodeKind::File, _) => Vec::new(),
            (NodeKind::Folder, children) => children.unwrap_or_default(),
        };

        let id = self.insert(parent, seed.name, seed.kind)?;
        for child in children {
            self.graft(id, child)?;
        }
        Ok(())
    }

    /// Look up a node by id
    pub fn get(&self, id: NodeId) -> Result<&Node> {
        self.root.find(id).ok_or(ExplorerError::NotFound(id))
    }

    /// Find the folder directly containing `id`
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::NotFound`] for the root (it has no parent)
    /// and for ids not in the tree.
    pub fn find_parent(&self, id: NodeId) -> Result<&Node> {
        self.root.find_parent(id).ok_or(ExplorerError::NotFound(id))
    }

    /// Append a new node as the last child of `parent`
    ///
    /// New folders start with no children. Returns the fresh id.
    ///
    /// # Errors
    ///
    /// - [`ExplorerError::NotFound`] if `parent` is not in the tree
    /// - [`ExplorerError::InvalidTarget`] if `parent` is a file
    pub fn insert(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        kind: NodeKind,
    ) -> Result<NodeId> {
        let name = name.into();
        let id = NodeId::from(self.next_id);

        let Some(parent_node) = self.root.find_mut(parent) else {
            warn!("Insert of '{}' rejected: parent {} not found", name, parent);
            return Err(ExplorerError::NotFound(parent));
        };
        let Some(children) = parent_node.children_mut() else {
            warn!("Insert of '{}' rejected: parent {} is a file", name, parent);
            return Err(ExplorerError::invalid_target(
                parent,
                NodeKind::File,
                "insert into",
            ));
        };

        debug!("Inserting {} '{}' as {} under {}", kind, name, id, parent);
        children.push(Node::new(id, name, kind));
        // A rejected insert must not burn an id
        self.next_id += 1;
        Ok(id)
    }

    /// Change a node's name in place
    ///
    /// Identity, children and position are untouched.
    pub fn rename(&mut self, id: NodeId, new_name: impl Into<String>) -> Result<()> {
        let node = self.root.find_mut(id).ok_or_else(|| {
            warn!("Rename rejected: {} not found", id);
            ExplorerError::NotFound(id)
        })?;
        let new_name = new_name.into();
        info!("Renaming {} '{}' -> '{}'", id, node.name(), new_name);
        node.set_name(new_name);
        Ok(())
    }

    /// Detach a node (and its whole subtree) from the tree
    ///
    /// Remaining siblings keep their order. Returns the detached subtree so
    /// callers can reconcile anything that referenced it.
    ///
    /// # Errors
    ///
    /// - [`ExplorerError::InvalidTarget`] for the root
    /// - [`ExplorerError::NotFound`] if `id` is not in the tree
    pub fn remove(&mut self, id: NodeId) -> Result<Node> {
        if id == self.root.id() {
            warn!("Remove rejected: {} is the root", id);
            return Err(ExplorerError::invalid_target(
                id,
                NodeKind::Folder,
                "remove root",
            ));
        }

        let children = self
            .root
            .find_parent_mut(id)
            .and_then(Node::children_mut)
            .ok_or_else(|| {
                warn!("Remove rejected: {} not found", id);
                ExplorerError::NotFound(id)
            })?;

        let position = children
            .iter()
            .position(|child| child.id() == id)
            .ok_or(ExplorerError::NotFound(id))?;
        let removed = children.remove(position);

        trace!("Removed subtree: {:?}", removed.subtree_ids());
        info!(
            "Removed {} '{}' ({} nodes)",
            removed.id(),
            removed.name(),
            removed.subtree_size()
        );
        Ok(removed)
    }

    /// An owned copy of the current tree
    pub fn snapshot(&self) -> Node {
        self.root.clone()
    }
}

impl Default for TreeStore {
    fn default() -> Self {
        // The built-in seed has a folder root and no file children
        Self::from_seed(SeedNode::default()).unwrap_or_else(|_| Self::new("root"))
    }
}

impl Tree for TreeStore {
    fn root(&self) -> &Node {
        &self.root
    }
}
