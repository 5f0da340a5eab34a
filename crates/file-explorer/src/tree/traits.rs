//! Read-only tree traits shared by the live store and its snapshots

use crate::tree::{Node, NodeId};
use std::collections::{HashSet, VecDeque};

/// A folder/file hierarchy with a single root folder
///
/// Implementors only provide [`Tree::root`]; every lookup is a depth-first
/// search by id from there. Both [`TreeStore`](crate::tree::TreeStore) and a
/// detached [`Node`] snapshot implement it.
///
/// # Example
///
/// ```ignore
/// fn print_tree<T: Tree>(tree: &T) {
///     for node in tree.walk(TraversalOrder::PreOrder) {
///         let depth = tree.depth(node.id());
///         println!("{:indent$}{}", "", node.name(), indent = depth * 2);
///     }
/// }
/// ```
pub trait Tree {
    /// The root folder (always exists)
    fn root(&self) -> &Node;

    /// Id of the root folder
    fn root_id(&self) -> NodeId {
        self.root().id()
    }

    /// Get a node by its id
    ///
    /// Returns `None` if the id is not in the tree.
    fn node(&self, id: NodeId) -> Option<&Node> {
        self.root().find(id)
    }

    /// Check whether a node with this id is in the tree
    fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Get the folder directly containing a node
    ///
    /// Returns `None` for the root and for unknown ids.
    fn parent(&self, id: NodeId) -> Option<&Node> {
        self.root().find_parent(id)
    }

    /// Children of a node
    ///
    /// Returns an empty slice for files and unknown ids.
    fn children_of(&self, id: NodeId) -> &[Node] {
        self.node(id).and_then(Node::children).unwrap_or_default()
    }

    /// Get the name of a node
    fn name_of(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(Node::name)
    }

    /// Nodes from the root down to `id`, inclusive
    ///
    /// Returns `None` if the id is not in the tree.
    fn lineage(&self, id: NodeId) -> Option<Vec<&Node>> {
        fn descend<'a>(node: &'a Node, id: NodeId, chain: &mut Vec<&'a Node>) -> bool {
            chain.push(node);
            if node.id() == id {
                return true;
            }
            for child in node.children().unwrap_or_default() {
                if descend(child, id, chain) {
                    return true;
                }
            }
            chain.pop();
            false
        }

        let mut chain = Vec::new();
        descend(self.root(), id, &mut chain).then_some(chain)
    }

    /// Names from the root down to this node, root name first
    ///
    /// Names are kept whole, so a name containing `/` or equal to `..` is a
    /// single entry. Returns an empty vector if the id is not in the tree.
    fn path(&self, id: NodeId) -> Vec<&str> {
        self.lineage(id)
            .unwrap_or_default()
            .into_iter()
            .map(Node::name)
            .collect()
    }

    /// The path joined with `/`, for display only
    ///
    /// Not parseable back into a node; use [`TreeTraversal::find_by_path`]
    /// with the output of [`Tree::path`] instead.
    fn display_path(&self, id: NodeId) -> String {
        self.path(id).join("/")
    }

    /// Get the depth of a node (root = 0)
    ///
    /// Returns 0 for unknown ids.
    fn depth(&self, id: NodeId) -> usize {
        self.lineage(id)
            .map(|chain| chain.len().saturating_sub(1))
            .unwrap_or(0)
    }

    /// Count total nodes in the tree
    fn node_count(&self) -> usize {
        self.root().subtree_size()
    }

    /// All ids currently in the tree
    fn ids(&self) -> HashSet<NodeId> {
        self.root().id_set()
    }

    /// Get all ancestors of a node, from parent to root
    ///
    /// Returns an empty vector for the root or unknown ids.
    fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = self.lineage(id).unwrap_or_default();
        chain.pop();
        chain.into_iter().rev().map(Node::id).collect()
    }

    /// Check if a node is a strict ancestor of another
    fn is_ancestor_of(&self, ancestor: NodeId, descendant: NodeId) -> bool {
        self.ancestors(descendant).contains(&ancestor)
    }
}

impl Tree for Node {
    fn root(&self) -> &Node {
        self
    }
}

/// Traversal order for walking the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit parent before children (top-down)
    PreOrder,
    /// Visit children before parent (bottom-up)
    PostOrder,
    /// Visit level by level (breadth-first)
    BreadthFirst,
}

/// Extension trait providing traversal and search utilities
///
/// Automatically implemented for every [`Tree`].
pub trait TreeTraversal: Tree {
    /// Walk the whole tree in the specified order
    fn walk(&self, order: TraversalOrder) -> TreeWalker<'_> {
        TreeWalker::new(Some(self.root()), order)
    }

    /// Walk the subtree rooted at `start`
    ///
    /// Yields nothing if `start` is not in the tree.
    fn walk_from(&self, start: NodeId, order: TraversalOrder) -> TreeWalker<'_> {
        TreeWalker::new(self.node(start), order)
    }

    /// Ids of all files
    fn files(&self) -> Vec<NodeId> {
        self.walk(TraversalOrder::PreOrder)
            .filter(|node| node.is_file())
            .map(Node::id)
            .collect()
    }

    /// Ids of all folders, the root included
    fn folders(&self) -> Vec<NodeId> {
        self.walk(TraversalOrder::PreOrder)
            .filter(|node| node.is_folder())
            .map(Node::id)
            .collect()
    }

    /// Find a node by the names from the root down, as [`Tree::path`]
    /// returns them
    ///
    /// The first name must be the root's. Names are compared whole and
    /// never split or normalized. When siblings share a name the first one
    /// in child order wins.
    fn find_by_path<S: AsRef<str>>(&self, names: &[S]) -> Option<NodeId> {
        let (first, rest) = names.split_first()?;
        let mut current = self.root();
        if current.name() != first.as_ref() {
            return None;
        }

        for name in rest {
            current = current
                .children()?
                .iter()
                .find(|child| child.name() == name.as_ref())?;
        }

        Some(current.id())
    }

    /// Find a node by name (first match in pre-order)
    fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.walk(TraversalOrder::PreOrder)
            .find(|node| node.name() == name)
            .map(Node::id)
    }

    /// Find all nodes with a given name
    fn find_all_by_name(&self, name: &str) -> Vec<NodeId> {
        self.walk(TraversalOrder::PreOrder)
            .filter(|node| node.name() == name)
            .map(Node::id)
            .collect()
    }
}

impl<T: Tree + ?Sized> TreeTraversal for T {}

/// Iterator over the nodes of a tree in a given order
pub struct TreeWalker<'a> {
    order: TraversalOrder,
    pending: VecDeque<&'a Node>,
    visited: HashSet<NodeId>,
}

impl<'a> TreeWalker<'a> {
    /// Create a walker starting from `start` (or an empty one)
    pub fn new(start: Option<&'a Node>, order: TraversalOrder) -> Self {
        Self {
            order,
            pending: start.into_iter().collect(),
            visited: HashSet::new(),
        }
    }

    fn next_preorder(&mut self) -> Option<&'a Node> {
        let current = self.pending.pop_back()?;

        // Push children in reverse so they pop in order
        for child in current.children().unwrap_or_default().iter().rev() {
            self.pending.push_back(child);
        }

        Some(current)
    }

    fn next_postorder(&mut self) -> Option<&'a Node> {
        while let Some(&current) = self.pending.back() {
            if !self.visited.insert(current.id()) {
                self.pending.pop_back();
                return Some(current);
            }

            for child in current.children().unwrap_or_default().iter().rev() {
                self.pending.push_back(child);
            }
        }
        None
    }

    fn next_breadthfirst(&mut self) -> Option<&'a Node> {
        let current = self.pending.pop_front()?;
        self.pending
            .extend(current.children().unwrap_or_default().iter());
        Some(current)
    }
}

impl<'a> Iterator for TreeWalker<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            TraversalOrder::PreOrder => self.next_preorder(),
            TraversalOrder::PostOrder => self.next_postorder(),
            TraversalOrder::BreadthFirst => self.next_breadthfirst(),
        }
    }
}
