//! Folder/file tree model
//!
//! [`TreeStore`] owns the tree and performs every structural mutation;
//! [`Tree`] and [`TreeTraversal`] provide read-only lookups and walks over
//! the store or any detached [`Node`] snapshot.

mod node;
mod seed;
mod store;
mod traits;

pub use node::{Entry, Node, NodeId, NodeKind};
pub use seed::SeedNode;
pub use store::TreeStore;
pub use traits::{TraversalOrder, Tree, TreeTraversal, TreeWalker};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        Entry, Node, NodeId, NodeKind, SeedNode, TraversalOrder, Tree, TreeStore, TreeTraversal,
    };
}
