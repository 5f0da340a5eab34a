//! Selection, expansion and preview state layered over tree ids
//!
//! The navigation state only ever stores [`NodeId`]s. It reads the tree to
//! validate a transition but never changes its structure; after a tree
//! mutation the owner calls [`NavigationState::reconcile`] with the ids that
//! still exist.

use crate::error::{ExplorerError, Result};
use crate::tree::{NodeId, NodeKind, Tree};
use log::debug;
use std::collections::HashSet;

/// Whether a folder is shown open or closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Expansion {
    #[default]
    Collapsed,
    Expanded,
}

/// Transient view state: what is selected, expanded and previewed
///
/// Every transition either applies completely or, on error, leaves the
/// state untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    selected: Option<NodeId>,
    expanded: HashSet<NodeId>,
    previewed: Option<NodeId>,
}

impl NavigationState {
    /// Nothing selected, nothing expanded, nothing previewed
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// The file currently shown in the preview pane
    pub fn previewed(&self) -> Option<NodeId> {
        self.previewed
    }

    pub fn expanded(&self) -> &HashSet<NodeId> {
        &self.expanded
    }

    pub fn expansion(&self, folder: NodeId) -> Expansion {
        if self.expanded.contains(&folder) {
            Expansion::Expanded
        } else {
            Expansion::Collapsed
        }
    }

    pub fn is_expanded(&self, folder: NodeId) -> bool {
        self.expansion(folder) == Expansion::Expanded
    }

    /// Flip a folder open/closed and select it
    ///
    /// The preview is left as it is. Returns the folder's new expansion.
    ///
    /// # Errors
    ///
    /// - [`ExplorerError::NotFound`] if `folder` is not in the tree
    /// - [`ExplorerError::InvalidTarget`] if it is a file
    pub fn toggle<T: Tree + ?Sized>(&mut self, tree: &T, folder: NodeId) -> Result<Expansion> {
        let node = tree.node(folder).ok_or(ExplorerError::NotFound(folder))?;
        if !node.is_folder() {
            return Err(ExplorerError::invalid_target(
                folder,
                NodeKind::File,
                "expand",
            ));
        }

        let expansion = if self.expanded.remove(&folder) {
            Expansion::Collapsed
        } else {
            self.expanded.insert(folder);
            Expansion::Expanded
        };
        self.selected = Some(folder);

        debug!("Toggled {} '{}' to {:?}", folder, node.name(), expansion);
        Ok(expansion)
    }

    /// Select a node
    ///
    /// Selecting a folder clears the preview. Selecting a file previews it,
    /// unless it is already the previewed file, in which case the preview is
    /// cleared instead.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::NotFound`] if `id` is not in the tree.
    pub fn select<T: Tree + ?Sized>(&mut self, tree: &T, id: NodeId) -> Result<()> {
        let node = tree.node(id).ok_or(ExplorerError::NotFound(id))?;

        self.selected = Some(id);
        self.previewed = match node.kind() {
            NodeKind::Folder => None,
            NodeKind::File if self.previewed == Some(id) => None,
            NodeKind::File => Some(id),
        };

        debug!(
            "Selected {} '{}', previewing {:?}",
            id,
            node.name(),
            self.previewed
        );
        Ok(())
    }

    /// Drop selection and preview together
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.previewed = None;
    }

    /// Forget every reference to an id that is no longer in the tree
    pub fn reconcile(&mut self, valid_ids: &HashSet<NodeId>) {
        if self.selected.is_some_and(|id| !valid_ids.contains(&id)) {
            debug!("Clearing stale selection {:?}", self.selected);
            self.selected = None;
        }
        if self.previewed.is_some_and(|id| !valid_ids.contains(&id)) {
            debug!("Clearing stale preview {:?}", self.previewed);
            self.previewed = None;
        }

        let before = self.expanded.len();
        self.expanded.retain(|id| valid_ids.contains(id));
        if self.expanded.len() != before {
            debug!(
                "Dropped {} stale expanded folders",
                before - self.expanded.len()
            );
        }
    }
}
