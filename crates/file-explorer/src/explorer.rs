//! The explorer's user flows over a tree store and its navigation state
//!
//! [`Explorer`] is what a UI drives. Navigation events go straight to the
//! [`NavigationState`]; mutation flows gather input through a [`NamePrompt`]
//! first, then change the [`TreeStore`], then reconcile navigation so it
//! never points at a node that no longer exists. Failures are reported
//! through a [`Notifier`] and returned to the caller; they never leave a
//! partial change behind.

use crate::config::ExplorerConfig;
use crate::error::{ExplorerError, Result};
use crate::navigation::{Expansion, NavigationState};
use crate::preview::Preview;
use crate::tree::{Node, NodeId, NodeKind, Tree, TreeStore};
use log::{debug, info, warn};

/// What a [`NamePrompt`] is being asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRequest {
    /// Kind of the node being created or renamed
    pub kind: NodeKind,
    /// Current name when renaming, `None` when creating
    pub current_name: Option<String>,
}

impl NameRequest {
    /// Human-readable prompt text
    pub fn message(&self) -> String {
        match &self.current_name {
            Some(name) => format!("Rename \"{}\" to", name),
            None => format!("Enter new {} name", self.kind),
        }
    }
}

/// Collects a node name from the user
///
/// Returning `None` (or an empty string) cancels the flow.
pub trait NamePrompt {
    fn prompt_for_name(&mut self, request: &NameRequest) -> Option<String>;
}

impl<F> NamePrompt for F
where
    F: FnMut(&NameRequest) -> Option<String>,
{
    fn prompt_for_name(&mut self, request: &NameRequest) -> Option<String> {
        self(request)
    }
}

/// Shows an informational message to the user
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl<F> Notifier for F
where
    F: FnMut(&str),
{
    fn notify(&mut self, message: &str) {
        self(message)
    }
}

/// Icon a renderer should draw for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Folder,
    FolderOpen,
    File,
}

impl Icon {
    fn glyph(self) -> &'static str {
        match self {
            Icon::Folder => "+",
            Icon::FolderOpen => "-",
            Icon::File => "·",
        }
    }
}

/// One visible line of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    pub depth: usize,
    pub expanded: bool,
    pub selected: bool,
    pub icon: Icon,
}

/// A tree store plus navigation state, driven as one unit
#[derive(Debug, Clone)]
pub struct Explorer {
    tree: TreeStore,
    navigation: NavigationState,
    image_extensions: Vec<String>,
}

impl Explorer {
    /// Build an explorer from its configuration
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::InvalidSeed`] if the configured seed is not
    /// a valid tree.
    pub fn new(config: &ExplorerConfig) -> Result<Self> {
        let tree = TreeStore::from_seed(config.seed.clone())?;
        Ok(Self::with_tree(tree, config.image_extensions.clone()))
    }

    /// Wrap an existing store with fresh navigation state
    pub fn with_tree(tree: TreeStore, image_extensions: Vec<String>) -> Self {
        Self {
            tree,
            navigation: NavigationState::new(),
            image_extensions,
        }
    }

    pub fn tree(&self) -> &TreeStore {
        &self.tree
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.navigation.selected()
    }

    /// Expand or collapse a folder (and select it)
    pub fn toggle(&mut self, folder: NodeId) -> Result<Expansion> {
        self.navigation.toggle(&self.tree, folder)
    }

    /// Select a node, updating the preview
    pub fn select(&mut self, id: NodeId) -> Result<()> {
        self.navigation.select(&self.tree, id)
    }

    /// Create a file or folder inside the selected folder
    ///
    /// Requires a folder to be selected. The name is requested before the
    /// tree is touched; cancelling leaves everything unchanged.
    pub fn add_item(
        &mut self,
        kind: NodeKind,
        prompt: &mut impl NamePrompt,
        notifier: &mut impl Notifier,
    ) -> Result<NodeId> {
        let result = self.try_add_item(kind, prompt);
        if let Err(err) = &result {
            let message = match err {
                ExplorerError::NoSelection => "Select a folder first.".to_string(),
                other => Self::message_for(other),
            };
            Self::report(notifier, err, &message);
        }
        result
    }

    fn try_add_item(&mut self, kind: NodeKind, prompt: &mut impl NamePrompt) -> Result<NodeId> {
        let parent = self.selected().ok_or(ExplorerError::NoSelection)?;
        let parent_node = self.tree.get(parent)?;
        if !parent_node.is_folder() {
            return Err(ExplorerError::invalid_target(
                parent,
                NodeKind::File,
                "insert into",
            ));
        }

        let name = Self::ask(
            prompt,
            NameRequest {
                kind,
                current_name: None,
            },
        )?;
        let id = self.tree.insert(parent, name, kind)?;
        self.reconcile();
        info!("Added {} {} under {}", kind, id, parent);
        Ok(id)
    }

    /// Rename the selected node
    pub fn rename_selected(
        &mut self,
        prompt: &mut impl NamePrompt,
        notifier: &mut impl Notifier,
    ) -> Result<()> {
        let result = self.try_rename_selected(prompt);
        if let Err(err) = &result {
            Self::report(notifier, err, &Self::message_for(err));
        }
        result
    }

    fn try_rename_selected(&mut self, prompt: &mut impl NamePrompt) -> Result<()> {
        let id = self.selected().ok_or(ExplorerError::NoSelection)?;
        let node = self.tree.get(id)?;
        let request = NameRequest {
            kind: node.kind(),
            current_name: Some(node.name().to_string()),
        };

        let name = Self::ask(prompt, request)?;
        self.tree.rename(id, name)?;
        self.reconcile();
        Ok(())
    }

    /// Delete the selected node and everything below it
    ///
    /// Selection and preview are cleared afterwards, and any expanded
    /// folders inside the deleted subtree are forgotten. Returns the
    /// detached subtree.
    pub fn delete_selected(&mut self, notifier: &mut impl Notifier) -> Result<Node> {
        let result = self
            .selected()
            .ok_or(ExplorerError::NoSelection)
            .and_then(|id| self.tree.remove(id));

        match result {
            Ok(removed) => {
                self.navigation.clear_selection();
                self.reconcile();
                Ok(removed)
            }
            Err(err) => {
                Self::report(notifier, &err, &Self::message_for(&err));
                Err(err)
            }
        }
    }

    /// The preview for the currently previewed file, if any
    pub fn preview(&self) -> Option<Preview> {
        let id = self.navigation.previewed()?;
        let node = self.tree.node(id)?;
        Some(Preview::for_node(node, &self.image_extensions))
    }

    /// Rows a renderer should draw, in display order
    ///
    /// The root is always shown; a folder's children are shown only while
    /// it is expanded.
    pub fn visible_rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        self.push_rows(self.tree.root(), 0, &mut rows);
        rows
    }

    fn push_rows(&self, node: &Node, depth: usize, rows: &mut Vec<Row>) {
        let expanded = node.is_folder() && self.navigation.is_expanded(node.id());
        let icon = match (node.kind(), expanded) {
            (NodeKind::File, _) => Icon::File,
            (NodeKind::Folder, true) => Icon::FolderOpen,
            (NodeKind::Folder, false) => Icon::Folder,
        };
        rows.push(Row {
            id: node.id(),
            name: node.name().to_string(),
            kind: node.kind(),
            depth,
            expanded,
            selected: self.navigation.selected() == Some(node.id()),
            icon,
        });

        if expanded {
            for child in node.children().unwrap_or_default() {
                self.push_rows(child, depth + 1, rows);
            }
        }
    }

    /// Plain-text outline of the visible rows
    ///
    /// One row per line, indented two spaces per level, with the selected
    /// row marked by a trailing `<`.
    pub fn render_outline(&self) -> String {
        self.visible_rows()
            .iter()
            .map(|row| {
                format!(
                    "{}{} {} {}{}",
                    "  ".repeat(row.depth),
                    row.icon.glyph(),
                    row.name,
                    row.id,
                    if row.selected { " <" } else { "" }
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn ask(prompt: &mut impl NamePrompt, request: NameRequest) -> Result<String> {
        match prompt.prompt_for_name(&request) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => {
                debug!("Name prompt for {:?} cancelled", request);
                Err(ExplorerError::CancelledByUser)
            }
        }
    }

    fn reconcile(&mut self) {
        self.navigation.reconcile(&self.tree.ids());
    }

    fn message_for(err: &ExplorerError) -> String {
        match err {
            ExplorerError::NoSelection => "Select an item first.".to_string(),
            ExplorerError::NotFound(_) => "The selected item no longer exists.".to_string(),
            ExplorerError::InvalidTarget { kind, operation, .. } => match *operation {
                "remove root" => "The root folder cannot be deleted.".to_string(),
                "insert into" => "Select a folder first.".to_string(),
                "expand" => "Only folders can be expanded.".to_string(),
                other => format!("Cannot {} this {}.", other, kind),
            },
            ExplorerError::CancelledByUser => "Cancelled.".to_string(),
            ExplorerError::InvalidSeed(reason) => format!("Invalid tree: {}", reason),
        }
    }

    fn report(notifier: &mut impl Notifier, err: &ExplorerError, message: &str) {
        warn!("Explorer operation failed: {}", err);
        notifier.notify(message);
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::with_tree(
            TreeStore::default(),
            ExplorerConfig::default().image_extensions,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::tree::TreeTraversal;
    use pretty_assertions::assert_eq;

    fn answer(name: &'static str) -> impl FnMut(&NameRequest) -> Option<String> {
        move |_| Some(name.to_string())
    }

    #[test]
    fn test_name_request_message() {
        let create = NameRequest {
            kind: NodeKind::Folder,
            current_name: None,
        };
        assert_eq!(create.message(), "Enter new folder name");

        let rename = NameRequest {
            kind: NodeKind::File,
            current_name: Some("a.txt".into()),
        };
        assert_eq!(rename.message(), "Rename \"a.txt\" to");
    }

    #[test]
    fn test_invalid_target_messages_follow_operation() {
        let root = NodeId::from(0);
        let todo = NodeId::from(6);
        let cases = [
            (
                ExplorerError::invalid_target(root, NodeKind::Folder, "remove root"),
                "The root folder cannot be deleted.",
            ),
            (
                ExplorerError::invalid_target(todo, NodeKind::File, "insert into"),
                "Select a folder first.",
            ),
            (
                ExplorerError::invalid_target(todo, NodeKind::File, "expand"),
                "Only folders can be expanded.",
            ),
            (
                ExplorerError::invalid_target(todo, NodeKind::File, "rename"),
                "Cannot rename this file.",
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(Explorer::message_for(&err), expected);
        }
    }

    #[test]
    fn test_add_requires_selection() {
        let mut explorer = Explorer::default();
        let mut messages = Vec::new();

        let err = explorer
            .add_item(NodeKind::File, &mut answer("x"), &mut |m: &str| {
                messages.push(m.to_string())
            })
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NoSelection);
        assert_eq!(messages, vec!["Select a folder first."]);
    }

    #[test]
    fn test_add_into_selected_folder() {
        let mut explorer = Explorer::default();
        let pictures = explorer.tree().find_by_name("Pictures").unwrap();
        explorer.toggle(pictures).unwrap();

        let id = explorer
            .add_item(NodeKind::Folder, &mut answer("Holidays"), &mut |_: &str| {})
            .unwrap();

        assert_eq!(explorer.tree().find_parent(id).unwrap().id(), pictures);
        assert!(explorer.tree().get(id).unwrap().is_folder());
    }

    #[test]
    fn test_prompt_sees_request() {
        let mut explorer = Explorer::default();
        let todo = explorer.tree().find_by_name("todo.txt").unwrap();
        explorer.select(todo).unwrap();

        let mut seen = None;
        explorer
            .rename_selected(
                &mut |request: &NameRequest| {
                    seen = Some(request.clone());
                    Some("done.txt".to_string())
                },
                &mut |_: &str| {},
            )
            .unwrap();

        assert_eq!(
            seen,
            Some(NameRequest {
                kind: NodeKind::File,
                current_name: Some("todo.txt".into()),
            })
        );
        assert_eq!(explorer.tree().get(todo).unwrap().name(), "done.txt");
    }

    #[test]
    fn test_cancelled_prompt_changes_nothing() {
        let mut explorer = Explorer::default();
        let root = explorer.tree().root_id();
        explorer.toggle(root).unwrap();
        let before = explorer.tree().snapshot();

        let err = explorer
            .add_item(NodeKind::File, &mut |_: &NameRequest| None, &mut |_: &str| {})
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CancelledByUser);

        let err = explorer
            .rename_selected(&mut answer(""), &mut |_: &str| {})
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CancelledByUser);

        assert_eq!(explorer.tree().snapshot(), before);
    }

    #[test]
    fn test_delete_root_is_rejected() {
        let mut explorer = Explorer::default();
        let root = explorer.tree().root_id();
        explorer.toggle(root).unwrap();
        let mut messages = Vec::new();

        let err = explorer
            .delete_selected(&mut |m: &str| messages.push(m.to_string()))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidTarget);
        assert_eq!(messages, vec!["The root folder cannot be deleted."]);
        assert_eq!(explorer.selected(), Some(root));
    }

    #[test]
    fn test_delete_clears_selection_and_preview() {
        let mut explorer = Explorer::default();
        let todo = explorer.tree().find_by_name("todo.txt").unwrap();
        let pictures = explorer.tree().find_by_name("Pictures").unwrap();
        explorer.select(todo).unwrap();
        explorer.toggle(pictures).unwrap();

        let removed = explorer.delete_selected(&mut |_: &str| {}).unwrap();

        assert_eq!(removed.id(), pictures);
        assert_eq!(explorer.selected(), None);
        assert_eq!(explorer.preview(), None);
        assert!(explorer.navigation().expanded().is_empty());
    }

    #[test]
    fn test_visible_rows_follow_expansion() {
        let mut explorer = Explorer::default();
        assert_eq!(explorer.visible_rows().len(), 1);

        let root = explorer.tree().root_id();
        explorer.toggle(root).unwrap();
        let rows = explorer.visible_rows();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["root", "Documents", "Pictures", "todo.txt"]);
        assert_eq!(rows[0].icon, Icon::FolderOpen);
        assert!(rows[0].selected);
        assert_eq!(rows[1].icon, Icon::Folder);
        assert_eq!(rows[1].depth, 1);
        assert_eq!(rows[3].icon, Icon::File);
    }
}
