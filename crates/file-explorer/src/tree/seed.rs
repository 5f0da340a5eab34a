//! Plain nested seed structure used to build the initial tree

use crate::tree::NodeKind;
use serde::{Deserialize, Serialize};

/// A folder or file record in a seed tree
///
/// Matches the JSON shape `{ "name": ..., "type": "folder" | "file",
/// "children": [...] }`. Seed records carry no ids; the store assigns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SeedNode>>,
}

impl SeedNode {
    pub fn folder(name: impl Into<String>, children: Vec<SeedNode>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Folder,
            children: Some(children),
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            children: None,
        }
    }
}

impl Default for SeedNode {
    /// The sample tree the explorer starts with when nothing else is configured
    fn default() -> Self {
        SeedNode::folder(
            "root",
            vec![
                SeedNode::folder(
                    "Documents",
                    vec![SeedNode::file("resume.pdf"), SeedNode::file("notes.txt")],
                ),
                SeedNode::folder("Pictures", vec![SeedNode::file("photo.jpg")]),
                SeedNode::file("todo.txt"),
            ],
        )
    }
}
