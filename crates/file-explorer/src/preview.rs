//! Preview descriptors handed to an external viewer
//!
//! The core never produces file bytes. It only tells the viewer which file
//! is open and whether to treat it as an image or as text, based on the
//! file name's suffix.

use crate::tree::{Node, NodeId};
use derive_more::Display;

/// Extensions treated as images unless configured otherwise
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &["jpg", "png"];

/// How a viewer should render a previewed file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ContentType {
    #[display(fmt = "image")]
    Image,
    #[display(fmt = "text")]
    Text,
}

impl ContentType {
    /// Classify a file name by its suffix (case-insensitive)
    ///
    /// A name is an image when it ends in `.` followed by one of the
    /// extensions, so `.png` counts and `x.jpg/` does not.
    pub fn classify<S: AsRef<str>>(name: &str, image_extensions: &[S]) -> Self {
        let is_image = image_extensions
            .iter()
            .any(|ext| has_suffix(name, ext.as_ref()));

        if is_image {
            ContentType::Image
        } else {
            ContentType::Text
        }
    }
}

/// `name` ends with `.{ext}`, ignoring ASCII case
fn has_suffix(name: &str, ext: &str) -> bool {
    let Some(split) = name.len().checked_sub(ext.len() + 1) else {
        return false;
    };
    match (name.get(split..split + 1), name.get(split + 1..)) {
        (Some("."), Some(tail)) => tail.eq_ignore_ascii_case(ext),
        _ => false,
    }
}

/// What the preview pane should show for the previewed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub id: NodeId,
    pub name: String,
    pub content_type: ContentType,
}

impl Preview {
    pub fn for_node<S: AsRef<str>>(node: &Node, image_extensions: &[S]) -> Self {
        Self {
            id: node.id(),
            name: node.name().to_string(),
            content_type: ContentType::classify(node.name(), image_extensions),
        }
    }

    /// Body text for a text preview
    pub fn placeholder_text(&self) -> String {
        format!("This is a preview of {}", self.name)
    }

    /// Label an image viewer uses to fetch or caption its placeholder
    pub fn placeholder_label(&self) -> &str {
        &self.name
    }
}
