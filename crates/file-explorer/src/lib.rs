//! File Explorer Library
//!
//! An in-memory folder/file tree that a user can browse, expand and
//! collapse, select, create into, rename and delete. Nothing touches the
//! real filesystem; the tree lives for the life of the process.
//!
//! # Core Concepts
//!
//! - **TreeStore**: owns the tree and performs every structural mutation
//! - **NavigationState**: selection, expanded folders and the previewed file,
//!   stored as node ids only
//! - **Explorer**: runs the add/rename/delete flows over both, reconciling
//!   navigation after each mutation
//!
//! # Example
//!
//! ```no_run
//! use file_explorer::prelude::*;
//!
//! let mut explorer = Explorer::default();
//! let docs = explorer.tree().find_by_name("Documents").unwrap();
//! explorer.toggle(docs).unwrap();
//!
//! let draft = explorer
//!     .add_item(
//!         NodeKind::File,
//!         &mut |_: &NameRequest| Some("draft.txt".to_string()),
//!         &mut |message: &str| eprintln!("{}", message),
//!     )
//!     .unwrap();
//! explorer.select(draft).unwrap();
//!
//! println!("{}", explorer.render_outline());
//! ```

pub mod config;
pub mod error;
pub mod explorer;
pub mod navigation;
pub mod preview;
pub mod tree;

pub use config::ExplorerConfig;
pub use error::{ErrorKind, ExplorerError, Result};
pub use explorer::{Explorer, Icon, NamePrompt, NameRequest, Notifier, Row};
pub use navigation::{Expansion, NavigationState};
pub use preview::{ContentType, Preview};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::tree::prelude::*;
    pub use crate::{
        ContentType, ErrorKind, Expansion, Explorer, ExplorerConfig, ExplorerError, NamePrompt,
        NameRequest, NavigationState, Notifier, Preview,
    };
}
