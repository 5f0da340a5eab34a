//! Error types shared by the tree store, navigation state and explorer flows.

use crate::tree::{NodeId, NodeKind};
use thiserror::Error;

/// Coarse category of an [`ExplorerError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The referenced node does not exist
    NotFound,
    /// The operation is not valid for the node's kind or position
    InvalidTarget,
    /// The user declined to supply input
    CancelledByUser,
    /// A flow needed a selection and there was none
    NoSelection,
    /// The seed structure violates the tree's invariants
    InvalidSeed,
}

/// Errors returned by explorer operations
///
/// None of these are fatal: a failed operation leaves the tree and the
/// navigation state exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplorerError {
    #[error("node {0} not found")]
    NotFound(NodeId),

    #[error("cannot {operation} {kind} {id}")]
    InvalidTarget {
        id: NodeId,
        kind: NodeKind,
        operation: &'static str,
    },

    #[error("cancelled by user")]
    CancelledByUser,

    #[error("nothing is selected")]
    NoSelection,

    #[error("invalid seed: {0}")]
    InvalidSeed(String),
}

impl ExplorerError {
    pub(crate) fn invalid_target(id: NodeId, kind: NodeKind, operation: &'static str) -> Self {
        Self::InvalidTarget {
            id,
            kind,
            operation,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidTarget { .. } => ErrorKind::InvalidTarget,
            Self::CancelledByUser => ErrorKind::CancelledByUser,
            Self::NoSelection => ErrorKind::NoSelection,
            Self::InvalidSeed(_) => ErrorKind::InvalidSeed,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
