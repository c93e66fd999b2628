//! Domain errors - Contract and graph-integrity violations

use thiserror::Error;

/// Broad classification of a [`DomainError`]
///
/// Callers use this to tell a plain misuse of the API apart from a semantic
/// problem with the story graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Blank strings, out-of-range numbers, empty required collections
    InvalidArgument,
    /// Missing passages, dangling references, guarded removals
    GraphViolation,
}

/// Errors raised by the story model and the player
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Invalid links: {reason}")]
    InvalidLinks { reason: String },

    #[error("Invalid passages: {reason}")]
    InvalidPassages { reason: String },

    #[error("Item '{item}' is already in the inventory")]
    ItemAlreadyInInventory { item: String },

    #[error("The inventory does not have the item '{item}'")]
    ItemNotInInventory { item: String },

    #[error("Link to '{reference}' is not in the links of this passage")]
    LinkNotFound { reference: String },

    #[error("No passage titled '{reference}' in this story")]
    PassageNotFound { reference: String },

    #[error("Opening passage '{title}' must have at least one link")]
    OpeningPassageWithoutLinks { title: String },

    #[error("Opening passage '{title}' cannot be removed")]
    OpeningPassageRemoval { title: String },

    #[error("Passage '{title}' is still linked to by other passages")]
    PassageStillReferenced { title: String },

    #[error("Story contains {count} broken link(s)")]
    BrokenLinks { count: usize },

    #[error("Goals cannot be empty")]
    GoalsEmpty,
}

impl DomainError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn invalid_links(reason: impl Into<String>) -> Self {
        Self::InvalidLinks {
            reason: reason.into(),
        }
    }

    pub fn invalid_passages(reason: impl Into<String>) -> Self {
        Self::InvalidPassages {
            reason: reason.into(),
        }
    }

    pub fn passage_not_found(reference: impl Into<String>) -> Self {
        Self::PassageNotFound {
            reference: reference.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. }
            | Self::InvalidLinks { .. }
            | Self::InvalidPassages { .. }
            | Self::ItemAlreadyInInventory { .. }
            | Self::ItemNotInInventory { .. }
            | Self::GoalsEmpty => ErrorKind::InvalidArgument,
            Self::LinkNotFound { .. }
            | Self::PassageNotFound { .. }
            | Self::OpeningPassageWithoutLinks { .. }
            | Self::OpeningPassageRemoval { .. }
            | Self::PassageStillReferenced { .. }
            | Self::BrokenLinks { .. } => ErrorKind::GraphViolation,
        }
    }

    pub fn is_graph_violation(&self) -> bool {
        self.kind() == ErrorKind::GraphViolation
    }
}
