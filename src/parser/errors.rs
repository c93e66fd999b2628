//! Errors raised while reading or writing `.paths` story files

use crate::domain::errors::DomainError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormatError {
    #[error("Story file is empty")]
    Empty,

    #[error("Corrupt story file at line {line}: {reason}")]
    Corrupt { line: usize, reason: String },

    #[error("Story cannot be written as a story file: {reason}")]
    Unrepresentable { reason: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl FormatError {
    pub fn corrupt(line: usize, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            line,
            reason: reason.into(),
        }
    }

    pub fn unrepresentable(reason: impl Into<String>) -> Self {
        Self::Unrepresentable {
            reason: reason.into(),
        }
    }

    /// Line number of a corrupt input, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Corrupt { line, .. } => Some(*line),
            _ => None,
        }
    }
}
