//! Error types for the board engine

use crate::config::ConfigError;
use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// List not found
    #[error("list not found: {id}")]
    ListNotFound { id: String },

    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Reorder input is not an exact permutation of the board's lists
    #[error("invalid list permutation: {reason}")]
    InvalidPermutation { reason: String },

    /// Board failed its ordering or ownership checks
    #[error("board invariant violated: {message}")]
    InvariantViolation { message: String },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create an invalid permutation error
    pub fn invalid_permutation(reason: impl Into<String>) -> Self {
        Self::InvalidPermutation {
            reason: reason.into(),
        }
    }

    /// Create an invariant violation error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }

    /// Unknown ids degrade to silent no-ops at the store boundary
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound { .. } | Self::TaskNotFound { .. })
    }
}
