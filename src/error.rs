//! Error types for the Rankly ranking system.

use thiserror::Error;

/// Errors raised by the sorting engines and the snapshot layer.
///
/// Validation happens at construction and restore only. Stepping a
/// well-formed engine never fails unless the pull protocol is misused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("At least two songs are needed to rank, got {found}")]
    TooFewItems { found: usize },

    #[error("Save data contains no songs left to sort")]
    NothingToResume,

    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("An answer to the pending comparison is required")]
    AnswerRequired,

    #[error("No comparison is pending, so no answer was expected")]
    UnexpectedAnswer,

    #[error("Sorting already finished")]
    AlreadyFinished,
}

impl SortError {
    /// True when the error means the save data itself cannot be used.
    pub fn is_corrupt_save(&self) -> bool {
        matches!(
            self,
            SortError::MalformedSnapshot(_) | SortError::NothingToResume
        )
    }
}

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Save not found: {0}")]
    SaveNotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<sled::Error> for StorageError {
    fn from(err: sled::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}

/// Errors surfaced at the driver and CLI boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Sort(#[from] SortError),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Prompt failed: {0}")]
    PromptError(String),

    #[error("Import failed: {0}")]
    ImportError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<dialoguer::Error> for ApiError {
    fn from(err: dialoguer::Error) -> Self {
        ApiError::PromptError(err.to_string())
    }
}
