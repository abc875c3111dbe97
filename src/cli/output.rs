//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, StorageError};
use tracing::debug;

/// Message shown for any save data that cannot be restored.
pub const CORRUPT_SAVE_MESSAGE: &str = "Error: Error deserializing save data. File corrupt?";

/// Map domain/service errors to a string for CLI output.
/// Corrupt saves get one generic message; the detail goes to the log.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Sort(sort) if sort.is_corrupt_save() => {
            debug!(error = %sort, "Save data rejected");
            CORRUPT_SAVE_MESSAGE.to_string()
        }
        ApiError::StorageError(StorageError::Serialization(err)) => {
            debug!(error = %err, "Stored session could not be decoded");
            CORRUPT_SAVE_MESSAGE.to_string()
        }
        other => format!("Error: {}", other),
    }
}
