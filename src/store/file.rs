//! Single-file saves.
//!
//! The file holds only the snapshot in its wire form, so it can be moved
//! between machines and loaded by any version that understands the format.

use crate::error::{ApiError, StorageError};
use crate::snapshot::SortState;
use crate::song::Song;
use crate::store::{SaveRecord, SaveStore};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the save file.
    pub fn load(&self) -> Result<SortState<Song>, ApiError> {
        let raw = std::fs::read(&self.path).map_err(StorageError::IoError)?;
        debug!(path = %self.path.display(), bytes = raw.len(), "Read save file");
        Ok(SortState::from_slice(&raw)?)
    }
}

impl SaveStore for JsonFileStore {
    fn save(&self, record: &SaveRecord) -> Result<String, StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = record.state.to_json_pretty()?;
        // write beside the target, then swap, so a failed save keeps the old file
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        info!(path = %self.path.display(), algorithm = %record.algorithm, "Saved progress to file");
        Ok(self.path.display().to_string())
    }
}
