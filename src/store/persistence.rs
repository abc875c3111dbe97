//! Sled-backed named saves.

use crate::error::StorageError;
use crate::store::{SaveRecord, SaveStore};
use sled::{Db, Tree};
use std::path::Path;
use tracing::{debug, info};

const TREE_SAVES: &str = "saves";

/// Named saves kept in a sled database, one JSON record per name.
#[derive(Clone)]
pub struct SledSessionStore {
    db: Db,
    saves: Tree,
}

impl SledSessionStore {
    /// Open (or create) the database at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        Self::from_db(db)
    }

    pub fn from_db(db: Db) -> Result<Self, StorageError> {
        let saves = db.open_tree(TREE_SAVES)?;
        Ok(Self { db, saves })
    }

    pub fn put(&self, record: &SaveRecord) -> Result<(), StorageError> {
        let value = serde_json::to_vec(record)?;
        self.saves.insert(record.name.as_bytes(), value)?;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Option<SaveRecord>, StorageError> {
        let Some(raw) = self.saves.get(name.as_bytes())? else {
            return Ok(None);
        };
        let record = serde_json::from_slice(&raw)?;
        Ok(Some(record))
    }

    /// Like [`get`](Self::get), but a missing save is an error.
    pub fn require(&self, name: &str) -> Result<SaveRecord, StorageError> {
        self.get(name)?
            .ok_or_else(|| StorageError::SaveNotFound(name.to_string()))
    }

    /// Every save, most recent first.
    pub fn list(&self) -> Result<Vec<SaveRecord>, StorageError> {
        let mut out = Vec::new();
        for item in self.saves.iter() {
            let (_, value) = item?;
            let record: SaveRecord = serde_json::from_slice(&value)?;
            out.push(record);
        }
        out.sort_by_key(|r| std::cmp::Reverse(r.saved_at));
        Ok(out)
    }

    /// Remove a save. Returns whether it existed.
    pub fn remove(&self, name: &str) -> Result<bool, StorageError> {
        let existed = self.saves.remove(name.as_bytes())?.is_some();
        debug!(name = %name, existed, "Removed save");
        Ok(existed)
    }

    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }
}

impl SaveStore for SledSessionStore {
    fn save(&self, record: &SaveRecord) -> Result<String, StorageError> {
        self.put(record)?;
        self.flush()?;
        info!(
            name = %record.name,
            algorithm = %record.algorithm,
            "Saved progress to session store"
        );
        Ok(format!("session '{}'", record.name))
    }
}
