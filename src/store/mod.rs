//! Save Stores
//!
//! Where a session's snapshot goes when the user saves. The engines never
//! touch storage; the session driver hands a [`SaveRecord`] to a
//! [`SaveStore`] and stops.

pub mod file;
pub mod persistence;

pub use file::JsonFileStore;
pub use persistence::SledSessionStore;

use crate::error::StorageError;
use crate::snapshot::SortState;
use crate::song::Song;
use crate::sort::Algorithm;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved snapshot and what is known about the session that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub name: String,
    pub algorithm: Algorithm,
    pub saved_at: DateTime<Utc>,
    /// Comparisons answered so far, carried across resumes of a named session.
    pub comparisons: usize,
    pub state: SortState<Song>,
}

impl SaveRecord {
    pub fn new(name: impl Into<String>, state: SortState<Song>, comparisons: usize) -> Self {
        Self {
            name: name.into(),
            algorithm: state.algorithm(),
            saved_at: Utc::now(),
            comparisons,
            state,
        }
    }
}

/// Destination for saved progress.
pub trait SaveStore {
    /// Persist `record`, returning where it went.
    fn save(&self, record: &SaveRecord) -> Result<String, StorageError>;
}
