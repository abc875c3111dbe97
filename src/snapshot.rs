//! Snapshot layer
//!
//! A [`SortState`] is the only artifact a ranking session persists. It is a
//! plain value: engines hand out fresh copies and never alias their working
//! state into it. The wire form is JSON with a `type` discriminator:
//!
//! ```json
//! {"type": "binaryInsertionSort", "ordered": [...], "songsToOrder": [...]}
//! {"type": "mergeSort", "array": [...], "copy": [...], "low": 0, "mid": 1,
//!  "high": 3, "width": 2, "index": 1, "leftIndex": 1, "rightIndex": 2}
//! ```

use crate::error::SortError;
use crate::sort::{Algorithm, BinaryInsertionSort, Engine, MergeCursor, MergeSort};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SortState<T> {
    #[serde(rename = "binaryInsertionSort", alias = "BinaryInsertionOrder")]
    BinaryInsertionOrder(BinaryInsertionOrderState<T>),
    #[serde(rename = "mergeSort", alias = "MergeOrderState")]
    MergeOrder(MergeOrderState<T>),
}

/// Ranking so far plus everything not yet placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryInsertionOrderState<T> {
    pub ordered: Vec<T>,
    pub songs_to_order: Vec<T>,
}

/// Working array, the copy read by the current merge, and its cursors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeOrderState<T> {
    pub array: Vec<T>,
    pub copy: Vec<T>,
    pub low: usize,
    pub mid: usize,
    pub high: usize,
    pub width: usize,
    pub index: usize,
    pub left_index: usize,
    pub right_index: usize,
}

impl<T> MergeOrderState<T> {
    pub fn cursor(&self) -> MergeCursor {
        MergeCursor {
            low: self.low,
            mid: self.mid,
            high: self.high,
            width: self.width,
            index: self.index,
            left_index: self.left_index,
            right_index: self.right_index,
        }
    }
}

impl<T> SortState<T> {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            SortState::BinaryInsertionOrder(_) => Algorithm::BinaryInsertion,
            SortState::MergeOrder(_) => Algorithm::Merge,
        }
    }

    /// Number of distinct items being ranked.
    pub fn item_count(&self) -> usize {
        match self {
            SortState::BinaryInsertionOrder(state) => {
                state.ordered.len() + state.songs_to_order.len()
            }
            SortState::MergeOrder(state) => state.array.len(),
        }
    }
}

impl<T: Serialize> SortState<T> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<T: DeserializeOwned> SortState<T> {
    /// Parse a snapshot. Any structural problem, including an unknown `type`
    /// tag on the snapshot or on an item, is a [`SortError::MalformedSnapshot`].
    pub fn from_json(json: &str) -> Result<Self, SortError> {
        serde_json::from_str(json).map_err(|e| SortError::MalformedSnapshot(e.to_string()))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, SortError> {
        serde_json::from_slice(bytes).map_err(|e| SortError::MalformedSnapshot(e.to_string()))
    }
}

/// Rebuild the engine a snapshot was taken from.
///
/// The restored engine's first call to `next(None)` repeats the comparison
/// that was pending when the snapshot was taken.
pub fn restore<T: Clone>(state: SortState<T>) -> Result<Engine<T>, SortError> {
    match state {
        SortState::BinaryInsertionOrder(state) => Ok(Engine::BinaryInsertion(
            BinaryInsertionSort::resume(state.ordered, state.songs_to_order)?,
        )),
        SortState::MergeOrder(state) => {
            let cursor = state.cursor();
            Ok(Engine::Merge(MergeSort::resume(
                state.array,
                state.copy,
                cursor,
            )?))
        }
    }
}
