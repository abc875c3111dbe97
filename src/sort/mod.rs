//! Suspendable comparison sorts
//!
//! Both engines follow the same pull protocol. The first call to
//! [`SortEngine::next`] takes no answer; every later call carries the answer
//! to the comparison returned by the call before it. While a comparison is
//! pending, [`SortEngine::snapshot`] returns a plain value from which
//! [`crate::snapshot::restore`] rebuilds an engine that continues exactly
//! where this one stands.

pub mod binary_insertion;
pub mod merge;

pub use binary_insertion::BinaryInsertionSort;
pub use merge::{MergeCursor, MergeSort};

use crate::error::SortError;
use crate::snapshot::SortState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A pending question: is `left` better than `right`?
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<T> {
    pub left: T,
    pub right: T,
}

/// Result of driving an engine one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// Another answer is needed.
    Compare(Comparison<T>),
    /// Sorting finished; items are ordered best first.
    Done(Vec<T>),
}

impl<T> Step<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }
}

/// Contract shared by every suspendable sort.
pub trait SortEngine<T> {
    /// Advance to the next comparison or to the final ordering.
    ///
    /// `answer` is `true` when the left item of the pending comparison is
    /// better than the right one.
    fn next(&mut self, answer: Option<bool>) -> Result<Step<T>, SortError>;

    /// Snapshot of the current state, `None` once sorting has finished.
    fn snapshot(&self) -> Option<SortState<T>>;

    fn algorithm(&self) -> Algorithm;
}

/// Which engine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "binaryInsertionSort")]
    BinaryInsertion,
    #[serde(rename = "mergeSort")]
    Merge,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::BinaryInsertion
    }
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::BinaryInsertion => "binaryInsertionSort",
            Algorithm::Merge => "mergeSort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" | "binary-insertion" | "binaryInsertionSort" | "BinaryInsertionOrder" => {
                Ok(Algorithm::BinaryInsertion)
            }
            "merge" | "merge-sort" | "mergeSort" | "MergeOrderState" => Ok(Algorithm::Merge),
            other => Err(format!(
                "Unknown sorting algorithm '{}' (expected 'binary' or 'merge')",
                other
            )),
        }
    }
}

/// Either engine, chosen at runtime.
#[derive(Debug, Clone)]
pub enum Engine<T> {
    BinaryInsertion(BinaryInsertionSort<T>),
    Merge(MergeSort<T>),
}

impl<T: Clone> Engine<T> {
    /// Start a fresh ranking of `items` with the chosen algorithm.
    pub fn new(algorithm: Algorithm, items: Vec<T>) -> Result<Self, SortError> {
        match algorithm {
            Algorithm::BinaryInsertion => {
                Ok(Engine::BinaryInsertion(BinaryInsertionSort::new(items)?))
            }
            Algorithm::Merge => Ok(Engine::Merge(MergeSort::new(items)?)),
        }
    }
}

impl<T: Clone> SortEngine<T> for Engine<T> {
    fn next(&mut self, answer: Option<bool>) -> Result<Step<T>, SortError> {
        match self {
            Engine::BinaryInsertion(engine) => engine.next(answer),
            Engine::Merge(engine) => engine.next(answer),
        }
    }

    fn snapshot(&self) -> Option<SortState<T>> {
        match self {
            Engine::BinaryInsertion(engine) => engine.snapshot(),
            Engine::Merge(engine) => engine.snapshot(),
        }
    }

    fn algorithm(&self) -> Algorithm {
        match self {
            Engine::BinaryInsertion(_) => Algorithm::BinaryInsertion,
            Engine::Merge(_) => Algorithm::Merge,
        }
    }
}

/// Drive `engine` to completion, answering each comparison with `arbiter`.
///
/// Returns the final ordering and the number of comparisons answered.
pub fn run_to_completion<T, E, F>(
    engine: &mut E,
    mut arbiter: F,
) -> Result<(Vec<T>, usize), SortError>
where
    E: SortEngine<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let mut answered = 0;
    let mut step = engine.next(None)?;
    loop {
        match step {
            Step::Done(result) => return Ok((result, answered)),
            Step::Compare(Comparison { left, right }) => {
                let answer = arbiter(&left, &right);
                answered += 1;
                step = engine.next(Some(answer))?;
            }
        }
    }
}
