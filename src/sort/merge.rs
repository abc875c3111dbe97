//! Bottom-up merge sort.
//!
//! Passes run at widths 1, 2, 4, … while `width < len`. Each pass merges the
//! blocks `[low, low + width - 1]` and `[low + width, high]` for every
//! `low = 0, 2 * width, …` with `low + width < len`, where
//! `high = min(low + 2 * width - 1, len - 1)`. A merge reads from a copy taken
//! when it begins and writes `array[low..=high]` left to right.
//!
//! The whole position of the algorithm is the [`MergeCursor`], so stopping at a
//! comparison and restarting from a snapshot continue the same merge, the rest
//! of the same pass, then every later pass.

use crate::error::SortError;
use crate::snapshot::{MergeOrderState, SortState};
use crate::sort::{Algorithm, Comparison, SortEngine, Step};

/// Coordinates of the merge in progress.
///
/// `left_index` walks `[low, mid]` and `right_index` walks `[mid + 1, high]`
/// of the copy; `index` is the next slot of the array to fill. The merge is
/// complete once `index > high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCursor {
    pub low: usize,
    pub mid: usize,
    pub high: usize,
    pub width: usize,
    pub index: usize,
    pub left_index: usize,
    pub right_index: usize,
}

impl MergeCursor {
    /// Cursor at the start of the merge beginning at `low` in the pass at `width`.
    ///
    /// Callers guarantee `low + width < len`.
    fn begin(low: usize, width: usize, len: usize) -> Self {
        let mid = low + width - 1;
        let high = (low + 2 * width - 1).min(len - 1);
        Self {
            low,
            mid,
            high,
            width,
            index: low,
            left_index: low,
            right_index: mid + 1,
        }
    }

    /// Cursor of the merge after this one, moving on to the next pass when
    /// the current one is exhausted. `None` once every pass is done.
    fn following(&self, len: usize) -> Option<Self> {
        let mut width = self.width;
        let mut low = self.low + 2 * width;
        loop {
            if low + width < len {
                return Some(Self::begin(low, width, len));
            }
            width *= 2;
            if width >= len {
                return None;
            }
            low = 0;
        }
    }

    fn is_complete(&self) -> bool {
        self.index > self.high
    }

    /// Check that the cursor is one an uninterrupted run over `len` items
    /// could have produced.
    pub fn validate(&self, len: usize) -> Result<(), SortError> {
        let malformed = |msg: String| Err(SortError::MalformedSnapshot(msg));

        if len < 2 {
            return malformed(format!(
                "merge state needs at least two songs, got {}",
                len
            ));
        }
        if self.width == 0 || self.width >= len {
            return malformed(format!(
                "width {} out of range for {} songs",
                self.width, len
            ));
        }
        if self.low % (2 * self.width) != 0 || self.low + self.width >= len {
            return malformed(format!(
                "low {} is not the start of a merge at width {}",
                self.low, self.width
            ));
        }
        let expected = Self::begin(self.low, self.width, len);
        if self.mid != expected.mid || self.high != expected.high {
            return malformed(format!(
                "range low={} mid={} high={} does not match width {} (expected mid={} high={})",
                self.low, self.mid, self.high, self.width, expected.mid, expected.high
            ));
        }
        if self.left_index < self.low || self.left_index > self.mid + 1 {
            return malformed(format!(
                "leftIndex {} outside [{}, {}]",
                self.left_index,
                self.low,
                self.mid + 1
            ));
        }
        if self.right_index < self.mid + 1 || self.right_index > self.high + 1 {
            return malformed(format!(
                "rightIndex {} outside [{}, {}]",
                self.right_index,
                self.mid + 1,
                self.high + 1
            ));
        }
        let consumed = (self.left_index - self.low) + (self.right_index - self.mid - 1);
        if self.index != self.low + consumed {
            return malformed(format!(
                "index {} does not match consumed elements (expected {})",
                self.index,
                self.low + consumed
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fresh,
    Awaiting,
    Finished,
}

#[derive(Debug, Clone)]
pub struct MergeSort<T> {
    array: Vec<T>,
    /// Copy of `array` taken when the current merge began.
    copy: Vec<T>,
    cursor: MergeCursor,
    phase: Phase,
}

impl<T: Clone> MergeSort<T> {
    pub fn new(items: Vec<T>) -> Result<Self, SortError> {
        if items.len() < 2 {
            return Err(SortError::TooFewItems { found: items.len() });
        }
        let cursor = MergeCursor::begin(0, 1, items.len());
        Ok(Self {
            copy: items.clone(),
            array: items,
            cursor,
            phase: Phase::Fresh,
        })
    }

    /// Rebuild an engine stopped inside the merge described by `cursor`.
    pub fn resume(array: Vec<T>, copy: Vec<T>, cursor: MergeCursor) -> Result<Self, SortError> {
        if array.len() != copy.len() {
            return Err(SortError::MalformedSnapshot(format!(
                "array has {} songs but copy has {}",
                array.len(),
                copy.len()
            )));
        }
        cursor.validate(array.len())?;
        Ok(Self {
            array,
            copy,
            cursor,
            phase: Phase::Fresh,
        })
    }

    pub fn cursor(&self) -> MergeCursor {
        self.cursor
    }

    /// Fill slots until a comparison is needed or every pass is done.
    fn advance(&mut self) -> Step<T> {
        loop {
            if self.cursor.is_complete() {
                match self.cursor.following(self.array.len()) {
                    Some(next) => {
                        self.copy.clone_from(&self.array);
                        self.cursor = next;
                    }
                    None => {
                        self.phase = Phase::Finished;
                        self.copy.clear();
                        return Step::Done(std::mem::take(&mut self.array));
                    }
                }
                continue;
            }

            let c = &mut self.cursor;
            if c.left_index > c.mid {
                self.array[c.index] = self.copy[c.right_index].clone();
                c.right_index += 1;
                c.index += 1;
            } else if c.right_index > c.high {
                self.array[c.index] = self.copy[c.left_index].clone();
                c.left_index += 1;
                c.index += 1;
            } else {
                self.phase = Phase::Awaiting;
                return Step::Compare(Comparison {
                    left: self.copy[c.left_index].clone(),
                    right: self.copy[c.right_index].clone(),
                });
            }
        }
    }

    /// `false` means the right element wins; equal is not modelled.
    fn answer(&mut self, left_is_better: bool) -> Step<T> {
        let c = &mut self.cursor;
        if left_is_better {
            self.array[c.index] = self.copy[c.left_index].clone();
            c.left_index += 1;
        } else {
            self.array[c.index] = self.copy[c.right_index].clone();
            c.right_index += 1;
        }
        c.index += 1;
        self.advance()
    }
}

impl<T: Clone> SortEngine<T> for MergeSort<T> {
    fn next(&mut self, answer: Option<bool>) -> Result<Step<T>, SortError> {
        match (self.phase, answer) {
            (Phase::Fresh, None) => Ok(self.advance()),
            (Phase::Fresh, Some(_)) => Err(SortError::UnexpectedAnswer),
            (Phase::Awaiting, Some(answer)) => Ok(self.answer(answer)),
            (Phase::Awaiting, None) => Err(SortError::AnswerRequired),
            (Phase::Finished, _) => Err(SortError::AlreadyFinished),
        }
    }

    fn snapshot(&self) -> Option<SortState<T>> {
        if self.phase == Phase::Finished {
            return None;
        }
        let c = self.cursor;
        Some(SortState::MergeOrder(MergeOrderState {
            array: self.array.clone(),
            copy: self.copy.clone(),
            low: c.low,
            mid: c.mid,
            high: c.high,
            width: c.width,
            index: c.index,
            left_index: c.left_index,
            right_index: c.right_index,
        }))
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Merge
    }
}
