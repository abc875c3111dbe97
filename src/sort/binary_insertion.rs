//! Balanced binary-insertion sort.
//!
//! Items are inserted one at a time into an ordering tree. Each insertion is a
//! walk from the root: one comparison per level, descending into the better or
//! worse child until an empty child is reached. After each placement the whole
//! tree is rebalanced, so a walk never costs more than ⌈log2(k+1)⌉ comparisons
//! once `k` items are placed.
//!
//! The walk is an explicit path of [`Side`]s from the root rather than a call
//! stack, so the engine can stop between any two comparisons.

use crate::error::SortError;
use crate::snapshot::{BinaryInsertionOrderState, SortState};
use crate::sort::{Algorithm, Comparison, SortEngine, Step};
use crate::tree::{BinaryTree, Side};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    /// Nothing asked yet.
    Fresh,
    /// Waiting on "is the front of `pending` better than the node at `path`?"
    Awaiting { path: Vec<Side> },
    Finished,
}

#[derive(Debug, Clone)]
pub struct BinaryInsertionSort<T> {
    tree: BinaryTree<T>,
    /// Items not yet placed. The front one is being inserted while a
    /// comparison is pending.
    pending: VecDeque<T>,
    phase: Phase,
}

impl<T: Clone> BinaryInsertionSort<T> {
    /// Start ranking `items` from scratch. The first item seeds the tree.
    pub fn new(items: Vec<T>) -> Result<Self, SortError> {
        if items.len() < 2 {
            return Err(SortError::TooFewItems { found: items.len() });
        }
        Self::resume(Vec::new(), items)
    }

    /// Continue from an already ranked prefix.
    ///
    /// `ordered` is the ranking so far, best first, and becomes a balanced
    /// tree. When it is empty the first of `to_order` seeds the tree instead.
    pub fn resume(ordered: Vec<T>, to_order: Vec<T>) -> Result<Self, SortError> {
        if to_order.is_empty() {
            return Err(SortError::NothingToResume);
        }
        let mut pending: VecDeque<T> = to_order.into();
        let tree = if ordered.is_empty() {
            match pending.pop_front() {
                Some(seed) => BinaryTree::leaf(seed),
                None => return Err(SortError::NothingToResume),
            }
        } else {
            BinaryTree::from_sequence(ordered)
        };
        Ok(Self {
            tree,
            pending,
            phase: Phase::Fresh,
        })
    }

    /// The tree built so far. Does not contain the item mid-insertion.
    pub fn tree(&self) -> &BinaryTree<T> {
        &self.tree
    }

    /// Items not yet placed, including the one being inserted.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Begin inserting the next pending item, or finish.
    fn start_insertion(&mut self) -> Step<T> {
        loop {
            let Some(candidate) = self.pending.front() else {
                self.phase = Phase::Finished;
                return Step::Done(std::mem::take(&mut self.tree).into_sequence());
            };
            match self.tree.root() {
                Some(root) => {
                    let comparison = Comparison {
                        left: candidate.clone(),
                        right: root.entry.clone(),
                    };
                    self.phase = Phase::Awaiting { path: Vec::new() };
                    return Step::Compare(comparison);
                }
                None => {
                    // only reachable with an empty tree; the candidate becomes the root
                    if let Some(seed) = self.pending.pop_front() {
                        self.tree = BinaryTree::leaf(seed);
                    }
                }
            }
        }
    }

    fn answer(&mut self, mut path: Vec<Side>, candidate_is_better: bool) -> Step<T> {
        let side = Side::from_answer(candidate_is_better);
        let Some(node) = self.tree.node_at_mut(&path) else {
            return self.start_insertion();
        };

        if node.child(side).is_empty() {
            if let Some(candidate) = self.pending.pop_front() {
                *node.child_mut(side) = BinaryTree::leaf(candidate);
            }
            self.tree = std::mem::take(&mut self.tree).rebalance();
            return self.start_insertion();
        }

        path.push(side);
        match (self.pending.front(), self.tree.node_at(&path)) {
            (Some(candidate), Some(next)) => {
                let comparison = Comparison {
                    left: candidate.clone(),
                    right: next.entry.clone(),
                };
                self.phase = Phase::Awaiting { path };
                Step::Compare(comparison)
            }
            _ => self.start_insertion(),
        }
    }
}

impl<T: Clone> SortEngine<T> for BinaryInsertionSort<T> {
    fn next(&mut self, answer: Option<bool>) -> Result<Step<T>, SortError> {
        match (std::mem::replace(&mut self.phase, Phase::Finished), answer) {
            (Phase::Fresh, None) => Ok(self.start_insertion()),
            (Phase::Fresh, Some(_)) => {
                self.phase = Phase::Fresh;
                Err(SortError::UnexpectedAnswer)
            }
            (Phase::Awaiting { path }, Some(answer)) => Ok(self.answer(path, answer)),
            (Phase::Awaiting { path }, None) => {
                self.phase = Phase::Awaiting { path };
                Err(SortError::AnswerRequired)
            }
            (Phase::Finished, _) => Err(SortError::AlreadyFinished),
        }
    }

    /// The ranking so far plus every unplaced item. The item mid-walk is
    /// re-inserted from the root on resume.
    fn snapshot(&self) -> Option<SortState<T>> {
        if self.phase == Phase::Finished {
            return None;
        }
        Some(SortState::BinaryInsertionOrder(BinaryInsertionOrderState {
            ordered: self.tree.to_sequence(),
            songs_to_order: self.pending.iter().cloned().collect(),
        }))
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::BinaryInsertion
    }
}
