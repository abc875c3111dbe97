//! Flattening and rebuilding ordering trees.
//!
//! Rebuilding partitions by count, never by comparison: the in-order sequence
//! is the ranking, so it must come back out exactly as it went in.

use crate::tree::{BinaryTree, TreeNode};

impl<T> BinaryTree<T> {
    /// In-order traversal, consuming the tree.
    pub fn into_sequence(self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        collect_owned(self, &mut out);
        out
    }

    /// In-order traversal by clone.
    pub fn to_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len());
        collect_cloned(self, &mut out);
        out
    }

    /// Build a tree of minimum height whose in-order traversal is `items`.
    ///
    /// With `n` items left, the better subtree takes `(n - 1) / 2` of them, the
    /// next item is the entry and the worse subtree takes the rest.
    pub fn from_sequence(items: Vec<T>) -> Self {
        let n = items.len();
        let mut items = items.into_iter();
        partial_tree(&mut items, n)
    }

    /// Flatten and rebuild, keeping the in-order sequence.
    pub fn rebalance(self) -> Self {
        Self::from_sequence(self.into_sequence())
    }
}

fn collect_owned<T>(tree: BinaryTree<T>, out: &mut Vec<T>) {
    if let BinaryTree::Node(node) = tree {
        let TreeNode {
            entry,
            better,
            worse,
        } = *node;
        collect_owned(better, out);
        out.push(entry);
        collect_owned(worse, out);
    }
}

fn collect_cloned<T: Clone>(tree: &BinaryTree<T>, out: &mut Vec<T>) {
    if let BinaryTree::Node(node) = tree {
        collect_cloned(&node.better, out);
        out.push(node.entry.clone());
        collect_cloned(&node.worse, out);
    }
}

fn partial_tree<T, I: Iterator<Item = T>>(items: &mut I, n: usize) -> BinaryTree<T> {
    if n == 0 {
        return BinaryTree::Empty;
    }
    let better_size = (n - 1) / 2;
    let better = partial_tree(items, better_size);
    let Some(entry) = items.next() else {
        return better;
    };
    let worse = partial_tree(items, n - better_size - 1);
    BinaryTree::Node(Box::new(TreeNode {
        entry,
        better,
        worse,
    }))
}

/// Smallest height any binary tree holding `n` entries can have: ⌈log2(n+1)⌉.
pub fn minimum_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}
