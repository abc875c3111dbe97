//! Ordering Tree
//!
//! A binary tree whose shape records pairwise judgments. Every item reachable
//! through a node's `better` child was judged better than that node's entry,
//! every item reachable through `worse` was judged worse. The in-order
//! traversal (better, entry, worse) is therefore the ranking discovered so far.

pub mod balance;

/// Which child of a node a walk descends into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Better,
    Worse,
}

impl Side {
    /// Side chosen by an answer to "is the candidate better than this entry?"
    pub fn from_answer(candidate_is_better: bool) -> Self {
        if candidate_is_better {
            Side::Better
        } else {
            Side::Worse
        }
    }
}

/// Binary tree with an explicit empty marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryTree<T> {
    Empty,
    Node(Box<TreeNode<T>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub entry: T,
    pub better: BinaryTree<T>,
    pub worse: BinaryTree<T>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        BinaryTree::Empty
    }
}

impl<T> BinaryTree<T> {
    /// A single node with two empty children.
    pub fn leaf(entry: T) -> Self {
        BinaryTree::Node(Box::new(TreeNode {
            entry,
            better: BinaryTree::Empty,
            worse: BinaryTree::Empty,
        }))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BinaryTree::Empty)
    }

    /// Number of entries in the tree.
    pub fn len(&self) -> usize {
        match self {
            BinaryTree::Empty => 0,
            BinaryTree::Node(node) => 1 + node.better.len() + node.worse.len(),
        }
    }

    /// Number of nodes on the longest root-to-leaf path (empty tree: 0).
    pub fn height(&self) -> usize {
        match self {
            BinaryTree::Empty => 0,
            BinaryTree::Node(node) => 1 + node.better.height().max(node.worse.height()),
        }
    }

    pub fn root(&self) -> Option<&TreeNode<T>> {
        match self {
            BinaryTree::Empty => None,
            BinaryTree::Node(node) => Some(node),
        }
    }

    /// Follow `path` from the root. Returns `None` if the path leaves the tree.
    pub fn node_at(&self, path: &[Side]) -> Option<&TreeNode<T>> {
        let mut current = self.root()?;
        for side in path {
            current = current.child(*side).root()?;
        }
        Some(current)
    }

    pub fn node_at_mut(&mut self, path: &[Side]) -> Option<&mut TreeNode<T>> {
        let mut current = match self {
            BinaryTree::Empty => return None,
            BinaryTree::Node(node) => node.as_mut(),
        };
        for side in path {
            current = match current.child_mut(*side) {
                BinaryTree::Empty => return None,
                BinaryTree::Node(node) => node.as_mut(),
            };
        }
        Some(current)
    }
}

impl<T> TreeNode<T> {
    pub fn child(&self, side: Side) -> &BinaryTree<T> {
        match side {
            Side::Better => &self.better,
            Side::Worse => &self.worse,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut BinaryTree<T> {
        match side {
            Side::Better => &mut self.better,
            Side::Worse => &mut self.worse,
        }
    }
}
