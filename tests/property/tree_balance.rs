//! Property-based tests for balanced rebuilds of the ordering tree

use proptest::prelude::*;
use rankly::tree::balance::minimum_height;
use rankly::tree::BinaryTree;

/// Rebuilding from a sequence keeps the order and uses the minimum height
#[test]
fn test_from_sequence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(any::<u32>(), 0..200), |items| {
            let tree = BinaryTree::from_sequence(items.clone());
            prop_assert_eq!(tree.len(), items.len());
            prop_assert_eq!(tree.height(), minimum_height(items.len()));
            prop_assert_eq!(tree.to_sequence(), items.clone());
            prop_assert_eq!(tree.rebalance().into_sequence(), items);
            Ok(())
        })
        .unwrap();
}

/// ⌈log2(n+1)⌉ against a direct computation
#[test]
fn test_minimum_height_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(0usize..1_000_000), |n| {
            let mut height = 0;
            while (1usize << height) - 1 < n {
                height += 1;
            }
            prop_assert_eq!(minimum_height(n), height);
            Ok(())
        })
        .unwrap();
}
