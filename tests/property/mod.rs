//! Property-based tests for ordering guarantees

mod tree_balance;
