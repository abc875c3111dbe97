//! Rankly: rank songs by answering one pairwise question at a time.
//!
//! Two suspendable sorting engines (binary insertion into a balanced tree,
//! and bottom-up merge sort) ask "is `left` better than `right`?" and can be
//! snapshotted to JSON between any two answers, then resumed later.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod snapshot;
pub mod song;
pub mod sort;
pub mod store;
pub mod tree;
