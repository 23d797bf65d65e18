//! A height-balanced ordered set and the small persistence layer around it.
//!
//! The heart of the crate is [`avl_tree::AvlSet`], a self-balancing binary
//! search tree that keeps the heights of any node's two subtrees within one
//! of each other, so every operation is bounded by the logarithm of the
//! number of keys. The [`dataset`] module reads and writes the flat text
//! files the accompanying binary uses to persist integer datasets between
//! runs.

pub mod avl_tree;
pub mod dataset;
pub mod error;
