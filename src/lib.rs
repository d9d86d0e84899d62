//! This crate is the engine behind a Binary Search Tree (BST) visualizer. It
//! stores unique keys, supports inserting, searching for, and deleting them,
//! and remembers which nodes the last searches walked through so a renderer
//! can highlight that path.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). This tree does
//! nothing to limit its height so inserting keys in sorted order builds a tree
//! as tall as it has keys. BSTs also naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right subtree.
//! See [`Order`] for the three orders a [`Traversal`] can capture.
//!
//! ## Features
//!
//! - `tracing` (default): emit [`tracing`](https://docs.rs/tracing) events for
//!   inserts, deletes, searches, and traversals.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod traversal;
pub mod tree;

pub use error::TreeError;
pub use traversal::{Order, Traversal};
pub use tree::{Node, Tree};
