//! This crate exposes a plain, owned Binary Search Tree along with the word tracker built on
//! top of it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the
//! number of `Node`s on the longest path from the root `Node` to a leaf `Node`). The [`Tree`]
//! here does nothing to limit its height: adding values in sorted order makes every `Node`
//! the only child of the previous one, so the tree is as tall as it is large. Because of that,
//! nothing in this crate recurses on the shape of the tree. Traversals, height, clearing,
//! cloning and dropping all keep their own stack of pending `Node`s.
//!
//! BSTs naturally support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree. See [`Tree::inorder_iter`] along with
//! [`Tree::preorder_iter`] and [`Tree::postorder_iter`].
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Tree`] (as its preorder sequence).
//! - `tracker`: the [`tracker`] module, which records where words occur in text files.
//! - `cli`: the `wordtracker` binary. Enabled by default.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
mod node;
#[cfg(feature = "serde")]
mod persist;
mod tree;

#[cfg(feature = "tracker")]
pub mod tracker;

pub use error::{Error, Result};
pub use iter::Traversal;
pub use node::Node;
pub use tree::Tree;
