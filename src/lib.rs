//! This crate exposes a plain, unbalanced Binary Search Tree (BST)
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and may have up to two child `Node`s. The most important
//! invariants of this BST are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    value strictly less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Duplicates go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). This tree never
//! rebalances itself, so its shape depends entirely on insertion order:
//! inserting an already sorted sequence yields a "degenerate" chain whose
//! height is `N - 1`. [`BinarySearchTree::is_balanced`] reports whether a
//! given shape happens to be height-balanced.
//!
//! # Examples
//!
//! ```
//! use search_tree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! tree.insert(5).insert(3).insert(8).insert(1).insert(4).insert(7).insert(9);
//!
//! assert_eq!(tree.find(&4).map(|n| *n.val()), Some(4));
//! assert!(tree.find(&6).is_none());
//!
//! let sorted: Vec<_> = tree.dfs_in_order().copied().collect();
//! assert_eq!(sorted, [1, 3, 4, 5, 7, 8, 9]);
//!
//! let levels: Vec<_> = tree.bfs().copied().collect();
//! assert_eq!(levels, [5, 3, 8, 1, 4, 7, 9]);
//!
//! // Removing a node with two children promotes its in-order successor.
//! assert_eq!(tree.remove(&5), Some(5));
//! assert_eq!(tree.root().map(|n| *n.val()), Some(7));
//!
//! assert!(tree.is_balanced());
//! assert_eq!(tree.find_second_highest(), Some(&8));
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`BinarySearchTree`]. Trees are
//!   written as their pre-order sequence, which rebuilds the same shape.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iter;
mod node;
#[cfg(feature = "serde")]
mod serialize;
pub mod tree;


pub use node::Node;
pub use tree::BinarySearchTree;
