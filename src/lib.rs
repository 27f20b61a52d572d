//! An unbalanced Binary Search Tree (BST) over `i32` keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Equal keys are never stored twice: inserting a key that is already present
//! is rejected. Searching for keys takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). This tree does no
//! rebalancing so inserting keys in sorted order produces a linked list with a
//! height of `N`.
//!
//! Besides the usual lookups the [`Tree`] supports the classic traversals
//! (in-order, pre-order, post-order and breadth-first), the lowest common
//! ancestor of two keys, and two text renderings: [`Tree::print`] draws the tree
//! sideways and [`Tree::print_by_level`] writes one line per level.
//!
//! # Examples
//!
//! ```
//! use intbst::Tree;
//!
//! let tree: Tree = [2, 1, 3].iter().copied().collect();
//!
//! let mut pre_order = Vec::new();
//! tree.pre_order(|key| pre_order.push(key));
//! assert_eq!(pre_order, vec![2, 1, 3]);
//!
//! assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(tree.height(), 2);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod node;
mod queue;
mod tree;

pub use node::Node;
pub use tree::{Iter, Tree, PRINT_LEVEL_SEPARATOR, PRINT_NODE};
