//! The building block of a [`Tree`][crate::Tree].

use std::cmp::Ordering;

use tracing::debug;

/// A single key in a [`Tree`][crate::Tree] along with its two (optional) subtrees.
///
/// Each child is exclusively owned by its parent so a tree is a plain ownership chain from the
/// root downwards. Links can only be rewired by the tree itself; from the outside a `Node` is
/// read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub(crate) key: i32,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    /// Construct a new `Node` with the given `key` and no children.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Node;
    ///
    /// let node = Node::new(7);
    ///
    /// assert_eq!(node.key(), 7);
    /// assert!(node.is_leaf());
    /// ```
    pub fn new(key: i32) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    pub(crate) fn new_boxed(key: i32) -> Box<Self> {
        Box::new(Self::new(key))
    }

    /// The key stored in this node.
    pub fn key(&self) -> i32 {
        self.key
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Attaches `key` below the subtree hanging off `link`, walking down with a cursor instead of
    /// recursing so degenerate trees of any height are fine. Returns `false` without touching the
    /// subtree if the key is already present.
    pub(crate) fn insert(mut link: &mut Option<Box<Self>>, key: i32) -> bool {
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Self::new_boxed(key));
        true
    }

    pub(crate) fn find(&self, key: i32) -> Option<&Self> {
        let mut current = self;
        loop {
            current = match key.cmp(&current.key) {
                Ordering::Less => current.left()?,
                Ordering::Equal => return Some(current),
                Ordering::Greater => current.right()?,
            };
        }
    }

    /// Follows left links to the smallest key in this subtree.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// Follows right links to the largest key in this subtree.
    pub(crate) fn rightmost(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }

    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// height of 1.
    pub(crate) fn height(&self) -> usize {
        let left_height = self.left().map_or(0, Self::height);
        let right_height = self.right().map_or(0, Self::height);
        left_height.max(right_height) + 1
    }

    /// Finds the deepest node that has both `a` and `b` in its subtree.
    ///
    /// Descends while both keys fall on the same side. At the split point both keys still have to
    /// be looked up: a key that isn't in the tree has no ancestor at all.
    pub(crate) fn lowest_common_ancestor(&self, a: i32, b: i32) -> Option<&Self> {
        if self.key > a && self.key > b {
            self.left()?.lowest_common_ancestor(a, b)
        } else if self.key < a && self.key < b {
            self.right()?.lowest_common_ancestor(a, b)
        } else if self.find(a).is_some() && self.find(b).is_some() {
            Some(self)
        } else {
            None
        }
    }

    /// Removes `key` from the subtree rooted at `node`.
    ///
    /// Returns the new root of the subtree, which the caller must store back in the link it
    /// passed in, and whether anything was removed. Links are reattached on the way back up so
    /// no parent pointers are needed.
    pub(crate) fn remove(node: Option<Box<Self>>, key: i32) -> (Option<Box<Self>>, bool) {
        let Some(mut node) = node else {
            return (None, false);
        };

        match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, removed) = Self::remove(node.left.take(), key);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove(node.right.take(), key);
                node.right = right;
                (Some(node), removed)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => {
                    debug!(key, "removing leaf node");
                    (None, true)
                }
                (None, Some(child)) | (Some(child), None) => {
                    debug!(key, replacement = child.key, "splicing out node with one child");
                    (Some(child), true)
                }
                // With two children we promote this node's predecessor, the largest key in its
                // left subtree. The predecessor has no right child so removing it below can't
                // land in this arm again.
                (Some(left), Some(right)) => {
                    let predecessor = left.rightmost().key;
                    debug!(key, predecessor, "replacing node with its predecessor");

                    let (left, removed) = Self::remove(Some(left), predecessor);
                    node.key = predecessor;
                    node.left = left;
                    node.right = Some(right);
                    (Some(node), removed)
                }
            },
        }
    }
}
