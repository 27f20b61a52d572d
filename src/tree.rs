//! A plain (unbalanced) Binary Search Tree over `i32` keys. The shape of the tree is whatever the
//! sequence of inserts and removes produces, so the height can be anywhere from `lg N` to `N`.
//!
//! # Examples
//!
//! ```
//! use intbst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(1).is_none());
//!
//! assert!(tree.insert(1));
//! assert!(tree.has(1));
//!
//! // Inserting the same key again is rejected.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // And remove it for good measure.
//! assert!(tree.remove(1));
//! assert!(!tree.has(1));
//! assert!(tree.is_empty());
//! ```

use std::io::{self, Write};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::node::Node;
use crate::queue::Queue;

/// Indentation written once per level of depth by [`Tree::print`].
pub const PRINT_LEVEL_SEPARATOR: &str = "       ";

/// Marker written right before each key by [`Tree::print`].
pub const PRINT_NODE: &str = "-[";

/// A Binary Search Tree. This can be used for inserting, finding, and removing keys. Every key
/// is stored at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree {
    root: Option<Box<Node>>,
    len: usize,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Generates a `Tree` holding just `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let tree = Tree::with_root(1);
    ///
    /// assert_eq!(tree.root().map(|n| n.key()), Some(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn with_root(key: i32) -> Self {
        Self {
            root: Some(Node::new_boxed(key)),
            len: 1,
        }
    }

    /// Builds a tree from a random permutation of the keys `1..=len`. A `len` below 1 gives an
    /// empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let tree = Tree::random(10);
    ///
    /// assert_eq!(tree.len(), 10);
    /// assert!(tree.iter().eq(1..=10));
    /// ```
    pub fn random(len: i32) -> Self {
        Self::random_with(len, &mut rand::thread_rng())
    }

    /// Like [`Tree::random`] but shuffles with the given `rng`, so a seeded generator always
    /// gives the same shape.
    pub fn random_with<R: Rng + ?Sized>(len: i32, rng: &mut R) -> Self {
        let mut keys: Vec<i32> = (1..=len).collect();
        keys.shuffle(rng);
        keys.into_iter().collect()
    }

    /// The root node, if the tree has any keys.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key` into the tree. Returns `true` if it was inserted and `false` if it was
    /// already present, in which case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: i32) -> bool {
        let inserted = Node::insert(&mut self.root, key);
        if inserted {
            self.len += 1;
        }
        trace!(key, inserted, len = self.len, "insert");

        inserted
    }

    /// Removes `key` from the tree. Returns `true` if it was removed and `false` if the tree
    /// never contained it, in which case the tree is left untouched.
    ///
    /// A node with two children takes the key of its in-order predecessor (the largest key in
    /// its left subtree) and the predecessor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let mut tree: Tree = [5, 3, 1, 4, 7, 9, 6].iter().copied().collect();
    ///
    /// assert!(tree.remove(5));
    /// assert_eq!(tree.root().map(|n| n.key()), Some(4));
    /// assert!(!tree.remove(5));
    /// ```
    pub fn remove(&mut self, key: i32) -> bool {
        let (root, removed) = Node::remove(self.root.take(), key);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        trace!(key, removed, len = self.len, "remove");

        removed
    }

    /// Finds the node holding `key`, if any.
    pub fn search(&self, key: i32) -> Option<&Node> {
        self.root().and_then(|root| root.find(key))
    }

    /// Whether `key` is in the tree.
    pub fn has(&self, key: i32) -> bool {
        self.search(key).is_some()
    }

    /// The node with the smallest key.
    pub fn min(&self) -> Option<&Node> {
        self.root().map(Node::leftmost)
    }

    /// The node with the largest key.
    pub fn max(&self) -> Option<&Node> {
        self.root().map(Node::rightmost)
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has
    /// a height of 0. This walks the whole tree on every call.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let balanced: Tree = [5, 3, 7, 1, 4, 6, 9].iter().copied().collect();
    /// assert_eq!(balanced.height(), 3);
    ///
    /// let linked_list: Tree = (0..5).collect();
    /// assert_eq!(linked_list.height(), 5);
    /// ```
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Lowest Common Ancestor: the deepest node that has both `a` and `b` in its subtree (a node
    /// is in its own subtree). Returns `None` when either key is missing from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let tree: Tree = [5, 2, 7, 6, 8].iter().copied().collect();
    ///
    /// assert_eq!(tree.lca(6, 8).map(|n| n.key()), Some(7));
    /// assert_eq!(tree.lca(2, 6).map(|n| n.key()), Some(5));
    /// assert!(tree.lca(2, 42).is_none());
    /// ```
    pub fn lca(&self, a: i32, b: i32) -> Option<&Node> {
        self.root()?.lowest_common_ancestor(a, b)
    }

    /// Calls `visit` with every key in ascending order.
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(i32),
    {
        in_order(self.root(), &mut visit);
    }

    /// Calls `visit` with every key, each node before its left then right subtree.
    pub fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(i32),
    {
        pre_order(self.root(), &mut visit);
    }

    /// Calls `visit` with every key, each node after its left then right subtree.
    pub fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(i32),
    {
        post_order(self.root(), &mut visit);
    }

    /// Calls `visit` with every key level by level from the root down, left to right within a
    /// level.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let tree: Tree = [5, 3, 1, 4, 7, 9, 6].iter().copied().collect();
    /// let mut keys = Vec::new();
    /// tree.breadth_first(|key| keys.push(key));
    ///
    /// assert_eq!(keys, vec![5, 3, 7, 1, 4, 6, 9]);
    /// ```
    pub fn breadth_first<F>(&self, mut visit: F)
    where
        F: FnMut(i32),
    {
        let mut queue = Queue::new();
        queue.extend(self.root());
        while let Some(node) = queue.pop() {
            visit(node.key);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// An iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root(), self.len)
    }

    /// Writes the tree sideways: the right subtree above each node and the left subtree below
    /// it. Each node is one line, indented by [`PRINT_LEVEL_SEPARATOR`] once per level of depth
    /// and prefixed with [`PRINT_NODE`]. An empty tree writes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::{Tree, PRINT_LEVEL_SEPARATOR};
    ///
    /// let tree: Tree = [2, 1, 3].iter().copied().collect();
    /// let mut out = Vec::new();
    /// tree.print(&mut out).unwrap();
    ///
    /// let expected = format!("{0}-[3\n-[2\n{0}-[1\n", PRINT_LEVEL_SEPARATOR);
    /// assert_eq!(String::from_utf8(out).unwrap(), expected);
    /// ```
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        print_node(out, self.root(), 0)
    }

    /// Writes one line per level of the tree with the keys of that level separated by spaces,
    /// left to right. An empty tree writes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let tree: Tree = [5, 3, 1, 4, 7, 9, 6].iter().copied().collect();
    /// let mut out = Vec::new();
    /// tree.print_by_level(&mut out).unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "5\n3 7\n1 4 6 9\n");
    /// ```
    pub fn print_by_level<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut queue = Queue::new();
        queue.extend(self.root());

        while !queue.is_empty() {
            // Everything queued right now is on this level; children pushed while it drains
            // belong to the next one.
            let mut remaining_in_level = queue.len();
            let mut separator = "";
            while remaining_in_level > 0 {
                let Some(node) = queue.pop() else {
                    break;
                };
                write!(out, "{}{}", separator, node.key)?;
                separator = " ";

                queue.extend(node.left());
                queue.extend(node.right());
                remaining_in_level -= 1;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

impl Drop for Tree {
    /// Takes the nodes apart one at a time. Letting each `Box` drop its children would recurse
    /// once per level and blow the stack on a degenerate tree.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Extend<i32> for Tree {
    /// Inserts each key in turn. Keys already in the tree are skipped.
    fn extend<I: IntoIterator<Item = i32>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over the keys of a [`Tree`]. Created by [`Tree::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    /// Nodes whose key hasn't been yielded yet but whose left subtree has been (or is about to
    /// be) fully visited.
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

fn in_order(node: Option<&Node>, visit: &mut impl FnMut(i32)) {
    if let Some(node) = node {
        in_order(node.left(), visit);
        visit(node.key);
        in_order(node.right(), visit);
    }
}

fn pre_order(node: Option<&Node>, visit: &mut impl FnMut(i32)) {
    if let Some(node) = node {
        visit(node.key);
        pre_order(node.left(), visit);
        pre_order(node.right(), visit);
    }
}

fn post_order(node: Option<&Node>, visit: &mut impl FnMut(i32)) {
    if let Some(node) = node {
        post_order(node.left(), visit);
        post_order(node.right(), visit);
        visit(node.key);
    }
}

fn print_node<W: Write>(out: &mut W, node: Option<&Node>, level: usize) -> io::Result<()> {
    if let Some(node) = node {
        print_node(out, node.right(), level + 1)?;
        writeln!(
            out,
            "{}{}{}",
            PRINT_LEVEL_SEPARATOR.repeat(level),
            PRINT_NODE,
            node.key
        )?;
        print_node(out, node.left(), level + 1)?;
    }

    Ok(())
}
