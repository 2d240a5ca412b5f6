//! A mutable, unbalanced BST. Values are placed purely by comparison and the tree never
//! rotates, so its shape is a function of insertion order.
//!
//! # Examples
//!
//! ```
//! use search_tree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! tree.insert(1);
//! assert_eq!(tree.find(&1).map(|n| *n.val()), Some(1));
//!
//! // Duplicates are kept and placed to the right.
//! tree.insert(1);
//! assert_eq!(tree.dfs_pre_order().count(), 2);
//!
//! // Removing a value returns it.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.remove(&1), None);
//! assert!(tree.is_empty());
//! ```

use std::fmt;

use crate::iter::{Bfs, InOrder, PostOrder, PreOrder};
use crate::node::{Link, Node};

/// An unbalanced Binary Search Tree. Values that compare less than a node go to its left,
/// everything else (including duplicates) goes to its right.
pub struct BinarySearchTree<T> {
    root: Link<T>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    // Dropping a `Box<Node>` recursively would overflow the stack on a long enough chain, so
    // detach every node's children before it is dropped.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for BinarySearchTree<T>
where
    T: Clone + Ord,
{
    // Re-inserting the pre-order sequence rebuilds the exact same shape without recursing.
    fn clone(&self) -> Self {
        self.dfs_pre_order().cloned().collect()
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    // Nested `Node`s would be rendered recursively, so show the pre-order sequence instead. It
    // is enough to rebuild the shape.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("pre_order", &PreOrderValues(self))
            .finish()
    }
}

struct PreOrderValues<'a, T>(&'a BinarySearchTree<T>);

impl<T> fmt::Debug for PreOrderValues<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.dfs_pre_order()).finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generate a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Generate a tree that takes ownership of an already built `root`. The caller is
    /// responsible for `root` respecting the ordering invariant; this is only checked in debug
    /// builds.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::{BinarySearchTree, Node};
    ///
    /// let root = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
    /// let tree = BinarySearchTree::with_root(root);
    ///
    /// assert_eq!(tree.bfs().copied().collect::<Vec<_>>(), [2, 1, 3]);
    /// ```
    pub fn with_root(root: Node<T>) -> Self
    where
        T: Ord,
    {
        if cfg!(debug_assertions) {
            assert!(root.is_ordered(), "root violates the ordering invariant");
        }
        tracing::trace!("adopting a caller-built root");
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// The root node of the tree, if there is one.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `val` as a new leaf, walking down from the root without recursing. Returns the
    /// tree so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(2).insert(1).insert(3);
    ///
    /// assert_eq!(tree.dfs_pre_order().copied().collect::<Vec<_>>(), [2, 1, 3]);
    /// ```
    pub fn insert(&mut self, val: T) -> &mut Self
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if val < node.val {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(val)));
        self
    }

    /// Inserts `val` as a new leaf by recursing down from the root. Builds exactly the same
    /// shape as [`insert`](Self::insert) but uses stack space proportional to the tree's height.
    pub fn insert_recursive(&mut self, val: T) -> &mut Self
    where
        T: Ord,
    {
        match self.root.as_deref_mut() {
            Some(root) => root.insert(val),
            None => self.root = Some(Box::new(Node::new(val))),
        }
        self
    }

    /// Potentially finds the node holding `val`, walking down from the root without
    /// recursing. If no node holds `val`, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1).map(|n| *n.val()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, val: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match val.cmp(&node.val) {
                std::cmp::Ordering::Less => node.left(),
                std::cmp::Ordering::Equal => return Some(node),
                std::cmp::Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Same as [`find`](Self::find) but recursing one level per call.
    pub fn find_recursive(&self, val: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root().and_then(|n| n.find(val))
    }

    /// Whether any node holds `val`.
    pub fn contains(&self, val: &T) -> bool
    where
        T: Ord,
    {
        self.find(val).is_some()
    }

    /// Visits every value depth first: each node before its left subtree, then its right
    /// subtree.
    pub fn dfs_pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    /// Visits every value depth first: each node's left subtree, then the node, then its right
    /// subtree. The values come out sorted.
    pub fn dfs_in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Visits every value depth first: each node's subtrees (left, then right) before the node.
    pub fn dfs_post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root())
    }

    /// Visits every value level by level, left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// assert_eq!(tree.bfs().copied().collect::<Vec<_>>(), [5, 3, 8, 1, 4, 7, 9]);
    ///
    /// let empty = BinarySearchTree::<i32>::new();
    /// assert_eq!(empty.bfs().next(), None);
    /// ```
    pub fn bfs(&self) -> Bfs<'_, T> {
        Bfs::new(self.root())
    }

    /// Removes a node holding `val` and returns the removed value. If the tree does not hold
    /// `val`, nothing happens and `None` is returned.
    ///
    /// A node with two children is not unlinked itself: it takes over the value of its in-order
    /// successor (the leftmost node of its right subtree) and that successor is unlinked
    /// instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.root().map(|n| *n.val()), Some(7));
    /// assert_eq!(tree.remove(&5), None);
    /// ```
    pub fn remove(&mut self, val: &T) -> Option<T>
    where
        T: Ord,
    {
        let removed = Node::remove(&mut self.root, val);

        if cfg!(debug_assertions) {
            if let Some(root) = self.root() {
                assert!(root.is_ordered());
            }
        }
        removed
    }

    /// Whether, at every node, the heights of the left and right subtrees differ by at most one.
    /// An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::BinarySearchTree;
    ///
    /// let chain: BinarySearchTree<i32> = (1..=5).collect();
    /// assert!(!chain.is_balanced());
    ///
    /// let full: BinarySearchTree<i32> = [3, 1, 5, 0, 2, 4, 6].into_iter().collect();
    /// assert!(full.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        Node::balanced_height(&self.root).is_some()
    }

    /// The number of edges on the longest path from the root to a leaf, or `None` for an empty
    /// tree.
    pub fn height(&self) -> Option<usize> {
        let root = self.root()?;
        let mut height = 0;
        let mut level = vec![root];
        loop {
            level = level
                .into_iter()
                .flat_map(|n| n.left().into_iter().chain(n.right()))
                .collect();
            if level.is_empty() {
                return Some(height);
            }
            height += 1;
        }
    }

    /// The value that would come second to last in an in-order traversal, or `None` if the
    /// tree has fewer than two nodes. Duplicates count as separate nodes, so a tree holding
    /// `[5, 5]` reports `5`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// assert_eq!(tree.find_second_highest(), Some(&8));
    ///
    /// let lonely: BinarySearchTree<i32> = [5].into_iter().collect();
    /// assert_eq!(lonely.find_second_highest(), None);
    /// ```
    pub fn find_second_highest(&self) -> Option<&T> {
        let mut max = self.root()?;
        let mut parent = None;
        while let Some(right) = max.right() {
            parent = Some(max);
            max = right;
        }

        match max.left() {
            Some(left) => Some(&left.rightmost().val),
            None => parent.map(|p| &p.val),
        }
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.insert(val);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.dfs_in_order()
    }
}
