//! Borrowing traversals over a [`BinarySearchTree`][crate::BinarySearchTree].
//!
//! Every traversal is lazy and keeps its own explicit stack or queue, so walking a degenerate
//! (chain shaped) tree never recurses. A traversal only borrows the tree; calling the same
//! method again starts a fresh traversal.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

/// Depth-first, pre-order traversal: a node, then its left subtree, then its right subtree.
///
/// Created by [`BinarySearchTree::dfs_pre_order`][crate::BinarySearchTree::dfs_pre_order].
#[derive(Debug)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes first so that left is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.val)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// Depth-first, in-order traversal: a node's left subtree, then the node, then its right
/// subtree. For a binary search tree this yields values in non-decreasing order.
///
/// Created by [`BinarySearchTree::dfs_in_order`][crate::BinarySearchTree::dfs_in_order].
#[derive(Debug)]
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree is being visited, deepest last.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.val)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// Depth-first, post-order traversal: a node's left subtree, then its right subtree, then the
/// node itself.
///
/// Created by [`BinarySearchTree::dfs_post_order`][crate::BinarySearchTree::dfs_post_order].
#[derive(Debug)]
pub struct PostOrder<'a, T> {
    /// Pending nodes, each flagged with whether its children have already been pushed.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.val);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
        None
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

/// Breadth-first (level-order) traversal, left to right within each level.
///
/// Created by [`BinarySearchTree::bfs`][crate::BinarySearchTree::bfs].
#[derive(Debug)]
pub struct Bfs<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Bfs<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        // An empty tree seeds nothing rather than a missing root.
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Bfs<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(&node.val)
    }
}

impl<T> FusedIterator for Bfs<'_, T> {}
