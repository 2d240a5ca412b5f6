use std::cmp::Ordering;

/// An owning edge from a parent (or the tree itself) to a child.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single entry in a [`BinarySearchTree`][crate::BinarySearchTree]. A `Node` owns both of its
/// children. There are no parent pointers; operations that care about a node's parent track it
/// while descending.
///
/// The derived `Clone`, `Debug` and `PartialEq` impls, and dropping a `Node` that is not owned by
/// a tree, all recurse once per level of the subtree. On very deep (chain shaped) subtrees they
/// can exhaust the stack; [`BinarySearchTree`][crate::BinarySearchTree]'s own `Clone`, `Debug`
/// and `Drop` do not recurse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) val: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a new leaf `Node` holding `val`.
    pub fn new(val: T) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Creates a `Node` with the given children. This is mostly useful for building a specific
    /// tree shape by hand to pass to
    /// [`BinarySearchTree::with_root`][crate::BinarySearchTree::with_root]. It is up to the
    /// caller to respect the ordering invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Node;
    ///
    /// let node = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
    ///
    /// assert_eq!(node.left().map(Node::val), Some(&1));
    /// assert_eq!(node.right().map(Node::val), Some(&3));
    /// ```
    pub fn with_children(val: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            val,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The value stored in this node.
    pub fn val(&self) -> &T {
        &self.val
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Attaches `val` as a new leaf somewhere below this node, recursing one level per call.
    pub(crate) fn insert(&mut self, val: T)
    where
        T: Ord,
    {
        let child = if val < self.val {
            &mut self.left
        } else {
            &mut self.right
        };
        match child {
            Some(node) => node.insert(val),
            None => *child = Some(Box::new(Self::new(val))),
        }
    }

    pub(crate) fn find(&self, val: &T) -> Option<&Self>
    where
        T: Ord,
    {
        match val.cmp(&self.val) {
            Ordering::Less => self.left().and_then(|n| n.find(val)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.find(val)),
        }
    }

    /// Removes the node holding `val` from the subtree owned by `link` and returns its value.
    /// `link` is the parent's edge to the subtree (or the tree's root), which is all we need to
    /// splice a node out.
    pub(crate) fn remove(link: &mut Link<T>, val: &T) -> Option<T>
    where
        T: Ord,
    {
        let Some(node) = link.as_deref_mut() else {
            tracing::trace!("remove: value not found");
            return None;
        };
        match val.cmp(&node.val) {
            Ordering::Less => Self::remove(&mut node.left, val),
            Ordering::Greater => Self::remove(&mut node.right, val),
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => {
                    tracing::trace!(case = "leaf", "remove: detaching node");
                    link.take().map(|removed| removed.val)
                }
                (Some(child), None) | (None, Some(child)) => {
                    tracing::trace!(case = "one child", "remove: splicing child into parent");
                    link.replace(child).map(|removed| removed.val)
                }
                (Some(left), Some(right)) => {
                    tracing::trace!(case = "two children", "remove: promoting in-order successor");
                    // The successor has no left child, so detaching it is always one of the two
                    // cases above.
                    let (rest, successor) = right.detach_leftmost();
                    node.left = Some(left);
                    node.right = rest;
                    Some(std::mem::replace(&mut node.val, successor))
                }
            },
        }
    }

    /// Detaches the leftmost node of this subtree. Returns what is left of the subtree and the
    /// detached node's value.
    fn detach_leftmost(mut self: Box<Self>) -> (Link<T>, T) {
        match self.left.take() {
            Some(left) => {
                let (rest, min) = left.detach_leftmost();
                self.left = rest;
                (Some(self), min)
            }
            None => {
                let rest = self.right.take();
                (rest, self.val)
            }
        }
    }

    /// The node holding the largest value in this subtree.
    pub(crate) fn rightmost(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }

    /// Computes the height of the subtree in `link` in one bottom-up pass. An empty subtree has
    /// height -1 and a leaf has height 0. Returns `None` as soon as any node's children differ
    /// in height by more than one.
    ///
    /// Walks in post-order with an explicit stack so degenerate chains don't recurse.
    pub(crate) fn balanced_height(link: &Link<T>) -> Option<isize> {
        // Pending nodes, each flagged with whether its children have already been pushed.
        let mut pending: Vec<(&Self, bool)> =
            link.as_deref().map(|n| (n, false)).into_iter().collect();
        // Heights of finished subtrees. A node's left subtree finishes before its right one.
        let mut heights: Vec<isize> = Vec::new();

        while let Some((node, expanded)) = pending.pop() {
            if !expanded {
                pending.push((node, true));
                pending.extend(node.right().map(|n| (n, false)));
                pending.extend(node.left().map(|n| (n, false)));
                continue;
            }

            let right_height = match node.right {
                Some(_) => heights.pop()?,
                None => -1,
            };
            let left_height = match node.left {
                Some(_) => heights.pop()?,
                None => -1,
            };
            if left_height.abs_diff(right_height) > 1 {
                return None;
            }
            heights.push(left_height.max(right_height) + 1);
        }

        Some(heights.pop().unwrap_or(-1))
    }

    /// Whether every node in this subtree respects the ordering invariant: everything in a left
    /// subtree is strictly less than its ancestor and everything in a right subtree is greater
    /// or equal. Only used for debug assertions.
    pub(crate) fn is_ordered(&self) -> bool
    where
        T: Ord,
    {
        // Each pending node carries the inclusive lower and exclusive upper bound its ancestors
        // put on it.
        let mut pending: Vec<(&Self, Option<&T>, Option<&T>)> = vec![(self, None, None)];
        while let Some((node, lower, upper)) = pending.pop() {
            if lower.is_some_and(|lower| node.val < *lower)
                || upper.is_some_and(|upper| node.val >= *upper)
            {
                return false;
            }
            pending.extend(node.left().map(|left| (left, lower, Some(&node.val))));
            pending.extend(node.right().map(|right| (right, Some(&node.val), upper)));
        }
        true
    }
}
