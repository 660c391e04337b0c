//! A balanced-on-demand BST over ordered, unique values.
//!
//! [`Tree::build`] constructs a height-balanced tree from any collection and
//! [`Tree::rebalance`] restores that shape after arbitrary mutation. The
//! point mutations [`Tree::insert`] and [`Tree::delete`] do *not* rebalance,
//! matching the classic teaching formulation of the structure.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::tree::Tree;
//!
//! let mut tree = Tree::build([5, 3, 8, 3, 1]);
//!
//! // Duplicates are discarded and the values are stored in order.
//! let mut values = Vec::new();
//! tree.in_order_for_each(|node| values.push(*node.value()));
//! assert_eq!(values, [1, 3, 5, 8]);
//! assert!(tree.is_balanced());
//!
//! // Point mutations leave the surrounding structure alone.
//! tree.insert(4);
//! tree.delete(&8);
//! assert!(tree.find(&8).is_none());
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, Write};

use crate::error::TreeResult;

/// An owned, possibly empty subtree. Mutating operations take the slot by
/// value and hand back the (possibly replaced) subtree for the parent to
/// reattach.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree over ordered, unique values. Searching, point
/// insertion, and point deletion take `O(height)`; the height is only
/// guaranteed to be logarithmic immediately after [`build`][Tree::build] or
/// [`rebalance`][Tree::rebalance].
#[derive(Debug)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a height-balanced tree holding the distinct values of the
    /// given collection.
    ///
    /// The input is sorted and deduplicated, then split recursively at the
    /// midpoint (`len / 2`): the midpoint value becomes the subtree root,
    /// the lower half its left subtree, and the upper half its right
    /// subtree. The resulting tree has height `⌊lg N⌋` for `N` distinct
    /// values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::build([5, 3, 8, 3, 1]);
    ///
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.depth(&5), Some(0)); // 5 is the root
    /// assert_eq!(tree.depth(&8), Some(1));
    /// assert_eq!(tree.depth(&1), Some(2));
    /// ```
    pub fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();

        let len = values.len();
        Self {
            root: Node::from_sorted_run(&mut values.into_iter(), len),
        }
    }

    /// Inserts the given value into the tree at the open slot its ordering
    /// dictates. Inserting a value that is already present is a no-op.
    ///
    /// No rebalancing is performed: a run of skewed inserts can degrade the
    /// tree toward a linked list, and restoring balance is the caller's
    /// responsibility via [`rebalance`][Tree::rebalance].
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// assert!(tree.find(&1).is_some());
    ///
    /// // Duplicates are quietly discarded.
    /// tree.insert(1);
    /// let mut count = 0;
    /// tree.in_order_for_each(|_| count += 1);
    /// assert_eq!(count, 1);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let root = self.root.take();
        self.root = Node::insert_into(root, value);
    }

    /// Deletes the node holding the given value, if present. Deleting a
    /// value that is not in the tree is a no-op.
    ///
    /// A leaf is removed outright and a node with one child is replaced by
    /// that child. A node with two children takes on the value of its
    /// in-order successor (the minimum of its right subtree), and the
    /// successor's node is unlinked from the right subtree. Node identity is
    /// therefore not preserved across a two-child delete.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let mut tree = Tree::build([5, 3, 8, 3, 1]);
    ///
    /// // 5 has two children, so it is replaced by its successor, 8.
    /// tree.delete(&5);
    ///
    /// let mut values = Vec::new();
    /// tree.in_order_for_each(|node| values.push(*node.value()));
    /// assert_eq!(values, [1, 3, 8]);
    /// assert!(tree.find(&5).is_none());
    /// ```
    pub fn delete(&mut self, value: &T)
    where
        T: Ord,
    {
        let root = self.root.take();
        self.root = Node::delete_from(root, value);
    }

    /// Potentially finds the node holding the given value. If no node holds
    /// it, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::build([1, 3, 5, 8]);
    ///
    /// assert_eq!(tree.find(&3).map(|node| *node.value()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root.as_deref().and_then(|n| n.find(value))
    }

    /// Gets the height of the node holding the given value: the number of
    /// edges on the longest downward path from that node to a leaf in its
    /// own subtree. A leaf has height 0. Returns `None` if the value is not
    /// in the tree, which is distinct from a present leaf's `Some(0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::build([1, 3, 5, 8]);
    ///
    /// assert_eq!(tree.height(&5), Some(2)); // the root
    /// assert_eq!(tree.height(&8), Some(0)); // a leaf
    /// assert_eq!(tree.height(&42), None);
    /// ```
    pub fn height(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.find(value).map(|node| node.edge_height() as usize)
    }

    /// Gets the depth of the node holding the given value: the number of
    /// edges from the root down to it. Returns `None` if the value is not in
    /// the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::build([1, 3, 5, 8]);
    ///
    /// assert_eq!(tree.depth(&5), Some(0));
    /// assert_eq!(tree.depth(&1), Some(2));
    /// assert_eq!(tree.depth(&42), None);
    /// ```
    pub fn depth(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        let mut edges = 0;
        while let Some(node) = current {
            match value.cmp(node.value()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(edges),
            }
            edges += 1;
        }
        None
    }

    /// Reports whether every node's left and right subtree heights differ by
    /// at most 1. An empty tree is balanced.
    ///
    /// Heights are recomputed at each node rather than cached, so this is
    /// `O(N lg N)` on a balanced tree and up to `O(N^2)` on a fully skewed
    /// one.
    pub fn is_balanced(&self) -> bool {
        Node::balanced(&self.root)
    }

    /// Rebuilds the tree into balanced form, preserving the exact set of
    /// stored values.
    ///
    /// The values are drained in sorted order via an in-order walk and fed
    /// back through the balanced builder used by [`build`][Tree::build].
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let mut tree = Tree::build([1, 3, 5, 8]);
    /// for skew in 101..=105 {
    ///     tree.insert(skew);
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    ///
    /// let mut values = Vec::new();
    /// tree.in_order_for_each(|node| values.push(*node.value()));
    /// assert_eq!(values, [1, 3, 5, 8, 101, 102, 103, 104, 105]);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn rebalance(&mut self) {
        let mut values = Vec::new();
        Node::drain_in_order(self.root.take(), &mut values);

        // An in-order drain of a BST is already sorted and duplicate-free.
        let len = values.len();
        self.root = Node::from_sorted_run(&mut values.into_iter(), len);
    }

    /// Visits every node in breadth-first order: nodes grouped by depth,
    /// left to right within a depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::build([1, 3, 5, 8]);
    ///
    /// let mut values = Vec::new();
    /// tree.level_order_for_each(|node| values.push(*node.value()));
    /// assert_eq!(values, [5, 3, 8, 1]);
    /// ```
    pub fn level_order_for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node<T>),
    {
        let mut queue = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            visitor(node);
            if let Some(left) = node.left() {
                queue.push_back(left);
            }
            if let Some(right) = node.right() {
                queue.push_back(right);
            }
        }
    }

    /// Visits every node in pre-order: each node before either of its
    /// subtrees.
    pub fn pre_order_for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node<T>),
    {
        if let Some(root) = self.root.as_deref() {
            root.pre_order(&mut visitor);
        }
    }

    /// Visits every node in in-order: left subtree, node, right subtree.
    /// By the BST invariant this yields the stored values in strictly
    /// ascending order.
    pub fn in_order_for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node<T>),
    {
        if let Some(root) = self.root.as_deref() {
            root.in_order(&mut visitor);
        }
    }

    /// Visits every node in post-order: both subtrees before the node
    /// itself.
    pub fn post_order_for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node<T>),
    {
        if let Some(root) = self.root.as_deref() {
            root.post_order(&mut visitor);
        }
    }

    /// Writes a sideways tree diagram to the given sink, right subtree on
    /// top. An empty tree writes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::build([1, 3, 5, 8]);
    ///
    /// let mut diagram = Vec::new();
    /// tree.write_pretty(&mut diagram).unwrap();
    /// let expected = "\
    /// │   ┌── 8
    /// └── 5
    ///     └── 3
    ///         └── 1
    /// ";
    /// assert_eq!(String::from_utf8(diagram).unwrap(), expected);
    /// ```
    pub fn write_pretty<W>(&self, writer: &mut W) -> TreeResult<()>
    where
        W: Write,
        T: Display,
    {
        if let Some(root) = self.root.as_deref() {
            root.write_diagram(writer, "", true)?;
        }
        Ok(())
    }

    /// Writes a tree diagram to standard output. See
    /// [`write_pretty`][Tree::write_pretty] for the format.
    pub fn pretty_print(&self) -> TreeResult<()>
    where
        T: Display,
    {
        let stdout = io::stdout();
        self.write_pretty(&mut stdout.lock())
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

/// A `Node` holds one value and exclusively owns its left and right
/// subtrees. Every value in the left subtree is strictly less than the
/// node's own value and every value in the right subtree strictly greater.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// This node's left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// This node's right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Builds a balanced subtree by consuming the next `len` values of an
    /// ascending iterator in in-order sequence. The midpoint (`len / 2`)
    /// value becomes the subtree root.
    fn from_sorted_run<I>(values: &mut I, len: usize) -> Link<T>
    where
        I: Iterator<Item = T>,
    {
        if len == 0 {
            return None;
        }
        let mid = len / 2;
        let left = Self::from_sorted_run(values, mid);
        let value = values.next()?;
        let right = Self::from_sorted_run(values, len - mid - 1);
        Some(Box::new(Self { value, left, right }))
    }

    fn insert_into(link: Link<T>, value: T) -> Link<T>
    where
        T: Ord,
    {
        let Some(mut node) = link else {
            return Some(Box::new(Self::new(value)));
        };
        match value.cmp(&node.value) {
            Ordering::Less => node.left = Self::insert_into(node.left.take(), value),
            Ordering::Greater => node.right = Self::insert_into(node.right.take(), value),
            // Duplicate: leave the existing structure untouched.
            Ordering::Equal => {}
        }
        Some(node)
    }

    fn delete_from(link: Link<T>, value: &T) -> Link<T>
    where
        T: Ord,
    {
        let Some(mut node) = link else {
            return None;
        };
        match value.cmp(&node.value) {
            Ordering::Less => node.left = Self::delete_from(node.left.take(), value),
            Ordering::Greater => node.right = Self::delete_from(node.right.take(), value),
            Ordering::Equal => {
                return match (node.left.take(), node.right.take()) {
                    (None, None) => None,
                    (None, Some(child)) | (Some(child), None) => Some(child),
                    (Some(left), Some(right)) => {
                        // Promote the in-order successor: unlink the minimum
                        // of the right subtree and move its value into this
                        // node.
                        let (successor, remainder) = Self::detach_min(right);
                        node.value = successor.value;
                        node.left = Some(left);
                        node.right = remainder;
                        Some(node)
                    }
                };
            }
        }
        Some(node)
    }

    /// Splits the leftmost node off the subtree, returning it alongside the
    /// remaining subtree. The detached node keeps no children.
    fn detach_min(mut node: Box<Self>) -> (Box<Self>, Link<T>) {
        match node.left.take() {
            None => {
                let remainder = node.right.take();
                (node, remainder)
            }
            Some(left) => {
                let (min, remainder) = Self::detach_min(left);
                node.left = remainder;
                (min, Some(node))
            }
        }
    }

    fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left().and_then(|n| n.find(value)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.find(value)),
        }
    }

    /// Height of a possibly empty subtree in edges, where an empty slot
    /// counts as -1 so a leaf comes out at 0.
    fn link_height(link: &Link<T>) -> isize {
        link.as_deref().map_or(-1, Self::edge_height)
    }

    fn edge_height(&self) -> isize {
        Self::link_height(&self.left).max(Self::link_height(&self.right)) + 1
    }

    fn balanced(link: &Link<T>) -> bool {
        let Some(node) = link.as_deref() else {
            return true;
        };
        Self::link_height(&node.left).abs_diff(Self::link_height(&node.right)) <= 1
            && Self::balanced(&node.left)
            && Self::balanced(&node.right)
    }

    /// Consumes the subtree, pushing its values onto `out` in ascending
    /// order.
    fn drain_in_order(link: Link<T>, out: &mut Vec<T>) {
        if let Some(node) = link {
            let node = *node;
            Self::drain_in_order(node.left, out);
            out.push(node.value);
            Self::drain_in_order(node.right, out);
        }
    }

    fn pre_order<F>(&self, visitor: &mut F)
    where
        F: FnMut(&Self),
    {
        visitor(self);
        if let Some(left) = self.left() {
            left.pre_order(visitor);
        }
        if let Some(right) = self.right() {
            right.pre_order(visitor);
        }
    }

    fn in_order<F>(&self, visitor: &mut F)
    where
        F: FnMut(&Self),
    {
        if let Some(left) = self.left() {
            left.in_order(visitor);
        }
        visitor(self);
        if let Some(right) = self.right() {
            right.in_order(visitor);
        }
    }

    fn post_order<F>(&self, visitor: &mut F)
    where
        F: FnMut(&Self),
    {
        if let Some(left) = self.left() {
            left.post_order(visitor);
        }
        if let Some(right) = self.right() {
            right.post_order(visitor);
        }
        visitor(self);
    }

    /// Renders the subtree sideways, right child above the node and left
    /// child below, with box-drawing connectors.
    fn write_diagram<W>(&self, writer: &mut W, prefix: &str, is_left: bool) -> io::Result<()>
    where
        W: Write,
        T: Display,
    {
        if let Some(right) = self.right() {
            let child_prefix = format!("{prefix}{}", if is_left { "│   " } else { "    " });
            right.write_diagram(writer, &child_prefix, false)?;
        }
        writeln!(
            writer,
            "{prefix}{}{}",
            if is_left { "└── " } else { "┌── " },
            self.value
        )?;
        if let Some(left) = self.left() {
            let child_prefix = format!("{prefix}{}", if is_left { "    " } else { "│   " });
            left.write_diagram(writer, &child_prefix, true)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_order_values(tree: &Tree<i32>) -> Vec<i32> {
        let mut values = Vec::new();
        tree.in_order_for_each(|node| values.push(*node.value()));
        values
    }

    #[test]
    fn build_sorts_and_dedups() {
        let tree = Tree::build([5, 3, 8, 3, 1]);

        assert_eq!(in_order_values(&tree), [1, 3, 5, 8]);
        assert!(tree.is_balanced());

        // mid = 4 / 2 picks 5 as the root, [1, 3] to its left, [8] to its
        // right.
        assert_eq!(tree.depth(&5), Some(0));
        assert_eq!(tree.depth(&3), Some(1));
        assert_eq!(tree.depth(&8), Some(1));
        assert_eq!(tree.depth(&1), Some(2));
    }

    #[test]
    fn build_empty() {
        let tree: Tree<i32> = Tree::build([]);

        assert!(tree.is_balanced());
        assert_eq!(in_order_values(&tree), []);
    }

    #[test]
    fn build_from_iterator() {
        let tree: Tree<i32> = (1..=7).collect();

        assert_eq!(in_order_values(&tree), [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.height(&4), Some(2));
        assert!(tree.is_balanced());
    }

    #[test]
    fn insert_into_empty_tree_sets_root() {
        let mut tree = Tree::new();
        tree.insert(7);

        assert_eq!(tree.depth(&7), Some(0));
        assert_eq!(in_order_values(&tree), [7]);
    }

    #[test]
    fn insert_descends_to_open_slot() {
        let mut tree = Tree::build([1, 3, 5, 8]);
        tree.insert(4);

        // 4 lands as the right child of 3: left of 5, right of 3.
        assert_eq!(tree.depth(&4), Some(2));
        assert_eq!(in_order_values(&tree), [1, 3, 4, 5, 8]);
    }

    #[test]
    fn insert_duplicate_is_noop() {
        let mut tree = Tree::build([1, 3, 5, 8]);
        tree.insert(3);

        let mut level_order = Vec::new();
        tree.level_order_for_each(|node| level_order.push(*node.value()));
        assert_eq!(level_order, [5, 3, 8, 1]);
        assert_eq!(in_order_values(&tree), [1, 3, 5, 8]);
    }

    #[test]
    fn delete_leaf() {
        let mut tree = Tree::build([1, 3, 5, 8]);
        tree.delete(&1);

        assert!(tree.find(&1).is_none());
        assert_eq!(in_order_values(&tree), [3, 5, 8]);
    }

    #[test]
    fn delete_node_with_one_child() {
        let mut tree = Tree::build([1, 3, 5, 8]);

        // 3 has only a left child, 1, which takes its slot.
        tree.delete(&3);

        assert!(tree.find(&3).is_none());
        assert_eq!(tree.depth(&1), Some(1));
        assert_eq!(in_order_values(&tree), [1, 5, 8]);
    }

    #[test]
    fn delete_node_with_two_children_promotes_successor() {
        let mut tree = Tree::build([5, 3, 8, 3, 1]);

        // 5 has two children; its successor 8 replaces it and the right
        // subtree empties out.
        tree.delete(&5);

        assert!(tree.find(&5).is_none());
        assert_eq!(tree.depth(&8), Some(0));
        assert_eq!(in_order_values(&tree), [1, 3, 8]);
    }

    #[test]
    fn delete_with_deeper_successor() {
        let mut tree: Tree<i32> = (1..=7).collect();

        // Root 4's successor is 5, the leftmost node under 6.
        tree.delete(&4);

        assert_eq!(tree.depth(&5), Some(0));
        assert_eq!(tree.depth(&6), Some(1));
        assert_eq!(tree.depth(&7), Some(2));
        assert_eq!(in_order_values(&tree), [1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn delete_absent_value_is_noop() {
        let mut tree = Tree::build([1, 3, 5, 8]);
        tree.delete(&42);

        assert_eq!(in_order_values(&tree), [1, 3, 5, 8]);
    }

    #[test]
    fn delete_root_of_single_node_tree() {
        let mut tree = Tree::build([7]);
        tree.delete(&7);

        assert_eq!(in_order_values(&tree), []);
        assert!(tree.is_balanced());
    }

    #[test]
    fn find_returns_node_reference() {
        let tree = Tree::build([1, 3, 5, 8]);

        let node = tree.find(&3).unwrap();
        assert_eq!(*node.value(), 3);
        assert_eq!(node.left().map(|n| *n.value()), Some(1));
        assert!(node.right().is_none());

        assert!(tree.find(&42).is_none());
    }

    #[test]
    fn height_counts_edges_to_deepest_leaf() {
        let tree = Tree::build([1, 3, 5, 8]);

        assert_eq!(tree.height(&5), Some(2));
        assert_eq!(tree.height(&3), Some(1));
        assert_eq!(tree.height(&1), Some(0));
        assert_eq!(tree.height(&8), Some(0));
        assert_eq!(tree.height(&42), None);
    }

    #[test]
    fn depth_of_missing_value_is_none() {
        let tree = Tree::build([1, 3, 5, 8]);

        assert_eq!(tree.depth(&42), None);
        assert_eq!(Tree::<i32>::new().depth(&1), None);
    }

    #[test]
    fn traversal_orders() {
        let tree = Tree::build([5, 3, 8, 3, 1]);

        let mut level_order = Vec::new();
        tree.level_order_for_each(|n| level_order.push(*n.value()));
        assert_eq!(level_order, [5, 3, 8, 1]);

        let mut pre_order = Vec::new();
        tree.pre_order_for_each(|n| pre_order.push(*n.value()));
        assert_eq!(pre_order, [5, 3, 1, 8]);

        let mut in_order = Vec::new();
        tree.in_order_for_each(|n| in_order.push(*n.value()));
        assert_eq!(in_order, [1, 3, 5, 8]);

        let mut post_order = Vec::new();
        tree.post_order_for_each(|n| post_order.push(*n.value()));
        assert_eq!(post_order, [1, 3, 8, 5]);
    }

    #[test]
    fn traversals_visit_each_node_exactly_once() {
        let tree: Tree<i32> = (1..=10).collect();

        let traversals: [fn(&Tree<i32>, &mut Vec<i32>); 4] = [
            |tree, out| tree.level_order_for_each(|n| out.push(*n.value())),
            |tree, out| tree.pre_order_for_each(|n| out.push(*n.value())),
            |tree, out| tree.in_order_for_each(|n| out.push(*n.value())),
            |tree, out| tree.post_order_for_each(|n| out.push(*n.value())),
        ];
        for counter in traversals {
            let mut visited = Vec::new();
            counter(&tree, &mut visited);
            visited.sort_unstable();
            assert_eq!(visited, (1..=10).collect::<Vec<_>>());
        }
    }

    #[test]
    fn traversals_of_empty_tree_visit_nothing() {
        let tree: Tree<i32> = Tree::new();
        let mut count = 0;

        tree.level_order_for_each(|_| count += 1);
        tree.pre_order_for_each(|_| count += 1);
        tree.in_order_for_each(|_| count += 1);
        tree.post_order_for_each(|_| count += 1);

        assert_eq!(count, 0);
    }

    #[test]
    fn skewed_inserts_unbalance_and_rebalance_restores() {
        let mut tree: Tree<i32> = (1..=7).collect();
        assert!(tree.is_balanced());

        for skew in 101..=105 {
            tree.insert(skew);
        }
        assert!(!tree.is_balanced());

        let before = in_order_values(&tree);
        tree.rebalance();

        assert!(tree.is_balanced());
        assert_eq!(in_order_values(&tree), before);

        // 12 values rebuild to the minimal ⌊lg 12⌋ height.
        assert_eq!(tree.depth(&101), Some(0));
        assert_eq!(tree.height(&101), Some(3));
    }

    #[test]
    fn rebalance_of_empty_tree_is_noop() {
        let mut tree: Tree<i32> = Tree::new();
        tree.rebalance();

        assert!(tree.is_balanced());
        assert_eq!(in_order_values(&tree), []);
    }

    #[test]
    fn diagram_matches_sideways_layout() {
        let tree = Tree::build([5, 3, 8, 3, 1]);

        let mut diagram = Vec::new();
        tree.write_pretty(&mut diagram).unwrap();

        let expected = "\
│   ┌── 8
└── 5
    └── 3
        └── 1
";
        assert_eq!(String::from_utf8(diagram).unwrap(), expected);
    }

    #[test]
    fn diagram_of_empty_tree_is_empty() {
        let tree: Tree<i32> = Tree::new();

        let mut diagram = Vec::new();
        tree.write_pretty(&mut diagram).unwrap();

        assert!(diagram.is_empty());
    }
}
