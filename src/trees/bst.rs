//! Unbalanced binary search tree with owned child links.
//!
//! Values are ordered by `Ord`; equal values are never stored twice. Deleting a
//! node with two children replaces it with its in-order predecessor (the
//! maximum of its left subtree).

use core::cmp::Ordering;
use core::fmt;

use crate::lists::fmt_joined;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// A binary search tree holding distinct values.
///
/// # Invariants
/// * Every value in a node's left subtree is strictly less than the node's
///   value; every value in its right subtree is strictly greater.
pub struct BinarySearchTree<T> {
    root: Link<T>,
}

impl<T: Ord> BinarySearchTree<T> {
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Inserts `value`. Returns `false`, leaving the tree untouched, if an
    /// equal value is already present.
    pub fn add(&mut self, value: T) -> bool {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            match value.cmp(&node.value) {
                Ordering::Less => cursor = &mut node.left,
                Ordering::Greater => cursor = &mut node.right,
                Ordering::Equal => return false,
            }
        }
        *cursor = Some(Node::leaf(value));
        true
    }

    /// Returns `true` if a value equal to `value` is stored.
    pub fn has(&self, value: &T) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Removes `value`. Returns `false` if it was not present.
    ///
    /// # Pseudo Code:
    /// ```text
    /// descend to the link holding value (return false if none)
    /// match children:
    ///     none        -> link = None
    ///     one child   -> link = child
    ///     two children-> pred = max(left); detach pred from left
    ///                    pred.left = rest of left; pred.right = right
    ///                    link = pred
    /// ```
    pub fn delete(&mut self, value: &T) -> bool {
        let mut cursor = &mut self.root;
        loop {
            let ordering = match cursor.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => return false,
            };
            if ordering == Ordering::Equal {
                break;
            }
            let Some(node) = cursor else {
                return false;
            };
            cursor = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        Self::splice_out(cursor);
        true
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Replaces the node held by `link` with whatever should take its place.
    fn splice_out(link: &mut Link<T>) {
        let Some(mut node) = link.take() else {
            return;
        };
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(mut left), Some(right)) => {
                if left.right.is_none() {
                    // `left` is the predecessor and keeps its own left child.
                    left.right = Some(right);
                    Some(left)
                } else {
                    let mut predecessor = Self::detach_max(&mut left.right);
                    predecessor.left = Some(left);
                    predecessor.right = Some(right);
                    Some(predecessor)
                }
            }
        };
    }

    /// Unlinks the maximum node of the non-empty subtree held by `link`,
    /// leaving its left child in its place.
    fn detach_max(mut link: &mut Link<T>) -> Box<Node<T>> {
        while link.as_ref().is_some_and(|node| node.right.is_some()) {
            if let Some(node) = link {
                link = &mut node.right;
            }
        }
        match link.take() {
            Some(mut max) => {
                *link = max.left.take();
                max
            }
            None => unreachable!("detach_max called on an empty subtree"),
        }
    }
}

impl<T> BinarySearchTree<T> {
    /// Counts the stored values with a full in-order walk.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Empties the tree.
    pub fn clear(&mut self) {
        drop_subtree(self.root.take());
    }

    /// Values in ascending order, produced lazily.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

/// Frees a subtree without recursing, so degenerate (list-shaped) trees of any
/// depth can be dropped.
fn drop_subtree<T>(root: Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        drop_subtree(self.root.take());
    }
}

/// Copies a subtree bottom-up with explicit stacks; same shape, no recursion.
///
/// # Pseudo Code:
/// ```text
/// work = [Visit(root)]; built = []
/// while work not empty:
///     Visit(None)    -> built.push(None)
///     Visit(node)    -> work.push(Build(node), Visit(right), Visit(left))
///     Build(node)    -> right = built.pop(); left = built.pop()
///                       built.push(copy of node with left, right)
/// return built.pop()
/// ```
fn clone_subtree<T: Clone>(root: Option<&Node<T>>) -> Link<T> {
    enum Step<'a, T> {
        Visit(Option<&'a Node<T>>),
        Build(&'a Node<T>),
    }

    let mut work = vec![Step::Visit(root)];
    let mut built: Vec<Link<T>> = Vec::new();
    while let Some(step) = work.pop() {
        match step {
            Step::Visit(None) => built.push(None),
            Step::Visit(Some(node)) => {
                work.push(Step::Build(node));
                work.push(Step::Visit(node.right.as_deref()));
                work.push(Step::Visit(node.left.as_deref()));
            }
            Step::Build(node) => {
                let right = built.pop().flatten();
                let left = built.pop().flatten();
                built.push(Some(Box::new(Node {
                    value: node.value.clone(),
                    left,
                    right,
                })));
            }
        }
    }
    built.pop().flatten()
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        Self {
            root: clone_subtree(self.root.as_deref()),
        }
    }
}

// --- Iterators ---

/// In-order iterator driven by an explicit stack of pending ancestors.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Traits ---

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_joined(f, self.iter())
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    fn values(tree: &BinarySearchTree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    fn sample() -> BinarySearchTree<i32> {
        [8, 3, 1, 10, 6, 4, 7, 14, 13].into_iter().collect()
    }

    /// Checks the ordering invariant on every subtree, not just the walk.
    fn assert_ordered(link: &Link<i32>, low: Option<i32>, high: Option<i32>) {
        if let Some(node) = link {
            if let Some(low) = low {
                assert!(node.value > low);
            }
            if let Some(high) = high {
                assert!(node.value < high);
            }
            assert_ordered(&node.left, low, Some(node.value));
            assert_ordered(&node.right, Some(node.value), high);
        }
    }

    #[test]
    fn test_bst_add_and_iterate_sorted() {
        let tree = sample();
        assert_eq!(values(&tree), vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
        assert_eq!(tree.len(), 9);
        assert_ordered(&tree.root, None, None);
    }

    #[test]
    fn test_bst_duplicate_add_is_noop() {
        let mut tree = BinarySearchTree::new();
        assert!(tree.add(5));
        assert!(!tree.add(5));
        assert!(tree.add(2));
        assert!(!tree.add(2));
        assert_eq!(values(&tree), vec![2, 5]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_bst_has() {
        let tree = sample();
        for v in [1, 3, 4, 6, 7, 8, 10, 13, 14] {
            assert!(tree.has(&v), "missing {v}");
        }
        assert!(!tree.has(&0));
        assert!(!tree.has(&9));
        assert!(!BinarySearchTree::new().has(&1));
    }

    #[test]
    fn test_bst_delete_two_children() {
        let mut tree = sample();
        assert!(tree.delete(&3));
        assert_eq!(values(&tree), vec![1, 4, 6, 7, 8, 10, 13, 14]);
        assert!(!tree.has(&3));
        assert_ordered(&tree.root, None, None);
    }

    #[test]
    fn test_bst_delete_leaf_and_single_child() {
        let mut tree = sample();
        // leaf
        assert!(tree.delete(&13));
        assert_eq!(values(&tree), vec![1, 3, 4, 6, 7, 8, 10, 14]);
        // 10 now has a single (right) child
        assert!(tree.delete(&10));
        assert_eq!(values(&tree), vec![1, 3, 4, 6, 7, 8, 14]);
        assert_ordered(&tree.root, None, None);
    }

    #[test]
    fn test_bst_delete_root_variants() {
        let mut tree = sample();
        assert!(tree.delete(&8));
        assert_eq!(values(&tree), vec![1, 3, 4, 6, 7, 10, 13, 14]);
        assert_eq!(tree.root.as_ref().map(|n| n.value), Some(7));
        assert_ordered(&tree.root, None, None);

        let mut single: BinarySearchTree<i32> = [1].into_iter().collect();
        assert!(single.delete(&1));
        assert!(single.is_empty());

        let mut chain: BinarySearchTree<i32> = [1, 2, 3].into_iter().collect();
        assert!(chain.delete(&1));
        assert_eq!(values(&chain), vec![2, 3]);
    }

    #[test]
    fn test_bst_delete_predecessor_is_direct_left_child() {
        // 5's predecessor 3 has no right subtree but keeps its own left child.
        let mut tree: BinarySearchTree<i32> = [5, 3, 8, 2].into_iter().collect();
        assert!(tree.delete(&5));
        assert_eq!(values(&tree), vec![2, 3, 8]);
        assert_eq!(tree.root.as_ref().map(|n| n.value), Some(3));
        assert_ordered(&tree.root, None, None);
    }

    #[test]
    fn test_bst_delete_missing_is_noop() {
        let mut tree = sample();
        assert!(!tree.delete(&42));
        assert_eq!(tree.len(), 9);
        assert!(!BinarySearchTree::<i32>::new().delete(&1));
    }

    #[test]
    fn test_bst_min_max_clear() {
        let mut tree = sample();
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&14));
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.min(), None);
        assert!(tree.add(3));
    }

    #[test]
    fn test_bst_iter_restartable() {
        let tree = sample();
        let first: Vec<_> = tree.iter().collect();
        let second: Vec<_> = (&tree).into_iter().collect();
        assert_eq!(first, second);
    }

    /// Builds the list-shaped tree that sorted `add`s would produce, without
    /// paying for the quadratic inserts.
    fn right_chain(n: u32) -> BinarySearchTree<u32> {
        let mut root: Link<u32> = None;
        for value in (0..n).rev() {
            root = Some(Box::new(Node {
                value,
                left: None,
                right: root,
            }));
        }
        BinarySearchTree { root }
    }

    /// Mirror of `right_chain`: every node hangs off its parent's left link.
    fn left_chain(n: u32) -> Link<u32> {
        let mut root: Link<u32> = None;
        for value in 0..n {
            root = Some(Box::new(Node {
                value,
                left: root,
                right: None,
            }));
        }
        root
    }

    #[test]
    fn test_bst_degenerate_tree_drops() {
        let tree: BinarySearchTree<u32> = (0..5_000).collect();
        assert_eq!(tree.max(), Some(&4_999));
        drop(tree);
    }

    #[test]
    fn test_bst_delete_deep_in_degenerate_tree() {
        let mut tree = right_chain(200_000);
        assert!(tree.delete(&199_999));
        assert_eq!(tree.max(), Some(&199_998));
        assert!(tree.delete(&100_000));
        assert!(!tree.has(&100_000));
        assert!(tree.has(&100_001));
        assert!(!tree.delete(&200_000));
        assert_eq!(tree.len(), 199_998);
    }

    #[test]
    fn test_bst_delete_root_with_deep_predecessor() {
        // The left child's right spine is 200_000 nodes long, so the
        // predecessor sits at the very bottom of it.
        let mut left = right_chain(200_000);
        let mut tree = BinarySearchTree {
            root: Some(Box::new(Node {
                value: 300_000,
                left: left.root.take(),
                right: Some(Node::leaf(300_001)),
            })),
        };
        assert!(tree.delete(&300_000));
        assert_eq!(tree.root.as_ref().map(|n| n.value), Some(199_999));
        assert_eq!(tree.max(), Some(&300_001));
        assert_eq!(tree.min(), Some(&0));

        let mut leaning = BinarySearchTree { root: left_chain(200_000) };
        assert!(leaning.delete(&0));
        assert_eq!(leaning.min(), Some(&1));
        assert!(leaning.delete(&199_999));
        assert_eq!(leaning.root.as_ref().map(|n| n.value), Some(199_998));
    }

    #[test]
    fn test_bst_clone_degenerate_tree() {
        let tree = right_chain(200_000);
        let copy = tree.clone();
        drop(tree);
        assert_eq!(copy.min(), Some(&0));
        assert_eq!(copy.max(), Some(&199_999));
        assert!(copy.iter().copied().eq(0..200_000));
    }

    #[test]
    fn test_bst_clone_keeps_shape() {
        let tree = sample();
        let copy = tree.clone();
        assert_eq!(copy.root.as_ref().map(|n| n.value), Some(8));
        assert_eq!(values(&copy), values(&tree));
        assert_ordered(&copy.root, None, None);
        assert!(BinarySearchTree::<i32>::new().clone().is_empty());
    }

    #[test]
    fn test_bst_traits() {
        let tree: BinarySearchTree<i32> = [2, 1, 3].into_iter().collect();
        assert_eq!(tree.to_string(), "1,2,3");
        assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
        let copy = tree.clone();
        assert_eq!(values(&copy), vec![1, 2, 3]);
        assert!(BinarySearchTree::<i32>::default().is_empty());
    }
}
