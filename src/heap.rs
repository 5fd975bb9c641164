//! Array-backed binary heap ordered by a pluggable comparator.
//!
//! # Implementation details
//! - **Layout**: the heap lives in a `Vec<T>`; index 0 is the root and the
//!   children of `i` sit at `2i + 1` and `2i + 2`.
//! - **Ordering**: a [`Comparator`] decides which of two values belongs first.
//!   [`Min`] (the default) gives ascending natural order, [`Max`] descending,
//!   and any `Fn(&T, &T) -> Ordering` closure works as a custom order.
//! - **Rebalancing**: `add` sifts the new last element up; `poll` moves the last
//!   element into the root and sifts it down.

use core::cmp::Ordering;
use core::fmt;
use std::collections::BinaryHeap as StdBinaryHeap;

use crate::error::{CollectionError, Result};
use crate::lists::fmt_joined;

/// A trait for abstraction over different priority queue types.
pub trait AnyHeap<T> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn add(&mut self, item: T);
    fn peek(&self) -> Option<&T>;
    fn poll(&mut self) -> Option<T>;
    fn clear(&mut self);
}

impl<T: Ord> AnyHeap<T> for StdBinaryHeap<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn add(&mut self, item: T) {
        self.push(item);
    }
    fn peek(&self) -> Option<&T> {
        self.peek()
    }
    fn poll(&mut self) -> Option<T> {
        self.pop()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

/// Decides the relative order of two heap values.
///
/// `Ordering::Greater` means `a` belongs after `b`, so `b` is closer to the root.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Natural ascending order; the root is the smallest value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Min;

/// Natural descending order; the root is the largest value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Max;

impl<T: Ord> Comparator<T> for Min {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: Ord> Comparator<T> for Max {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// A binary heap whose root is the value the comparator ranks first.
///
/// # Invariants
/// * For every `i` with a child `c`, `compare(data[i], data[c])` is never
///   `Greater`.
#[derive(Clone)]
pub struct BinaryHeap<T, C = Min> {
    data: Vec<T>,
    comparator: C,
}

impl<T: Ord> BinaryHeap<T, Min> {
    /// Creates an empty min-heap.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            comparator: Min,
        }
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `comparator`.
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            data: Vec::new(),
            comparator,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts `value` and restores heap order; O(log n).
    pub fn add(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// The root value.
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(CollectionError::Empty)
    }

    /// Removes and returns the root value; O(log n).
    pub fn poll(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(CollectionError::Empty);
        }
        let top = self.data.swap_remove(0);
        if self.data.len() > 1 {
            self.sift_down(0);
        }
        Ok(top)
    }

    /// Linear scan of the backing array.
    pub fn includes(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.data.contains(value)
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Values in backing-array (heap) order, not sorted order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The backing array in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// All values in comparator order, root first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(value) = self.poll() {
            sorted.push(value);
        }
        sorted
    }

    // --- Internals ---

    #[inline]
    fn belongs_after(&self, a: usize, b: usize) -> bool {
        self.comparator.compare(&self.data[a], &self.data[b]) == Ordering::Greater
    }

    fn sift_up(&mut self, mut current: usize) {
        while current > 0 {
            let parent = (current - 1) / 2;
            if !self.belongs_after(parent, current) {
                break;
            }
            self.data.swap(parent, current);
            current = parent;
        }
    }

    fn sift_down(&mut self, mut current: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * current + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            // Ties go to the left child.
            let first = if right < len && self.belongs_after(left, right) {
                right
            } else {
                left
            };
            if !self.belongs_after(current, first) {
                break;
            }
            self.data.swap(current, first);
            current = first;
        }
    }
}

impl<T, C: Comparator<T>> AnyHeap<T> for BinaryHeap<T, C> {
    fn len(&self) -> usize {
        self.len()
    }
    fn add(&mut self, item: T) {
        self.add(item);
    }
    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self).ok()
    }
    fn poll(&mut self) -> Option<T> {
        BinaryHeap::poll(self).ok()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

// --- Traits ---

impl<T: Ord> Default for BinaryHeap<T, Min> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: fmt::Display, C> fmt::Display for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_joined(f, self.data.iter())
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T, Min> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

// --- Tests ---
