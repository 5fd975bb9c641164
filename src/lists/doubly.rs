//! Doubly linked list over an index arena.
//!
//! Every node keeps `next` and `prev` slot indices, and `prev` is always the
//! exact inverse of `next`. The list tracks both ends, so appends, prepends
//! and pops at either end are O(1).

use core::fmt;

use super::arena::NodeArena;
use super::{AnyList, check_index, fmt_joined};
use crate::error::Result;

/// A doubly linked list with head and tail tracking.
///
/// # Invariants
/// * `head.prev` and `tail.next` are `None`.
/// * For every linked node `n`, `n.next.prev == n`.
/// * `arena.len()` is the element count.
pub struct DoublyLinkedList<T> {
    arena: NodeArena<T>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
            tail: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // --- Modification ---

    /// Appends `data` at the tail in O(1).
    pub fn add(&mut self, data: T) {
        let idx = self.arena.alloc(data);
        match self.tail {
            Some(tail) => {
                self.arena.set_next(tail, Some(idx));
                self.arena.set_prev(idx, Some(tail));
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    /// Prepends `data` at the head in O(1).
    pub fn push_front(&mut self, data: T) {
        let idx = self.arena.alloc(data);
        match self.head {
            Some(head) => {
                self.arena.set_prev(head, Some(idx));
                self.arena.set_next(idx, Some(head));
            }
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    /// Inserts `data` so that it occupies position `index`.
    pub fn insert_before(&mut self, data: T, index: usize) -> Result<()> {
        check_index(index, self.len())?;
        let current = self.slot_at(index);
        match self.arena.prev(current) {
            Some(prev) => {
                let idx = self.arena.alloc(data);
                self.link_between(prev, idx, current);
            }
            None => self.push_front(data),
        }
        Ok(())
    }

    /// Inserts `data` directly after the element at `index`.
    pub fn insert_after(&mut self, data: T, index: usize) -> Result<()> {
        check_index(index, self.len())?;
        let current = self.slot_at(index);
        match self.arena.next(current) {
            Some(next) => {
                let idx = self.arena.alloc(data);
                self.link_between(current, idx, next);
            }
            None => self.add(data),
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        check_index(index, self.len())?;
        let idx = self.slot_at(index);
        Ok(self.unlink(idx))
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.unlink(tail))
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    // --- Access ---

    /// Returns the element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        Some(&self.arena.node(self.slot_at(index)).data)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            return None;
        }
        let idx = self.slot_at(index);
        Some(&mut self.arena.node_mut(idx).data)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|idx| &self.arena.node(idx).data)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|idx| &self.arena.node(idx).data)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        let idx = self.head?;
        Some(&mut self.arena.node_mut(idx).data)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        let idx = self.tail?;
        Some(&mut self.arena.node_mut(idx).data)
    }

    /// Position of the first element equal to `data`.
    pub fn index_of(&self, data: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == data)
    }

    /// First element matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|&item| predicate(item))
    }

    /// Position of the first element matching `predicate`.
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Mutable reference to the first element matching `predicate`.
    pub fn find_mut<P>(&mut self, mut predicate: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.arena.node(idx);
            if predicate(&node.data) {
                return Some(&mut self.arena.node_mut(idx).data);
            }
            cursor = node.next;
        }
        None
    }

    // --- Iteration ---

    /// Front-to-back iterator; also walks back-to-front through `rev()`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Back-to-front iterator.
    pub fn iter_rev(&self) -> core::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    // --- Internals ---

    /// Slot index of the element at `index`, walking from the nearer end.
    /// Callers guarantee `index < len`.
    fn slot_at(&self, index: usize) -> usize {
        let len = self.len();
        let (mut idx, steps, forward) = if index <= len / 2 {
            (self.head, index, true)
        } else {
            (self.tail, len - 1 - index, false)
        };
        for _ in 0..steps {
            idx = idx.and_then(|i| {
                if forward {
                    self.arena.next(i)
                } else {
                    self.arena.prev(i)
                }
            });
        }
        match idx {
            Some(idx) => idx,
            None => unreachable!("list shorter than its length"),
        }
    }

    fn link_between(&mut self, prev: usize, idx: usize, next: usize) {
        self.arena.set_next(prev, Some(idx));
        self.arena.set_prev(idx, Some(prev));
        self.arena.set_next(idx, Some(next));
        self.arena.set_prev(next, Some(idx));
    }

    /// Detaches the node at slot `idx`, repairing neighbours and both ends.
    fn unlink(&mut self, idx: usize) -> T {
        let prev = self.arena.prev(idx);
        let next = self.arena.next(idx);
        match prev {
            Some(prev) => self.arena.set_next(prev, next),
            None => self.head = next,
        }
        match next {
            Some(next) => self.arena.set_prev(next, prev),
            None => self.tail = prev,
        }
        self.arena.release(idx)
    }
}

impl<T> AnyList<T> for DoublyLinkedList<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn add(&mut self, data: T) {
        self.add(data);
    }
    fn insert_before(&mut self, data: T, index: usize) -> Result<()> {
        self.insert_before(data, index)
    }
    fn insert_after(&mut self, data: T, index: usize) -> Result<()> {
        self.insert_after(data, index)
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    fn index_of(&self, data: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of(data)
    }
    fn remove(&mut self, index: usize) -> Result<T> {
        self.remove(index)
    }
    fn clear(&mut self) {
        self.clear();
    }
}

// --- Iterators ---

/// Double-ended iterator over an index-linked chain or ring.
///
/// Bounded by the element count, so it terminates on rings as well.
pub struct Iter<'a, T> {
    pub(crate) arena: &'a NodeArena<T>,
    pub(crate) front: Option<usize>,
    pub(crate) back: Option<usize>,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.data)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Traits ---

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_joined(f, self.iter())
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

// --- Tests ---
