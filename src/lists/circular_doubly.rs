//! Circular doubly linked list.
//!
//! Only the head is tracked; the tail is always `head.prev`. Every node has both
//! links set, and a lone node points at itself in both directions.

use core::fmt;

use super::arena::{Cycle, NodeArena};
use super::doubly::Iter;
use super::{AnyList, check_index, fmt_joined};
use crate::error::Result;

/// A ring of nodes linked in both directions.
///
/// # Invariants
/// * `tail.next == head` and `head.prev == tail`.
/// * For every node `n`, `n.next.prev == n`.
pub struct CircularDoublyLinkedList<T> {
    arena: NodeArena<T>,
    head: Option<usize>,
}

impl<T> CircularDoublyLinkedList<T> {
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
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

    /// Appends `data` between the tail and the head in O(1).
    pub fn add(&mut self, data: T) {
        let idx = self.arena.alloc(data);
        match self.head {
            Some(head) => self.link_before(head, idx),
            None => {
                self.arena.set_next(idx, Some(idx));
                self.arena.set_prev(idx, Some(idx));
                self.head = Some(idx);
            }
        }
    }

    /// Inserts `data` so that it occupies position `index`.
    pub fn insert_before(&mut self, data: T, index: usize) -> Result<()> {
        check_index(index, self.len())?;
        let current = self.slot_at(index);
        let idx = self.arena.alloc(data);
        self.link_before(current, idx);
        if index == 0 {
            self.head = Some(idx);
        }
        Ok(())
    }

    /// Inserts `data` directly after the element at `index`.
    ///
    /// Inserting after the tail makes the new node the tail; the ring closes
    /// back onto the head automatically.
    pub fn insert_after(&mut self, data: T, index: usize) -> Result<()> {
        check_index(index, self.len())?;
        let current = self.slot_at(index);
        let next = self.next_of(current);
        let idx = self.arena.alloc(data);
        self.link_before(next, idx);
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        check_index(index, self.len())?;
        let idx = self.slot_at(index);
        if self.len() == 1 {
            self.head = None;
        } else {
            let prev = self.prev_of(idx);
            let next = self.next_of(idx);
            self.arena.set_next(prev, Some(next));
            self.arena.set_prev(next, Some(prev));
            if index == 0 {
                self.head = Some(next);
            }
        }
        Ok(self.arena.release(idx))
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
    }

    // --- Access ---

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        Some(&self.arena.node(self.slot_at(index)).data)
    }

    pub fn index_of(&self, data: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == data)
    }

    // --- Iteration ---

    /// One lap around the ring, head first. Use `rev()` or [`iter_rev`](Self::iter_rev)
    /// for the tail-first lap.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.head.map(|head| self.prev_of(head)),
            remaining: self.len(),
        }
    }

    /// One lap around the ring, tail first, following `prev` links.
    pub fn iter_rev(&self) -> core::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Endless walk around the ring starting at the head.
    ///
    /// **Never terminates on a non-empty list.** Consume it with a bound such as
    /// `take(n)`; it is deliberately not what `for x in &list` iterates.
    pub fn cycle(&self) -> Cycle<'_, T> {
        Cycle {
            arena: &self.arena,
            current: self.head,
        }
    }

    // --- Internals ---

    #[inline]
    fn next_of(&self, idx: usize) -> usize {
        self.arena.next(idx).unwrap_or(idx)
    }

    #[inline]
    fn prev_of(&self, idx: usize) -> usize {
        self.arena.prev(idx).unwrap_or(idx)
    }

    /// Links the unlinked node `idx` directly before `current`.
    fn link_before(&mut self, current: usize, idx: usize) {
        let prev = self.prev_of(current);
        self.arena.set_next(prev, Some(idx));
        self.arena.set_prev(idx, Some(prev));
        self.arena.set_next(idx, Some(current));
        self.arena.set_prev(current, Some(idx));
    }

    /// Slot of the element at `index < len`, walking whichever way round is shorter.
    fn slot_at(&self, index: usize) -> usize {
        let Some(head) = self.head else {
            unreachable!("slot lookup on an empty ring");
        };
        let len = self.len();
        let mut idx = head;
        if index <= len / 2 {
            for _ in 0..index {
                idx = self.next_of(idx);
            }
        } else {
            for _ in index..len {
                idx = self.prev_of(idx);
            }
        }
        idx
    }
}

impl<T> AnyList<T> for CircularDoublyLinkedList<T> {
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

impl<'a, T> IntoIterator for &'a CircularDoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct IntoIter<T> {
    list: CircularDoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.list.is_empty() {
            return None;
        }
        self.list.remove(0).ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T> IntoIterator for CircularDoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

// --- Traits ---

impl<T> Default for CircularDoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CircularDoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularDoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for CircularDoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_joined(f, self.iter())
    }
}

impl<T: PartialEq> PartialEq for CircularDoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Extend<T> for CircularDoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for CircularDoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

// --- Tests ---
