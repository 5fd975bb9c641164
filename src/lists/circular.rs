//! Circular singly linked list.
//!
//! The list remembers only its tail; the head is `tail.next`. Keeping the tail
//! makes `add` O(1) and still gives O(1) access to the head.

use core::fmt;

use super::arena::{Cycle, Iter, NodeArena};
use super::{AnyList, check_index, fmt_joined};
use crate::error::Result;

/// A ring of forward-linked nodes.
///
/// # Invariants
/// * `tail.next` is the head; a lone node links to itself.
/// * `prev` links are never used.
pub struct CircularLinkedList<T> {
    arena: NodeArena<T>,
    tail: Option<usize>,
}

impl<T> CircularLinkedList<T> {
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
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

    /// Appends `data` after the tail and makes it the new tail.
    pub fn add(&mut self, data: T) {
        let idx = self.arena.alloc(data);
        match self.tail {
            Some(tail) => self.link_after(tail, idx),
            None => self.arena.set_next(idx, Some(idx)),
        }
        self.tail = Some(idx);
    }

    /// Inserts `data` so that it occupies position `index`.
    ///
    /// Inserting before the head links the node between tail and head; the
    /// tail does not move.
    pub fn insert_before(&mut self, data: T, index: usize) -> Result<()> {
        check_index(index, self.len())?;
        let prev = match index {
            0 => self.tail_slot(),
            _ => self.slot_at(index - 1),
        };
        let idx = self.arena.alloc(data);
        self.link_after(prev, idx);
        Ok(())
    }

    /// Inserts `data` directly after the element at `index`.
    pub fn insert_after(&mut self, data: T, index: usize) -> Result<()> {
        check_index(index, self.len())?;
        let current = self.slot_at(index);
        let idx = self.arena.alloc(data);
        self.link_after(current, idx);
        if self.tail == Some(current) {
            self.tail = Some(idx);
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        check_index(index, self.len())?;
        let prev = match index {
            0 => self.tail_slot(),
            _ => self.slot_at(index - 1),
        };
        let idx = self.next_of(prev);
        if idx == prev {
            self.tail = None;
        } else {
            let next = self.next_of(idx);
            self.arena.set_next(prev, Some(next));
            if self.tail == Some(idx) {
                self.tail = Some(prev);
            }
        }
        Ok(self.arena.release(idx))
    }

    /// Advances the head `steps` positions around the ring.
    pub fn rotate(&mut self, steps: usize) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let mut tail = self.tail_slot();
        for _ in 0..steps % len {
            tail = self.next_of(tail);
        }
        self.tail = Some(tail);
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.tail = None;
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

    /// One lap around the ring, head first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: self.head(),
            remaining: self.len(),
        }
    }

    /// Endless walk around the ring starting at the head.
    ///
    /// **Never terminates on a non-empty list.** Consume it with a bound such as
    /// `take(n)`; it is deliberately not what `for x in &list` iterates.
    pub fn cycle(&self) -> Cycle<'_, T> {
        Cycle {
            arena: &self.arena,
            current: self.head(),
        }
    }

    // --- Internals ---

    #[inline]
    fn head(&self) -> Option<usize> {
        self.tail.map(|tail| self.next_of(tail))
    }

    #[inline]
    fn next_of(&self, idx: usize) -> usize {
        self.arena.next(idx).unwrap_or(idx)
    }

    fn tail_slot(&self) -> usize {
        match self.tail {
            Some(tail) => tail,
            None => unreachable!("tail lookup on an empty ring"),
        }
    }

    /// Slot of the element at `index < len`.
    fn slot_at(&self, index: usize) -> usize {
        let mut idx = self.next_of(self.tail_slot());
        for _ in 0..index {
            idx = self.next_of(idx);
        }
        idx
    }

    /// Links the unlinked node `idx` directly after `current`.
    fn link_after(&mut self, current: usize, idx: usize) {
        let next = self.next_of(current);
        self.arena.set_next(idx, Some(next));
        self.arena.set_next(current, Some(idx));
    }
}

impl<T> AnyList<T> for CircularLinkedList<T> {
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

impl<'a, T> IntoIterator for &'a CircularLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct IntoIter<T> {
    list: CircularLinkedList<T>,
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

impl<T> IntoIterator for CircularLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

// --- Traits ---

impl<T> Default for CircularLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CircularLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for CircularLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_joined(f, self.iter())
    }
}

impl<T: PartialEq> PartialEq for CircularLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Extend<T> for CircularLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for CircularLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

// --- Tests ---
