//! Head-only singly linked list built from owned boxes.
//!
//! Each node owns the next one. Only the head is tracked, so `add` walks the
//! whole chain and `len` counts by traversal. For O(1) appends use
//! [`DoublyLinkedList`](super::DoublyLinkedList) or
//! [`CircularLinkedList`](super::CircularLinkedList).

use core::fmt;

use super::{AnyList, check_index, fmt_joined};
use crate::error::{CollectionError, Result};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    data: T,
    next: Link<T>,
}

/// A singly linked list that tracks only its head.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Counts the nodes by walking the chain; O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    // --- Modification ---

    /// Appends `data` at the tail; O(n) since the tail is found by walking.
    pub fn add(&mut self, data: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { data, next: None }));
    }

    pub fn push_front(&mut self, data: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { data, next }));
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            node.data
        })
    }

    /// Inserts `data` so that it occupies position `index`.
    pub fn insert_before(&mut self, data: T, index: usize) -> Result<()> {
        check_index(index, self.len())?;
        self.splice_in(data, index)
    }

    /// Inserts `data` directly after the element at `index`.
    pub fn insert_after(&mut self, data: T, index: usize) -> Result<()> {
        check_index(index, self.len())?;
        self.splice_in(data, index + 1)
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let removed = match self.link_at(index) {
            Some(link) => link.take().map(|node| {
                let node = *node;
                *link = node.next;
                node.data
            }),
            None => None,
        };
        removed.ok_or_else(|| CollectionError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn clear(&mut self) {
        drop_chain(self.head.take());
    }

    // --- Access ---

    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.data)
    }

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

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    // --- Internals ---

    /// The link that holds position `index`; `index == len` yields the empty
    /// link past the tail.
    fn link_at(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => return None,
            }
        }
        Some(cursor)
    }

    fn splice_in(&mut self, data: T, index: usize) -> Result<()> {
        let Some(link) = self.link_at(index) else {
            return Err(CollectionError::OutOfRange {
                index,
                len: self.len(),
            });
        };
        let next = link.take();
        *link = Some(Box::new(Node { data, next }));
        Ok(())
    }
}

/// Unlinks the chain node by node so long lists do not recurse in `Drop`.
fn drop_chain<T>(mut link: Link<T>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        drop_chain(self.head.take());
    }
}

impl<T> AnyList<T> for SinglyLinkedList<T> {
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

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Traits ---

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_joined(f, self.iter())
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Walk to the tail once instead of once per element.
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for data in iter {
            let node = cursor.insert(Box::new(Node { data, next: None }));
            cursor = &mut node.next;
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

// --- Tests ---
