use core::fmt;
use std::collections::VecDeque;

use crate::lists::DoublyLinkedList;
use crate::lists::doubly;

/// A trait for abstraction over different double-ended queue types.
pub trait AnyDeque<T> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn push_back(&mut self, item: T);
    fn push_front(&mut self, item: T);
    fn pop_back(&mut self) -> Option<T>;
    fn pop_front(&mut self) -> Option<T>;
    fn clear(&mut self);
    fn front(&self) -> Option<&T>;
    fn back(&self) -> Option<&T>;
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

/// Double-ended queue over a [`DoublyLinkedList`]; every end operation is O(1).
#[derive(Clone)]
pub struct Deque<T> {
    items: DoublyLinkedList<T>,
}

impl<T> AnyDeque<T> for Deque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.put_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.put_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.get_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.get_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

impl<T> Deque<T> {
    pub const fn new() -> Self {
        Self {
            items: DoublyLinkedList::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn put_front(&mut self, item: T) {
        self.items.push_front(item);
    }

    pub fn put_back(&mut self, item: T) {
        self.items.add(item);
    }

    /// Removes and returns the front item.
    pub fn get_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Removes and returns the back item.
    pub fn get_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Front to back; reversible with `.rev()`.
    pub fn iter(&self) -> doubly::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = doubly::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deque_ops_both_ends() {
        let mut deque = Deque::new();
        deque.put_back(2);
        deque.put_front(1);
        deque.put_back(3);
        assert_eq!(deque.len(), 3);
        assert_eq!(deque.front(), Some(&1));
        assert_eq!(deque.back(), Some(&3));
        assert_eq!(deque.get_back(), Some(3));
        assert_eq!(deque.get_front(), Some(1));
        assert_eq!(deque.get_front(), Some(2));
        assert_eq!(deque.get_front(), None);
        assert_eq!(deque.get_back(), None);
    }

    #[test]
    fn test_deque_ops_iter() {
        let deque: Deque<i32> = (1..=3).collect();
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(deque.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(format!("{deque:?}"), "[1, 2, 3]");
        assert_eq!(deque.clone(), deque);
    }

    #[test]
    fn test_deque_ops_clear() {
        let mut deque: Deque<i32> = (1..=3).collect();
        deque.clear();
        assert!(deque.is_empty());
        assert_eq!(deque.back(), None);
    }

    fn drive<D: AnyDeque<i32>>(deque: &mut D) -> Vec<i32> {
        deque.push_back(2);
        deque.push_front(1);
        deque.push_back(3);
        deque.push_front(0);
        let mut out = Vec::new();
        out.extend(deque.pop_back());
        out.extend(deque.pop_front());
        out.extend(deque.front().copied());
        out.extend(deque.back().copied());
        out.push(deque.len() as i32);
        deque.clear();
        assert!(deque.is_empty());
        out
    }

    #[test]
    fn test_deque_any_deque_matches_vec_deque() {
        let mut ours = Deque::new();
        let mut std_deque = VecDeque::new();
        assert_eq!(drive(&mut ours), drive(&mut std_deque));
        assert_eq!(drive(&mut ours), vec![3, 0, 1, 2, 2]);
    }
}
