//! Slot arena backing the index-linked list variants.
//!
//! # Implementation details
//! - **Slots**: a growable `Vec` of slots; a node's address is its slot index.
//! - **Links**: `next`/`prev` are plain `Option<usize>` indices. A node never owns
//!   its neighbours, so rings and back-references need no shared ownership.
//! - **Free list**: released slots are chained through `Vacant::next_free` and
//!   reused by the next allocation, so churn does not grow the vector.

/// A list node stored inside the arena.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) next: Option<usize>,
    /// Unused by the singly linked ring.
    pub(crate) prev: Option<usize>,
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

#[derive(Clone, Debug)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> NodeArena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Number of live nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Stores `data` in a fresh unlinked node and returns its index.
    ///
    /// # Pseudo Code:
    /// ```text
    /// if free_head is some slot:
    ///     free_head = slot.next_free
    ///     slot = Occupied(node)
    /// else:
    ///     push Occupied(node), slot = last index
    /// len += 1
    /// ```
    pub(crate) fn alloc(&mut self, data: T) -> usize {
        let node = Node {
            data,
            next: None,
            prev: None,
        };
        self.len += 1;
        match self.free_head {
            Some(idx) => {
                if let Slot::Vacant { next_free } = self.slots[idx] {
                    self.free_head = next_free;
                }
                self.slots[idx] = Slot::Occupied(node);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Frees the slot at `idx` and hands back its data. Links pointing at the
    /// slot must already have been repaired by the caller.
    pub(crate) fn release(&mut self, idx: usize) -> T {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[idx], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(idx);
                self.len -= 1;
                node.data
            }
            Slot::Vacant { .. } => unreachable!("double release of list slot {idx}"),
        }
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &Node<T> {
        match &self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling list link {idx}"),
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match &mut self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling list link {idx}"),
        }
    }

    #[inline]
    pub(crate) fn next(&self, idx: usize) -> Option<usize> {
        self.node(idx).next
    }

    #[inline]
    pub(crate) fn prev(&self, idx: usize) -> Option<usize> {
        self.node(idx).prev
    }

    #[inline]
    pub(crate) fn set_next(&mut self, idx: usize, next: Option<usize>) {
        self.node_mut(idx).next = next;
    }

    #[inline]
    pub(crate) fn set_prev(&mut self, idx: usize, prev: Option<usize>) {
        self.node_mut(idx).prev = prev;
    }

    /// Drops every node and forgets the free list.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

/// Forward walk over `remaining` nodes starting at `front`, following `next`.
///
/// The count bounds the walk, so the same iterator serves open chains and rings.
pub struct Iter<'a, T> {
    pub(crate) arena: &'a NodeArena<T>,
    pub(crate) front: Option<usize>,
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

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            remaining: self.remaining,
        }
    }
}

/// Endless walk around a ring, following `next` forever.
///
/// **This iterator never terminates on a non-empty ring.** Bound it with
/// [`Iterator::take`] or similar; never drain it with `for` or `collect`.
/// It yields nothing for an empty ring.
pub struct Cycle<'a, T> {
    pub(crate) arena: &'a NodeArena<T>,
    pub(crate) current: Option<usize>,
}

impl<'a, T> Iterator for Cycle<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.node(self.current?);
        self.current = node.next;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            Some(_) => (usize::MAX, None),
            None => (0, Some(0)),
        }
    }
}
