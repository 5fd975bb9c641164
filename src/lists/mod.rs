//! Linked list family.
//!
//! Four variants share one positional contract, captured by [`AnyList`]:
//!
//! | Variant | Links | `add` |
//! |---|---|---|
//! | [`SinglyLinkedList`] | owned `Box` chain, head only | O(n) |
//! | [`CircularLinkedList`] | index ring, tail tracked | O(1) |
//! | [`DoublyLinkedList`] | index chain, head + tail | O(1) |
//! | [`CircularDoublyLinkedList`] | index ring, head tracked | O(1) |
//!
//! The index-linked variants keep their nodes in a slot arena (`arena.rs`) so
//! back-references and rings are plain indices rather than shared ownership.

pub(crate) mod arena;
pub mod circular;
pub mod circular_doubly;
pub mod doubly;
pub mod singly;

use core::fmt;

use crate::error::{CollectionError, Result};

pub use arena::{Cycle, Iter};
pub use circular::CircularLinkedList;
pub use circular_doubly::CircularDoublyLinkedList;
pub use doubly::DoublyLinkedList;
pub use singly::SinglyLinkedList;

/// An object-style abstraction over the positional list variants.
///
/// Implemented by every list in this module so callers (and tests) can be
/// written once against the shared contract.
pub trait AnyList<T> {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `data` at the tail.
    fn add(&mut self, data: T);

    /// Inserts `data` so that it ends up at position `index`.
    ///
    /// Fails with [`CollectionError::OutOfRange`] if the list is empty or
    /// `index >= len`.
    fn insert_before(&mut self, data: T, index: usize) -> Result<()>;

    /// Inserts `data` directly after the element at `index`.
    ///
    /// Fails with [`CollectionError::OutOfRange`] if the list is empty or
    /// `index >= len`.
    fn insert_after(&mut self, data: T, index: usize) -> Result<()>;

    /// Returns the element at `index`, or `None` when out of range.
    fn get(&self, index: usize) -> Option<&T>;

    /// Position of the first element equal to `data`.
    fn index_of(&self, data: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Removes and returns the element at `index`.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Removes every element.
    fn clear(&mut self);
}

/// Rejects `index` unless it addresses an existing element.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(CollectionError::OutOfRange { index, len })
    }
}

/// Writes `items` separated by commas.
pub(crate) fn fmt_joined<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
