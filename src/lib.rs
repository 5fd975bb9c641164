//! # Classic Collections
//!
//! Textbook container types written from scratch: linked lists, a binary search
//! tree, a binary heap, a chained hash map, a trie, and the stack/queue/deque
//! adapters built on top of the lists.
//!
//! ## Key Features
//!
//! * **Four list layouts:** singly, doubly, circular and circular doubly linked lists,
//!   all behind the common [`AnyList`] trait.
//! * **Index arena:** the doubly and circular lists store nodes in a `Vec` of slots and
//!   link them by index, so there is no `unsafe` and no reference counting.
//! * **Insertion-ordered trie:** [`Trie`] keeps each node's edges in an `ordermap`
//!   map, so iteration replays words in the order their branches were created.
//! * **Pluggable heap order:** [`BinaryHeap`] takes a [`Min`], [`Max`] or closure
//!   comparator.
//! * **Interoperability:** [`AnyHeap`] and [`AnyDeque`] are implemented for the
//!   standard library's `BinaryHeap` and `VecDeque` as well.
//!
//! ## Errors
//!
//! Fallible operations return [`Result`], carrying a [`CollectionError`]:
//!
//! * `OutOfRange` for list positions that do not exist,
//! * `Empty` for `peek`/`poll` on an empty heap,
//! * `InvalidKey` for an empty hash-map key.
//!
//! ## Examples
//!
//! ### DoublyLinkedList
//!
//! ```rust
//! use classic_collections::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new();
//! list.add(1);
//! list.add(3);
//! list.insert_before(2, 1).unwrap();
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! assert!(list.remove(7).is_err());
//! ```
//!
//! ### BinaryHeap
//!
//! ```rust
//! use classic_collections::{BinaryHeap, Max};
//!
//! let mut heap = BinaryHeap::new();
//! for value in [2, 3, 1, 0] {
//!     heap.add(value);
//! }
//! assert_eq!(heap.poll(), Ok(0));
//!
//! let mut max: BinaryHeap<i32, Max> = BinaryHeap::with_comparator(Max);
//! max.extend([2, 3, 1]);
//! assert_eq!(max.peek(), Ok(&3));
//! ```
//!
//! ### HashMap
//!
//! ```rust
//! use classic_collections::{CollectionError, HashMap};
//!
//! let mut map = HashMap::new();
//! map.set("foo", 1).unwrap();
//! map.set("oof", 2).unwrap(); // same bucket, different key
//!
//! assert_eq!(map.get("foo"), Ok(Some(&1)));
//! assert_eq!(map.get("oof"), Ok(Some(&2)));
//! assert_eq!(map.set("", 3), Err(CollectionError::InvalidKey));
//! ```
//!
//! ### BinarySearchTree
//!
//! ```rust
//! use classic_collections::BinarySearchTree;
//!
//! let mut tree: BinarySearchTree<i32> = [8, 3, 10, 1, 6].into_iter().collect();
//! assert!(tree.delete(&3));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 6, 8, 10]);
//! ```

// --- Module Declarations ---

pub mod error;
pub mod heap;
pub mod lists;
pub mod maps;
pub mod queues;
pub mod trees;

// --- Re-exports ---

pub use error::{CollectionError, Result};
pub use heap::{AnyHeap, BinaryHeap, Comparator, Max, Min};
pub use lists::{
    AnyList, CircularDoublyLinkedList, CircularLinkedList, DoublyLinkedList, SinglyLinkedList,
};
pub use maps::HashMap;
pub use queues::{AnyDeque, Deque, Queue, Stack};
pub use trees::{BinarySearchTree, Trie};
