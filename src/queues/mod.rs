//! Stack, queue and deque adapters over the linked lists.
//!
//! Removing from an empty adapter returns `None`.

pub mod deque;
pub mod queue;
pub mod stack;

pub use deque::{AnyDeque, Deque};
pub use queue::Queue;
pub use stack::Stack;
