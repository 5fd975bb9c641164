pub mod bst;
pub mod trie;

pub use bst::BinarySearchTree;
pub use trie::Trie;
