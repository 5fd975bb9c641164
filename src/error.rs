//! Error type shared by every container in the crate.
//!
//! Only operations with a real failure mode return [`Result`]. Lookups that can
//! simply miss (`get`, `index_of`, tree `has`) return `Option`/`bool` instead.

use thiserror::Error;

/// Failures reported by container operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// An index-based list operation addressed a position that does not exist.
    #[error("Index {index} does not exist in the list (len {len})")]
    OutOfRange {
        /// The rejected index
        index: usize,
        /// Number of elements at the time of the call
        len: usize,
    },

    /// `peek`/`poll` on a heap with no elements.
    #[error("Heap is empty")]
    Empty,

    /// Hash map keys must be non-empty strings.
    #[error("Key must be a non-empty string")]
    InvalidKey,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = CollectionError::OutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "Index 4 does not exist in the list (len 2)");
        assert_eq!(CollectionError::Empty.to_string(), "Heap is empty");
        assert_eq!(
            CollectionError::InvalidKey.to_string(),
            "Key must be a non-empty string"
        );
    }
}
