//! The ways tree operations can fail. None of these are fatal: they describe an outcome the
//! caller is expected to report and move on from.

/// Errors returned by [`Tree`][crate::Tree] and [`Traversal`][crate::Traversal] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError<K> {
    /// The operation needs a root but the tree has no nodes.
    #[error("the tree is empty")]
    EmptyTree,
    /// `delete` was asked to remove a key the tree doesn't hold. The key is handed back so the
    /// caller can roll back whatever it did in anticipation of the delete.
    #[error("key not found in the tree")]
    KeyNotFound(K),
    /// `try_next` was called on a traversal with no keys left.
    #[error("the traversal has no more keys")]
    IteratorExhausted,
    /// Traversals are read-only snapshots and can't remove keys from the tree.
    #[error("removing keys during a traversal is not supported")]
    UnsupportedRemoval,
}
