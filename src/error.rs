use crate::tree::NodeId;
use thiserror::Error;

/// Errors returned by the checked tree operations.
///
/// All of them are contract violations by the caller: the tree is left
/// untouched when one is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// An absent value was given to `try_insert` or `try_contains`
    #[error("cannot insert or search for an absent value")]
    InvalidArgument,

    /// `rotate` was called without a child or without a parent
    #[error("rotation requires both a child and a parent node")]
    NullReference,

    /// The nodes given to `rotate` are not a direct child/parent pair of this tree
    #[error("node {child} is not a direct child of node {parent}")]
    InvalidRelationship {
        /// Node that was expected to move up
        child: NodeId,
        /// Node that was expected to move down
        parent: NodeId,
    },
}
