//! An ordered binary search tree whose nodes keep a link to their parent,
//! together with the single-rotation primitive self-balancing trees are
//! built from.
//!
//! ```
//! use rotating_bst::{OrderedTree, Rotation};
//!
//! let mut tree: OrderedTree<i32> = vec![2, 1, 3].into_iter().collect();
//! let root = tree.root();
//! let left = tree.find(&1);
//! assert_eq!(tree.rotate(left, root), Ok(Rotation::Right));
//! assert_eq!(tree.root(), left);
//! assert_eq!(tree.size(), 3);
//! ```
//!
//! Balancing policy (when to rotate and on which nodes) is left to the caller.

#[cfg(test)]
mod tests;

pub mod error;

pub mod tree;

#[cfg(feature = "sequence-generator")]
pub mod sequence;

pub use error::TreeError;
pub use tree::{Node, NodeId, OrderedTree, Rotation};
