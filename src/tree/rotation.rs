use super::*;
use crate::error::TreeError;
use tracing::{debug, trace};

/// Direction of a performed rotation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rotation {
    /// The child was the left child of its parent, and the parent moved down to its right
    Right,
    /// The child was the right child of its parent, and the parent moved down to its left
    Left,
}

impl<V: Ord> OrderedTree<V> {
    /// Move `child` up into the position of `parent`, making `parent` one of its children.
    ///
    /// When `child` is the left child of `parent` this is a right rotation,
    /// when it is the right child this is a left rotation:
    /// ```text
    ///        p             c
    ///       / \           / \
    ///      c   z   <->   x   p
    ///     / \               / \
    ///    x   t             t   z
    /// ```
    /// The subtree `t` changes sides, the grandparent (or the tree root, when
    /// `parent` was the root) is redirected to `child`, and every parent link
    /// involved is updated. No other node is touched and the in-order sequence
    /// of values does not change.
    ///
    /// Rotating the same pair back in the opposite order restores the
    /// original shape.
    ///
    /// Fails, without modifying the tree, with:
    /// - `TreeError::NullReference` if either node is absent
    /// - `TreeError::InvalidRelationship` if `child` is not currently a direct
    ///   child of `parent` in this tree
    pub fn rotate(
        &mut self,
        child: Option<NodeId>,
        parent: Option<NodeId>,
    ) -> Result<Rotation, TreeError> {
        let (child, parent) = match (child, parent) {
            (Some(child), Some(parent)) => (child, parent),
            _ => {
                debug!(?child, ?parent, "rotate: missing node");
                return Err(TreeError::NullReference);
            }
        };
        let rotation = self.rotation_between(child, parent)?;

        // Must be read before `parent` is relinked
        let grandparent = self.get(parent).parent();

        match rotation {
            Rotation::Right => self.rotate_right(child, parent),
            Rotation::Left => self.rotate_left(child, parent),
        }
        self.reattach(child, parent, grandparent);

        trace!(
            child = %child,
            parent = %parent,
            ?rotation,
            new_root = grandparent.is_none(),
            "rotate: done"
        );
        Ok(rotation)
    }

    /// Check the pair and decide which rotation it calls for
    fn rotation_between(&self, child: NodeId, parent: NodeId) -> Result<Rotation, TreeError> {
        let invalid = TreeError::InvalidRelationship { child, parent };
        if !self.owns(child) || !self.owns(parent) {
            debug!(%child, %parent, "rotate: foreign node");
            return Err(invalid);
        }

        match self.get(parent).side_of(child) {
            Some(Side::Left) => Ok(Rotation::Right),
            Some(Side::Right) => Ok(Rotation::Left),
            None => {
                debug!(%child, %parent, "rotate: nodes are not parent and child");
                Err(invalid)
            }
        }
    }

    /// `child` is the left child of `parent`
    fn rotate_right(&mut self, child: NodeId, parent: NodeId) {
        let moved = self.get(child).right();

        self.get_mut(child).set_right(Some(parent));
        self.get_mut(parent).set_parent(Some(child));
        self.get_mut(parent).set_left(moved);
        if let Some(moved) = moved {
            self.get_mut(moved).set_parent(Some(parent));
        }
    }

    /// `child` is the right child of `parent`
    fn rotate_left(&mut self, child: NodeId, parent: NodeId) {
        let moved = self.get(child).left();

        self.get_mut(child).set_left(Some(parent));
        self.get_mut(parent).set_parent(Some(child));
        self.get_mut(parent).set_right(moved);
        if let Some(moved) = moved {
            self.get_mut(moved).set_parent(Some(parent));
        }
    }

    /// Hang `child` where `parent` used to be: under `grandparent`, or as the
    /// tree root when there is none
    fn reattach(&mut self, child: NodeId, parent: NodeId, grandparent: Option<NodeId>) {
        self.get_mut(child).set_parent(grandparent);
        match grandparent {
            None => self.root = Some(child),
            Some(grandparent) => {
                // The grandparent was not modified yet, so it still points to `parent`
                let side = self.get(grandparent).side_of(parent);
                debug_assert!(side.is_some(), "broken parent link at {}", parent);
                if let Some(side) = side {
                    self.get_mut(grandparent).set_child(side, Some(child));
                }
            }
        }
    }
}
