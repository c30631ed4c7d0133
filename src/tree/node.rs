use super::{NodeId, Side};

/// A single vertex of an `OrderedTree`.
///
/// All three relationships are plain handles into the tree's storage: the
/// tree owns every node, so the parent link never keeps anything alive.
#[derive(Debug)]
pub struct Node<V> {
    value: V,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

impl<V> Node<V> {
    /// Build an unlinked node
    pub(super) fn new(value: V) -> Self {
        Node {
            value,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Return whether this node has no parent. In a tree, only the root does
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(super) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Return which side `id` hangs from, if it is a direct child of this node
    pub(super) fn side_of(&self, id: NodeId) -> Option<Side> {
        if self.left == Some(id) {
            Some(Side::Left)
        } else if self.right == Some(id) {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub(super) fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub(super) fn set_left(&mut self, left: Option<NodeId>) {
        self.left = left;
    }

    pub(super) fn set_right(&mut self, right: Option<NodeId>) {
        self.right = right;
    }

    pub(super) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }
}
