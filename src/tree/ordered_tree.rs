use super::node::Node;
use super::*;
use crate::error::TreeError;
use tracing::{debug, trace};

/// A binary search tree whose nodes know their parent.
///
/// Nodes live in an arena owned by the tree and refer to each other through
/// `NodeId` handles. Equal values are kept as distinct nodes: on insertion, a
/// value goes left of every node it compares less than or equal to.
#[derive(Debug)]
pub struct OrderedTree<V: Ord> {
    nodes: Vec<Node<V>>,
    pub(super) root: Option<NodeId>,
    stamp: u64,
}

impl<V: Ord> OrderedTree<V> {
    /// Create a new empty tree
    pub fn new() -> Self {
        OrderedTree {
            nodes: Vec::new(),
            root: None,
            stamp: next_stamp(),
        }
    }

    /// Insert a new value into the tree, returning the handle of its node.
    ///
    /// The descent goes left when `value <= current` and right otherwise, so
    /// duplicates pile up to the left of the first equal node they meet.
    pub fn insert(&mut self, value: V) -> NodeId {
        let id = self.allocate(value);

        let mut current = match self.root {
            None => {
                self.root = Some(id);
                trace!(node = %id, "insert: new root");
                return id;
            }
            Some(root) => root,
        };

        let mut depth = 1;
        loop {
            let side = if self.get(id).value() <= self.get(current).value() {
                Side::Left
            } else {
                Side::Right
            };
            match self.get(current).child(side) {
                Some(next) => {
                    current = next;
                    depth += 1;
                }
                None => {
                    // Free slot found: attach
                    self.get_mut(current).set_child(side, Some(id));
                    self.get_mut(id).set_parent(Some(current));
                    trace!(node = %id, parent = %current, ?side, depth, "insert: attached");
                    return id;
                }
            }
        }
    }

    /// Insert a value that may be absent. `None` is rejected with
    /// `TreeError::InvalidArgument` and the tree is left unchanged
    pub fn try_insert(&mut self, value: Option<V>) -> Result<NodeId, TreeError> {
        let value = value.ok_or(TreeError::InvalidArgument)?;
        Ok(self.insert(value))
    }

    /// Return whether `value` is stored in the tree one or more times
    pub fn contains(&self, value: &V) -> bool {
        self.find(value).is_some()
    }

    /// Search for a value that may be absent. `None` is rejected with
    /// `TreeError::InvalidArgument`
    pub fn try_contains(&self, value: Option<&V>) -> Result<bool, TreeError> {
        let value = value.ok_or(TreeError::InvalidArgument)?;
        Ok(self.contains(value))
    }

    /// Return the first node holding a value equal to `value` found while
    /// descending from the root.
    ///
    /// This is the node closest to the root among its duplicates.
    pub fn find(&self, value: &V) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.get(id);
            current = match value.cmp(node.value()) {
                std::cmp::Ordering::Equal => return Some(id),
                std::cmp::Ordering::Less => node.left(),
                std::cmp::Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Return the number of values in the tree, each duplicate counted separately
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = pending.pop() {
            count += 1;
            let node = self.get(id);
            pending.extend(node.left());
            pending.extend(node.right());
        }
        debug_assert_eq!(count, self.nodes.len());
        count
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Remove every value from the tree.
    /// All handles given out before this call become stale
    pub fn clear(&mut self) {
        debug!(dropped = self.nodes.len(), "clear");
        self.root = None;
        self.nodes.clear();
        self.stamp = next_stamp();
    }

    /// Return the handle of the root node, if any
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Return the node behind `id`, or `None` if the handle does not belong to
    /// this tree (it comes from another tree or from before a `clear`)
    pub fn node(&self, id: NodeId) -> Option<&Node<V>> {
        if self.owns(id) {
            Some(self.get(id))
        } else {
            None
        }
    }

    /// Return the number of nodes in the longest path from the root to a leaf.
    /// An empty tree has height 0
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = pending.pop() {
            height = height.max(depth);
            let node = self.get(id);
            pending.extend(node.left().map(|child| (child, depth + 1)));
            pending.extend(node.right().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Return whether `id` refers to a live node of this tree
    pub(super) fn owns(&self, id: NodeId) -> bool {
        id.stamp == self.stamp && id.index < self.nodes.len()
    }

    /// Return the node behind a handle known to be owned by this tree.
    /// Panics on out-of-bounds access
    pub(super) fn get(&self, id: NodeId) -> &Node<V> {
        &self.nodes[id.index]
    }

    pub(super) fn get_mut(&mut self, id: NodeId) -> &mut Node<V> {
        &mut self.nodes[id.index]
    }

    /// Store a new unlinked node
    fn allocate(&mut self, value: V) -> NodeId {
        let id = NodeId {
            index: self.nodes.len(),
            stamp: self.stamp,
        };
        self.nodes.push(Node::new(value));
        id
    }
}

impl<V: Ord> Default for OrderedTree<V> {
    fn default() -> Self {
        OrderedTree::new()
    }
}

impl<V: Ord> std::iter::FromIterator<V> for OrderedTree<V> {
    /// Create a tree by inserting every value in iteration order
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut tree = OrderedTree::new();
        tree.extend(iter);
        tree
    }
}

impl<V: Ord> Extend<V> for OrderedTree<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
