
use crate::tree::{Node, NodeId, OrderedTree};
use std::collections::HashSet;
use tracing_subscriber::EnvFilter;

/// Print tree events when running with `RUST_LOG`
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn node<V: Ord>(tree: &OrderedTree<V>, id: NodeId) -> &Node<V> {
    tree.node(id).expect("handle belongs to the tree")
}

/// Links of every reachable node as (node, parent, left, right), in pre-order.
/// Two trees with the same shape produce the same list
pub fn shape<V: Ord>(
    tree: &OrderedTree<V>,
) -> Vec<(NodeId, Option<NodeId>, Option<NodeId>, Option<NodeId>)> {
    let mut links = Vec::new();
    let mut pending: Vec<NodeId> = tree.root().into_iter().collect();
    while let Some(id) = pending.pop() {
        let n = node(tree, id);
        links.push((id, n.parent(), n.left(), n.right()));
        pending.extend(n.right());
        pending.extend(n.left());
    }
    links
}

/// Every node handle reachable from the root, in pre-order
pub fn all_nodes<V: Ord>(tree: &OrderedTree<V>) -> Vec<NodeId> {
    shape(tree).into_iter().map(|(id, _, _, _)| id).collect()
}

/// Values in sorted (in-order) position
pub fn in_order<V: Ord + Clone>(tree: &OrderedTree<V>) -> Vec<V> {
    let mut values = Vec::new();
    let mut stack = Vec::new();
    let mut current = tree.root();
    loop {
        while let Some(id) = current {
            stack.push(id);
            current = node(tree, id).left();
        }
        match stack.pop() {
            None => break,
            Some(id) => {
                let n = node(tree, id);
                values.push(n.value().clone());
                current = n.right();
            }
        }
    }
    values
}

/// Assert that every child points back to its parent, that the root has no
/// parent and that no node is reachable twice
pub fn assert_links<V: Ord>(tree: &OrderedTree<V>) {
    if let Some(root) = tree.root() {
        assert_eq!(node(tree, root).parent(), None, "root {} has a parent", root);
    }

    let mut seen = HashSet::new();
    let mut pending: Vec<NodeId> = tree.root().into_iter().collect();
    while let Some(id) = pending.pop() {
        assert!(seen.insert(id), "node {} reachable twice", id);
        let n = node(tree, id);
        for child in n.left().into_iter().chain(n.right()) {
            assert_eq!(node(tree, child).parent(), Some(id), "broken back link at {}", child);
            pending.push(child);
        }
    }
    assert_eq!(seen.len(), tree.size());
}

/// Assert the insertion order invariant: left subtrees hold values lesser or
/// equal to their node, right subtrees strictly greater ones
pub fn assert_insert_order<V: Ord + std::fmt::Debug>(tree: &OrderedTree<V>) {
    // (node, lower bound exclusive, upper bound inclusive)
    let mut pending: Vec<(NodeId, Option<&V>, Option<&V>)> =
        tree.root().map(|id| (id, None, None)).into_iter().collect();
    while let Some((id, lower, upper)) = pending.pop() {
        let n = node(tree, id);
        let value = n.value();
        if let Some(lower) = lower {
            assert!(value > lower, "{:?} should be greater than {:?}", value, lower);
        }
        if let Some(upper) = upper {
            assert!(value <= upper, "{:?} should be at most {:?}", value, upper);
        }
        pending.extend(n.left().map(|left| (left, lower, Some(value))));
        pending.extend(n.right().map(|right| (right, Some(value), upper)));
    }
}

pub fn is_sorted<V: Ord>(values: &[V]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
