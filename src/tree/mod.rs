mod node;
mod ordered_tree;
mod rotation;

pub use node::Node;
pub use ordered_tree::OrderedTree;
pub use rotation::Rotation;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handle to a node stored in an `OrderedTree`.
///
/// Handles are only meaningful for the tree that produced them, and only
/// until that tree is cleared. Stale or foreign handles are detected by the
/// tree and never resolve to a live node.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    stamp: u64,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.index, self.stamp)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

// Every tree (and every cleared tree) gets its own stamp
static NEXT_STAMP: AtomicU64 = AtomicU64::new(0);

fn next_stamp() -> u64 {
    take_stamp(&NEXT_STAMP)
}

/// Hand out the current value of `counter` and advance it.
/// Panics instead of wrapping around, since a reused stamp would let stale
/// handles resolve to live nodes
fn take_stamp(counter: &AtomicU64) -> u64 {
    match counter.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |s| s.checked_add(1)) {
        Ok(stamp) => stamp,
        Err(_) => panic!("tree stamps exhausted"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stamps_never_wrap() {
        let counter = AtomicU64::new(u64::MAX - 2);
        assert_eq!(take_stamp(&counter), u64::MAX - 2);
        assert_eq!(take_stamp(&counter), u64::MAX - 1);
        assert_eq!(counter.load(Ordering::Relaxed), u64::MAX);
    }

    #[test]
    #[should_panic(expected = "tree stamps exhausted")]
    fn exhausted_stamps_panic() {
        let counter = AtomicU64::new(u64::MAX);
        take_stamp(&counter);
    }

    #[test]
    fn display_tells_generations_apart() {
        let old = NodeId { index: 0, stamp: 3 };
        let new = NodeId { index: 0, stamp: 4 };
        assert_eq!(old.to_string(), "#0@3");
        assert_ne!(old.to_string(), new.to_string());
    }
}
