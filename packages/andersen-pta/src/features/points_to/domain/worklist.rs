//! FIFO worklist with set semantics
//!
//! A node that is already queued is not queued again.

use super::node::NodeId;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct Worklist {
    queue: VecDeque<NodeId>,
    queued: FxHashSet<NodeId>,
}

impl Worklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `node` unless it is already waiting. Returns true if queued.
    #[inline]
    pub fn push(&mut self, node: NodeId) -> bool {
        if self.queued.insert(node) {
            self.queue.push_back(node);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn pop(&mut self) -> Option<NodeId> {
        let node = self.queue.pop_front()?;
        self.queued.remove(&node);
        Some(node)
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.queued.contains(&node)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_without_duplicates() {
        let mut wl = Worklist::new();
        assert!(wl.push(NodeId::new(2)));
        assert!(wl.push(NodeId::new(1)));
        assert!(!wl.push(NodeId::new(2)));
        assert_eq!(wl.len(), 2);

        assert_eq!(wl.pop(), Some(NodeId::new(2)));
        // Popped nodes may be queued again
        assert!(wl.push(NodeId::new(2)));
        assert_eq!(wl.pop(), Some(NodeId::new(1)));
        assert_eq!(wl.pop(), Some(NodeId::new(2)));
        assert_eq!(wl.pop(), None);
        assert!(wl.is_empty());
    }
}
