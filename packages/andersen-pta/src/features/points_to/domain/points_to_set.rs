//! Deduplicated node sets
//!
//! Sorted-vector set used for both points-to sets and successor sets:
//! - Insert: O(log n) search + O(n) shift
//! - Union: O(n + m) merge, reports whether the set grew
//! - Iteration in ascending id order (deterministic)

use super::node::NodeId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeSet {
    elements: Vec<NodeId>,
}

/// Points-to sets are node sets whose members are pointees
pub type PointsToSet = NodeSet;

impl NodeSet {
    #[inline]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Insert an element. Returns true if it was not present.
    pub fn insert(&mut self, element: NodeId) -> bool {
        match self.elements.binary_search(&element) {
            Ok(_) => false,
            Err(pos) => {
                self.elements.insert(pos, element);
                true
            }
        }
    }

    #[inline]
    pub fn contains(&self, element: NodeId) -> bool {
        self.elements.binary_search(&element).is_ok()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.elements.iter().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[NodeId] {
        &self.elements
    }

    /// self = self ∪ other. Returns true if self grew.
    pub fn union_with(&mut self, other: &NodeSet) -> bool {
        if other.is_empty() {
            return false;
        }
        if self.is_empty() {
            self.elements.clone_from(&other.elements);
            return true;
        }
        if other.is_subset(self) {
            return false;
        }

        let mut merged = Vec::with_capacity(self.elements.len() + other.elements.len());
        let mut i = 0;
        let mut j = 0;
        while i < self.elements.len() && j < other.elements.len() {
            match self.elements[i].cmp(&other.elements[j]) {
                Ordering::Less => {
                    merged.push(self.elements[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    merged.push(other.elements[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    merged.push(self.elements[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        merged.extend_from_slice(&self.elements[i..]);
        merged.extend_from_slice(&other.elements[j..]);

        self.elements = merged;
        true
    }

    /// Check self ⊆ other
    pub fn is_subset(&self, other: &NodeSet) -> bool {
        if self.len() > other.len() {
            return false;
        }
        let mut j = 0;
        for &e in &self.elements {
            while j < other.elements.len() && other.elements[j] < e {
                j += 1;
            }
            if j == other.elements.len() || other.elements[j] != e {
                return false;
            }
            j += 1;
        }
        true
    }

    /// Remove and return all elements
    #[inline]
    pub fn take(&mut self) -> NodeSet {
        std::mem::take(self)
    }
}

impl FromIterator<NodeId> for NodeSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        let mut elements: Vec<NodeId> = iter.into_iter().collect();
        elements.sort_unstable();
        elements.dedup();
        Self { elements }
    }
}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter().copied()
    }
}
