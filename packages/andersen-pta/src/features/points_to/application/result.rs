//! Name-keyed analysis result
//!
//! Keys and members are display names (`x`, `*x`, `alloc:N`). Only nodes
//! with a non-empty points-to set are reported. Distinct variables that
//! share a display name are reported under one key with the union of
//! their sets.

use crate::features::points_to::domain::ConstraintGraph;
use crate::features::points_to::ports::StatementSource;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PtaResult {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl PtaResult {
    /// Extract display-named sets from a solved graph
    pub fn from_graph<S: StatementSource + ?Sized>(graph: &ConstraintGraph, source: &S) -> Self {
        let mut entries: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for (id, node) in graph.nodes() {
            let points_to = graph.points_to(id);
            if points_to.is_empty() {
                continue;
            }
            let members = entries.entry(node.display_name(source)).or_default();
            for pointee in points_to {
                members.insert(graph.node(pointee).display_name(source));
            }
        }

        Self { entries }
    }

    pub fn points_to(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(name)
    }

    /// True if both names are reported and share at least one pointee
    pub fn may_alias(&self, a: &str, b: &str) -> bool {
        match (self.entries.get(a), self.entries.get(b)) {
            (Some(pa), Some(pb)) => !pa.is_disjoint(pb),
            _ => false,
        }
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn as_map(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.entries
    }

    pub fn into_map(self) -> BTreeMap<String, BTreeSet<String>> {
        self.entries
    }
}

impl From<BTreeMap<String, BTreeSet<String>>> for PtaResult {
    fn from(entries: BTreeMap<String, BTreeSet<String>>) -> Self {
        Self { entries }
    }
}
