//! Constraint graph nodes
//!
//! One node exists per distinct (subject, role) pair. Nodes live in the
//! graph's arena and refer to each other only through `NodeId`.

use super::points_to_set::NodeSet;
use crate::features::ir::{AllocSiteId, VarId};
use crate::features::points_to::ports::StatementSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Arena index of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// What a node stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Var(VarId),
    Alloc(AllocSiteId),
}

impl Subject {
    #[inline]
    pub fn as_var(self) -> Option<VarId> {
        match self {
            Subject::Var(var) => Some(var),
            Subject::Alloc(_) => None,
        }
    }
}

/// `Dereferenced` stands for "whatever the subject points to". Only the
/// optimizer's auxiliary graph creates such nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NodeRole {
    #[default]
    Direct,
    Dereferenced,
}

/// Lookup key for get-or-create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub subject: Subject,
    pub role: NodeRole,
}

impl NodeKey {
    #[inline]
    pub fn direct(subject: Subject) -> Self {
        Self {
            subject,
            role: NodeRole::Direct,
        }
    }

    #[inline]
    pub fn deref(var: VarId) -> Self {
        Self {
            subject: Subject::Var(var),
            role: NodeRole::Dereferenced,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub subject: Subject,
    pub role: NodeRole,

    /// Analysis result; only ever grows
    pub points_to: NodeSet,

    /// Nodes this node's points-to set flows into
    pub successors: NodeSet,

    /// Nodes collapsed into this one (excluding itself)
    pub absorbed: Vec<NodeId>,
}

impl Node {
    pub fn new(key: NodeKey) -> Self {
        Self {
            subject: key.subject,
            role: key.role,
            points_to: NodeSet::new(),
            successors: NodeSet::new(),
            absorbed: Vec::new(),
        }
    }

    #[inline]
    pub fn key(&self) -> NodeKey {
        NodeKey {
            subject: self.subject,
            role: self.role,
        }
    }

    #[inline]
    pub fn is_deref(&self) -> bool {
        self.role == NodeRole::Dereferenced
    }

    /// Stable display identifier: `x`, `*x` or `alloc:N`
    pub fn display_name<S: StatementSource + ?Sized>(&self, source: &S) -> String {
        let base = match self.subject {
            Subject::Var(var) => source.var_name(var).to_string(),
            Subject::Alloc(site) => source.alloc_name(site),
        };
        match self.role {
            NodeRole::Direct => base,
            NodeRole::Dereferenced => format!("*{}", base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ir::Function;

    #[test]
    fn test_display_names() {
        let mut f = Function::new("names");
        let p = f.create_var("p");
        let site = f.create_alloc(p).unwrap();

        assert_eq!(Node::new(NodeKey::direct(Subject::Var(p))).display_name(&f), "p");
        assert_eq!(Node::new(NodeKey::deref(p)).display_name(&f), "*p");
        assert_eq!(
            Node::new(NodeKey::direct(Subject::Alloc(site))).display_name(&f),
            "alloc:0"
        );
    }

    #[test]
    #[should_panic]
    fn test_display_name_of_foreign_variable_panics() {
        let f = Function::new("empty");
        Node::new(NodeKey::direct(Subject::Var(VarId::new(3)))).display_name(&f);
    }
}
