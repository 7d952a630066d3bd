//! Constraint Graph
//!
//! Arena of nodes addressed by `NodeId`. Edges `src → dst` mean
//! "pts(src) must flow into pts(dst)". Nodes may be collapsed into a
//! shared representative; every query resolves through the
//! representative, so collapsed members observe one shared points-to set.

use super::node::{Node, NodeId, NodeKey, Subject};
use super::points_to_set::{NodeSet, PointsToSet};
use super::worklist::Worklist;
use crate::features::ir::{AllocSiteId, Stmt, VarId};
use crate::features::points_to::infrastructure::union_find::UnionFind;
use crate::features::points_to::ports::StatementSource;
use rustc_hash::FxHashMap;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ConstraintGraph {
    nodes: Vec<Node>,
    index: FxHashMap<NodeKey, NodeId>,
    reps: UnionFind,
}

impl ConstraintGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the solving graph from a statement sequence
    ///
    /// Alloc/AddrOf become base points-to facts and seed the worklist,
    /// Copy becomes a static edge. Load/Store are left to the solver.
    pub fn from_statements<S: StatementSource + ?Sized>(source: &S) -> (Self, Worklist) {
        let mut graph = Self::new();
        let mut worklist = Worklist::new();

        for stmt in source.statements() {
            match *stmt {
                Stmt::Declare { var } => {
                    graph.var_node(var);
                }
                Stmt::Alloc { target, site } => {
                    let node = graph.var_node(target);
                    let site = graph.alloc_node(site);
                    graph.add_points_to(node, site);
                    worklist.push(node);
                }
                Stmt::AddrOf { target, operand } => {
                    let node = graph.var_node(target);
                    let pointee = graph.var_node(operand);
                    graph.add_points_to(node, pointee);
                    worklist.push(node);
                }
                Stmt::Copy { target, operand } => {
                    let src = graph.var_node(operand);
                    let dst = graph.var_node(target);
                    graph.add_edge(src, dst);
                }
                Stmt::Load { .. } | Stmt::Store { .. } => {}
            }
        }

        debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            seeded = worklist.len(),
            "constraint graph built"
        );
        (graph, worklist)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Node Management
    // ═══════════════════════════════════════════════════════════════════════

    pub fn get_or_create(&mut self, key: NodeKey) -> NodeId {
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(Node::new(key));
        self.index.insert(key, id);
        self.reps.make_set(id);
        id
    }

    #[inline]
    pub fn var_node(&mut self, var: VarId) -> NodeId {
        self.get_or_create(NodeKey::direct(Subject::Var(var)))
    }

    #[inline]
    pub fn alloc_node(&mut self, site: AllocSiteId) -> NodeId {
        self.get_or_create(NodeKey::direct(Subject::Alloc(site)))
    }

    #[inline]
    pub fn lookup(&self, key: NodeKey) -> Option<NodeId> {
        self.index.get(&key).copied()
    }

    /// Panics if `id` was not created by this graph
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId::new)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::new(i as u32), node))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Representatives
    // ═══════════════════════════════════════════════════════════════════════

    #[inline]
    pub fn representative(&mut self, id: NodeId) -> NodeId {
        self.reps.find(id)
    }

    #[inline]
    pub fn representative_readonly(&self, id: NodeId) -> NodeId {
        self.reps.find_readonly(id)
    }

    /// Number of nodes that still carry their own state
    #[inline]
    pub fn representative_count(&self) -> usize {
        self.reps.count()
    }

    /// Collapse the classes of `a` and `b` into one node
    ///
    /// The surviving representative receives the union of both points-to
    /// and successor sets, with successors rewritten to representatives.
    /// Returns it, or `None` if already collapsed.
    pub fn merge(&mut self, a: NodeId, b: NodeId) -> Option<NodeId> {
        let (root, absorbed) = self.reps.union(a, b)?;

        let gone = &mut self.nodes[absorbed.index()];
        let points_to = gone.points_to.take();
        let successors = gone.successors.take();
        let mut members = std::mem::take(&mut gone.absorbed);
        members.push(absorbed);

        let own = self.nodes[root.index()].successors.take();
        let successors: NodeSet = own
            .iter()
            .chain(successors.iter())
            .map(|s| self.reps.find(s))
            .filter(|&s| s != root)
            .collect();

        let survivor = &mut self.nodes[root.index()];
        survivor.points_to.union_with(&points_to);
        survivor.successors = successors;
        survivor.absorbed.extend(members);
        Some(root)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Edges and Points-to Facts
    // ═══════════════════════════════════════════════════════════════════════

    /// Add edge `src → dst` between representatives
    ///
    /// Returns false if both ends are collapsed into the same node or the
    /// edge already exists. Successors recorded before a merge still
    /// count: an entry whose representative is `dst` is the same edge.
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId) -> bool {
        let src = self.reps.find(src);
        let dst = self.reps.find(dst);
        if src == dst {
            return false;
        }
        let reps = &self.reps;
        let successors = &mut self.nodes[src.index()].successors;
        if successors.contains(dst)
            || successors.iter().any(|s| reps.find_readonly(s) == dst)
        {
            return false;
        }
        successors.insert(dst)
    }

    /// Add a base fact `pointee ∈ pts(node)`
    pub fn add_points_to(&mut self, node: NodeId, pointee: NodeId) -> bool {
        let rep = self.reps.find(node);
        self.nodes[rep.index()].points_to.insert(pointee)
    }

    /// Points-to set of `id`, resolved through its representative
    #[inline]
    pub fn points_to(&self, id: NodeId) -> &PointsToSet {
        &self.node(self.representative_readonly(id)).points_to
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.successors.len()).sum()
    }
}
