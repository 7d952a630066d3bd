//! Andersen's Points-to Analysis Solver
//!
//! Inclusion-based worklist fixpoint over the constraint graph:
//! - Copy edges are static and come from the builder
//! - Load/store edges are born during solving, once the dereferenced
//!   pointer's points-to set names the object read or written
//! - Optional cycle hints collapse nodes offline and merge pointees of
//!   redirected pointers online
//!
//! # Complexity
//! - Theoretical: O(n³) worst case
//! - Each node's set only grows and is bounded by the node count, so the
//!   worklist always drains
//!
//! # References
//! - Andersen, L. O. "Program Analysis and Specialization for C" (PhD 1994)
//! - Hardekopf & Lin "The Ant and the Grasshopper" (PLDI 2007)

use super::graph_optimizer::OptimizationHints;
use crate::features::ir::VarId;
use crate::features::points_to::domain::{ConstraintGraph, NodeId, Worklist};
use crate::features::points_to::ports::StatementSource;
use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

/// How a call to [`AndersenSolver::solve`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Worklist drained, the graph is at its fixpoint
    Converged,
    /// Stopped after `limit` pops with work still queued
    IterationLimit { limit: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverStats {
    /// Worklist pops
    pub iterations: usize,
    /// Successor sets that strictly grew
    pub propagations: usize,
    /// Edges materialized from loads and stores
    pub dynamic_edges: usize,
    /// Nodes merged before solving
    pub offline_collapsed: usize,
    /// Pointees merged through redirects while solving
    pub online_merges: usize,
}

pub struct AndersenSolver<'a, S: StatementSource + ?Sized> {
    source: &'a S,
    graph: ConstraintGraph,
    worklist: Worklist,

    /// pointer var → node its pointees are merged with
    redirects: FxHashMap<VarId, NodeId>,

    stats: SolverStats,
}

impl<'a, S: StatementSource + ?Sized> AndersenSolver<'a, S> {
    /// Build the constraint graph and seed the worklist
    pub fn new(source: &'a S) -> Self {
        let (graph, worklist) = ConstraintGraph::from_statements(source);
        Self {
            source,
            graph,
            worklist,
            redirects: FxHashMap::default(),
            stats: SolverStats::default(),
        }
    }

    /// Collapse pure copy cycles now and keep redirects for solving
    pub fn apply_hints(&mut self, hints: &OptimizationHints) {
        for group in &hints.collapse {
            let Some((&first, rest)) = group.split_first() else {
                continue;
            };
            let first = self.graph.var_node(first);
            for &var in rest {
                let node = self.graph.var_node(var);
                if let Some(root) = self.graph.merge(first, node) {
                    self.stats.offline_collapsed += 1;
                    if !self.graph.node(root).points_to.is_empty() {
                        self.worklist.push(root);
                    }
                }
            }
        }

        for redirect in &hints.redirects {
            let target = self.graph.var_node(redirect.representative);
            self.redirects.insert(redirect.pointer, target);
        }

        debug!(
            collapsed = self.stats.offline_collapsed,
            redirects = self.redirects.len(),
            "cycle hints applied"
        );
    }

    /// Run until the worklist drains or `max_iterations` pops were made
    pub fn solve(&mut self, max_iterations: Option<usize>) -> SolveOutcome {
        loop {
            if let Some(limit) = max_iterations {
                if self.stats.iterations >= limit && !self.worklist.is_empty() {
                    warn!(
                        limit,
                        pending = self.worklist.len(),
                        "iteration limit reached before fixpoint"
                    );
                    return SolveOutcome::IterationLimit { limit };
                }
            }
            if !self.step() {
                break;
            }
        }

        debug!(
            iterations = self.stats.iterations,
            propagations = self.stats.propagations,
            dynamic_edges = self.stats.dynamic_edges,
            online_merges = self.stats.online_merges,
            "fixpoint reached"
        );
        SolveOutcome::Converged
    }

    /// Process one worklist entry. Returns false if there was none.
    pub fn step(&mut self) -> bool {
        let Some(popped) = self.worklist.pop() else {
            return false;
        };
        self.stats.iterations += 1;

        let mut v = self.graph.representative(popped);
        if !self.redirects.is_empty() {
            self.merge_redirected_pointees(v);
            v = self.graph.representative(v);
        }

        let points_to = self.graph.node(v).points_to.clone();
        trace!(node = %v, pts = points_to.len(), "pop");

        // Loads and stores through any variable of v's class
        let source = self.source;
        for var in self.class_vars(v) {
            let loads = source.loads_from(var);
            let stores = source.stores_into(var);
            if loads.is_empty() && stores.is_empty() {
                continue;
            }
            for a in &points_to {
                for load in loads {
                    let dst = self.graph.var_node(load.target);
                    if self.graph.add_edge(a, dst) {
                        self.stats.dynamic_edges += 1;
                        let a = self.graph.representative(a);
                        self.worklist.push(a);
                    }
                }
                for store in stores {
                    let src = self.graph.var_node(store.source);
                    if self.graph.add_edge(src, a) {
                        self.stats.dynamic_edges += 1;
                        let src = self.graph.representative(src);
                        self.worklist.push(src);
                    }
                }
            }
        }

        let successors = self.graph.node(v).successors.clone();
        for q in &successors {
            let q = self.graph.representative(q);
            if q == v {
                continue;
            }
            if self.graph.node_mut(q).points_to.union_with(&points_to) {
                self.stats.propagations += 1;
                self.worklist.push(q);
            }
        }

        true
    }

    /// Queue every representative again
    pub fn enqueue_all(&mut self) {
        let ids: Vec<NodeId> = self.graph.node_ids().collect();
        for id in ids {
            let rep = self.graph.representative(id);
            self.worklist.push(rep);
        }
    }

    /// Merge each pointee of a redirected pointer in `v`'s class with the
    /// pointer's representative
    fn merge_redirected_pointees(&mut self, v: NodeId) {
        let targets: Vec<NodeId> = self
            .class_vars(v)
            .into_iter()
            .filter_map(|var| self.redirects.get(&var).copied())
            .collect();
        if targets.is_empty() {
            return;
        }

        let pointees = self.graph.node(v).points_to.clone();
        for target in targets {
            for a in &pointees {
                if let Some(root) = self.graph.merge(a, target) {
                    self.stats.online_merges += 1;
                    trace!(pointee = %a, into = %root, "redirect merge");
                    self.worklist.push(root);
                }
            }
        }
    }

    /// Variables whose nodes are collapsed into `rep`
    fn class_vars(&self, rep: NodeId) -> Vec<VarId> {
        let node = self.graph.node(rep);
        std::iter::once(rep)
            .chain(node.absorbed.iter().copied())
            .filter_map(|n| self.graph.node(n).subject.as_var())
            .collect()
    }

    pub fn graph(&self) -> &ConstraintGraph {
        &self.graph
    }

    pub fn worklist(&self) -> &Worklist {
        &self.worklist
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }
}
