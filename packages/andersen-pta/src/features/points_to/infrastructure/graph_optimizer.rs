//! Offline cycle analysis
//!
//! Builds an auxiliary graph over the statements where dereferences are
//! explicit, then classifies its SCCs:
//!
//! ```text
//! x = y   : y → x
//! t = *s  : *s → t
//! *t = s  : s → *t
//! ```
//!
//! - SCC without dereferenced nodes: a pure copy cycle, every member ends
//!   with the same points-to set. Collapsed before solving.
//! - SCC with dereferenced nodes: each `*p` that lies on a cycle whose other
//!   nodes are all direct yields a redirect `(p, r)`. Whatever `p` points to
//!   provably ends with the same set as `r`, so the solver merges them as
//!   soon as the pointee is discovered.
//!
//! # References
//! - Hardekopf & Lin "Exploiting Pointer and Location Equivalence" (SAS 2007)

use super::scc_detector::{find_sccs, tarjan_scc, SccStats};
use crate::features::ir::{Stmt, VarId};
use crate::features::points_to::domain::{ConstraintGraph, NodeId, NodeKey};
use crate::features::points_to::ports::StatementSource;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Pointees of `pointer` share the points-to set of `representative`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Redirect {
    pub pointer: VarId,
    pub representative: VarId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizationHints {
    /// Variable groups to collapse before solving (each sorted, size > 1)
    pub collapse: Vec<Vec<VarId>>,

    /// At most one redirect per pointer
    pub redirects: Vec<Redirect>,
}

impl OptimizationHints {
    pub fn is_empty(&self) -> bool {
        self.collapse.is_empty() && self.redirects.is_empty()
    }

    /// Number of nodes removed by collapsing
    pub fn collapsible_nodes(&self) -> usize {
        self.collapse.iter().map(|g| g.len() - 1).sum()
    }
}

#[derive(Debug, Clone, Default)]
pub struct OptimizerStats {
    pub scc: SccStats,
    pub pure_sccs: usize,
    pub mixed_sccs: usize,
}

/// Auxiliary graph and its SCC classification
#[derive(Debug)]
pub struct GraphOptimizer {
    graph: ConstraintGraph,
    stats: OptimizerStats,
}

impl GraphOptimizer {
    /// Build the auxiliary graph for `source`
    pub fn new<S: StatementSource + ?Sized>(source: &S) -> Self {
        let mut graph = ConstraintGraph::new();

        for stmt in source.statements() {
            match *stmt {
                Stmt::Declare { var } | Stmt::Alloc { target: var, .. } => {
                    graph.var_node(var);
                }
                Stmt::AddrOf { target, operand } => {
                    graph.var_node(target);
                    graph.var_node(operand);
                }
                Stmt::Copy { target, operand } => {
                    let src = graph.var_node(operand);
                    let dst = graph.var_node(target);
                    graph.add_edge(src, dst);
                }
                Stmt::Load { target, source } => {
                    let src = graph.get_or_create(NodeKey::deref(source));
                    let dst = graph.var_node(target);
                    graph.add_edge(src, dst);
                }
                Stmt::Store { target, source } => {
                    let src = graph.var_node(source);
                    let dst = graph.get_or_create(NodeKey::deref(target));
                    graph.add_edge(src, dst);
                }
            }
        }

        Self {
            graph,
            stats: OptimizerStats::default(),
        }
    }

    /// The auxiliary graph (dereferenced nodes included)
    pub fn graph(&self) -> &ConstraintGraph {
        &self.graph
    }

    pub fn stats(&self) -> &OptimizerStats {
        &self.stats
    }

    /// Find SCCs and derive collapse groups and redirects
    pub fn compute_hints(&mut self) -> OptimizationHints {
        let result = find_sccs(&self.graph);
        let mut hints = OptimizationHints::default();
        let mut stats = OptimizerStats {
            scc: result.stats.clone(),
            ..Default::default()
        };

        for scc in result.cyclic() {
            let (derefs, directs): (Vec<NodeId>, Vec<NodeId>) =
                scc.iter().copied().partition(|&n| self.graph.node(n).is_deref());

            if derefs.is_empty() {
                stats.pure_sccs += 1;
                let mut group: Vec<VarId> = directs.iter().filter_map(|&n| self.var_of(n)).collect();
                group.sort_unstable();
                hints.collapse.push(group);
            } else {
                stats.mixed_sccs += 1;
                for &deref in &derefs {
                    if let Some(redirect) = self.redirect_for(deref, &directs) {
                        hints.redirects.push(redirect);
                    }
                }
            }
        }

        hints.collapse.sort();
        hints.redirects.sort();

        debug!(
            sccs = stats.scc.cyclic_count,
            pure = stats.pure_sccs,
            mixed = stats.mixed_sccs,
            collapse_groups = hints.collapse.len(),
            redirects = hints.redirects.len(),
            "cycle analysis done"
        );
        self.stats = stats;
        hints
    }

    /// Cycle through `deref` that touches no other dereferenced node
    ///
    /// Re-runs Tarjan on `deref` plus the direct members of its SCC and
    /// picks the smallest direct variable sharing a component with it.
    fn redirect_for(&self, deref: NodeId, directs: &[NodeId]) -> Option<Redirect> {
        let allowed: FxHashSet<NodeId> = directs.iter().copied().chain([deref]).collect();
        let graph = &self.graph;
        let sccs = tarjan_scc([deref], |n| {
            graph
                .node(n)
                .successors
                .iter()
                .filter(|m| allowed.contains(m))
                .collect::<Vec<_>>()
        });

        let pointer = self.var_of(deref)?;
        let representative = sccs
            .into_iter()
            .find(|scc| scc.contains(&deref))?
            .into_iter()
            .filter(|&n| n != deref)
            .filter_map(|n| self.var_of(n))
            .min()?;

        Some(Redirect {
            pointer,
            representative,
        })
    }

    fn var_of(&self, node: NodeId) -> Option<VarId> {
        self.graph.node(node).subject.as_var()
    }
}
