//! Property-based tests for the points-to solver
//!
//! Invariants that should hold for ALL generated programs:
//! - Agreement with a naive chaotic-iteration reference solver
//! - Monotonicity: no points-to set ever shrinks between solver steps
//! - Soundness: every copy/load/store constraint holds at the fixpoint
//! - Idempotence: re-solving a converged graph changes nothing
//! - Optimizer equivalence: results are identical with and without cycle hints

mod common;

use andersen_pta::features::ir::Stmt;
use andersen_pta::features::points_to::domain::{
    ConstraintGraph, NodeId, NodeKey, PointsToSet, Subject,
};
use andersen_pta::features::points_to::infrastructure::{
    find_sccs, AndersenSolver, GraphOptimizer, SolveOutcome,
};
use andersen_pta::{AnalysisConfig, Function, PointsToAnalyzer, Preset, PtaError, VarId};
use common::*;
use petgraph::graph::DiGraph;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

// ============================================================================
// Reference solver
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Obj {
    Var(usize),
    Alloc(usize),
}

impl Obj {
    fn name(self) -> String {
        match self {
            Obj::Var(i) => format!("v{i}"),
            Obj::Alloc(k) => format!("alloc:{k}"),
        }
    }
}

/// Apply every constraint until nothing changes
fn reference_solution(ops: &[Op]) -> BTreeMap<String, BTreeSet<String>> {
    let mut pts: BTreeMap<Obj, BTreeSet<Obj>> = BTreeMap::new();

    let mut site = 0;
    for op in ops {
        match *op {
            Op::Alloc(t) => {
                pts.entry(Obj::Var(t)).or_default().insert(Obj::Alloc(site));
                site += 1;
            }
            Op::AddrOf(t, o) => {
                pts.entry(Obj::Var(t)).or_default().insert(Obj::Var(o));
            }
            _ => {}
        }
    }

    fn get(pts: &BTreeMap<Obj, BTreeSet<Obj>>, o: Obj) -> BTreeSet<Obj> {
        pts.get(&o).cloned().unwrap_or_default()
    }

    fn flow(pts: &mut BTreeMap<Obj, BTreeSet<Obj>>, into: Obj, from: &BTreeSet<Obj>) -> bool {
        let set = pts.entry(into).or_default();
        let before = set.len();
        set.extend(from.iter().copied());
        set.len() != before
    }

    loop {
        let mut changed = false;
        for op in ops {
            match *op {
                Op::Copy(t, o) => {
                    let src = get(&pts, Obj::Var(o));
                    changed |= flow(&mut pts, Obj::Var(t), &src);
                }
                Op::Load(t, s) => {
                    for a in get(&pts, Obj::Var(s)) {
                        let src = get(&pts, a);
                        changed |= flow(&mut pts, Obj::Var(t), &src);
                    }
                }
                Op::Store(t, s) => {
                    let src = get(&pts, Obj::Var(s));
                    for a in get(&pts, Obj::Var(t)) {
                        changed |= flow(&mut pts, a, &src);
                    }
                }
                Op::Alloc(_) | Op::AddrOf(..) => {}
            }
        }
        if !changed {
            break;
        }
    }

    pts.into_iter()
        .filter(|(_, set)| !set.is_empty())
        .map(|(o, set)| (o.name(), set.into_iter().map(Obj::name).collect()))
        .collect()
}

// ============================================================================
// Helpers
// ============================================================================

const VARS: usize = 8;

fn node(graph: &ConstraintGraph, var: VarId) -> NodeId {
    graph
        .lookup(NodeKey::direct(Subject::Var(var)))
        .expect("declared variable has a node")
}

fn hinted_solver(f: &Function) -> AndersenSolver<'_, Function> {
    let hints = GraphOptimizer::new(f).compute_hints();
    let mut solver = AndersenSolver::new(f);
    solver.apply_hints(&hints);
    solver
}

/// Points-to set of every node, resolved through representatives
fn snapshot(solver: &AndersenSolver<'_, Function>) -> Vec<PointsToSet> {
    let g = solver.graph();
    g.node_ids().map(|id| g.points_to(id).clone()).collect()
}

fn analyze(f: &Function, preset: Preset) -> BTreeMap<String, BTreeSet<String>> {
    PointsToAnalyzer::new(AnalysisConfig::from_preset(preset))
        .analyze(f)
        .unwrap()
        .result
        .into_map()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_matches_reference(ops in arb_ops(VARS, 24)) {
        let f = build_ops(VARS, &ops);
        let expected = reference_solution(&ops);

        prop_assert_eq!(&analyze(&f, Preset::Thorough), &expected);
        prop_assert_eq!(&analyze(&f, Preset::Balanced), &expected);
    }

    #[test]
    fn prop_optimizer_equivalence(ops in arb_ops(5, 40)) {
        let f = build_ops(5, &ops);
        prop_assert_eq!(analyze(&f, Preset::Balanced), analyze(&f, Preset::Thorough));
    }

    #[test]
    fn prop_monotone_steps(ops in arb_ops(VARS, 24), hinted in any::<bool>()) {
        let f = build_ops(VARS, &ops);
        let mut solver = if hinted { hinted_solver(&f) } else { AndersenSolver::new(&f) };

        let mut previous = snapshot(&solver);
        let mut steps = 0usize;
        while solver.step() {
            steps += 1;
            prop_assert!(steps < 100_000, "solver did not terminate");

            let current = snapshot(&solver);
            for (before, after) in previous.iter().zip(&current) {
                prop_assert!(before.is_subset(after));
            }
            previous = current;
        }
        prop_assert!(solver.worklist().is_empty());
    }

    #[test]
    fn prop_constraints_hold_at_fixpoint(ops in arb_ops(VARS, 24), hinted in any::<bool>()) {
        let f = build_ops(VARS, &ops);
        let mut solver = if hinted { hinted_solver(&f) } else { AndersenSolver::new(&f) };
        prop_assert_eq!(solver.solve(None), SolveOutcome::Converged);

        let g = solver.graph();
        for stmt in f.stmts() {
            match *stmt {
                Stmt::Declare { .. } => {}
                Stmt::Alloc { target, site } => {
                    let alloc = g.lookup(NodeKey::direct(Subject::Alloc(site))).unwrap();
                    prop_assert!(g.points_to(node(g, target)).contains(alloc));
                }
                Stmt::AddrOf { target, operand } => {
                    prop_assert!(g.points_to(node(g, target)).contains(node(g, operand)));
                }
                Stmt::Copy { target, operand } => {
                    prop_assert!(g.points_to(node(g, operand)).is_subset(g.points_to(node(g, target))));
                }
                Stmt::Load { target, source } => {
                    let t = g.points_to(node(g, target));
                    for a in g.points_to(node(g, source)) {
                        prop_assert!(g.points_to(a).is_subset(t));
                    }
                }
                Stmt::Store { target, source } => {
                    let s = g.points_to(node(g, source));
                    for a in g.points_to(node(g, target)) {
                        prop_assert!(s.is_subset(g.points_to(a)));
                    }
                }
            }
        }
    }

    #[test]
    fn prop_resolve_is_idempotent(ops in arb_ops(VARS, 24), hinted in any::<bool>()) {
        let f = build_ops(VARS, &ops);
        let mut solver = if hinted { hinted_solver(&f) } else { AndersenSolver::new(&f) };
        solver.solve(None);

        let before = solver.stats().clone();
        let sets = snapshot(&solver);
        let edges = solver.graph().edge_count();

        solver.enqueue_all();
        prop_assert_eq!(solver.solve(None), SolveOutcome::Converged);

        prop_assert_eq!(solver.stats().propagations, before.propagations);
        prop_assert_eq!(solver.stats().dynamic_edges, before.dynamic_edges);
        prop_assert_eq!(solver.stats().online_merges, before.online_merges);
        prop_assert_eq!(solver.graph().edge_count(), edges);
        prop_assert_eq!(snapshot(&solver), sets);
    }

    #[test]
    fn prop_iteration_cap(ops in arb_ops(VARS, 24), cap in 1usize..40) {
        let f = build_ops(VARS, &ops);
        let full = PointsToAnalyzer::new(AnalysisConfig::from_preset(Preset::Balanced))
            .analyze(&f)
            .unwrap();

        let capped = PointsToAnalyzer::new(
            AnalysisConfig::from_preset(Preset::Balanced).max_iterations(Some(cap)),
        )
        .analyze(&f);

        match capped {
            Ok(outcome) => {
                prop_assert!(outcome.stats.iterations <= cap);
                prop_assert_eq!(outcome.result, full.result);
            }
            Err(PtaError::IterationLimit { limit, iterations }) => {
                prop_assert_eq!(limit, cap);
                prop_assert_eq!(iterations, cap);
                prop_assert!(full.stats.iterations > cap);
            }
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }

    #[test]
    fn prop_scc_matches_petgraph(
        edges in prop::collection::vec((0u32..12, 0u32..12), 0..40)
    ) {
        let mut g = ConstraintGraph::new();
        let ids: Vec<NodeId> = (0..12).map(|i| g.var_node(VarId::new(i))).collect();
        let mut reference: DiGraph<(), ()> = DiGraph::new();
        let pg_nodes: Vec<_> = (0..12).map(|_| reference.add_node(())).collect();

        for &(s, d) in &edges {
            g.add_edge(ids[s as usize], ids[d as usize]);
            reference.add_edge(pg_nodes[s as usize], pg_nodes[d as usize], ());
        }

        let mut ours: Vec<Vec<usize>> = find_sccs(&g)
            .sccs
            .into_iter()
            .map(|scc| {
                let mut v: Vec<usize> = scc.into_iter().map(NodeId::index).collect();
                v.sort_unstable();
                v
            })
            .collect();
        ours.sort();

        let mut theirs: Vec<Vec<usize>> = petgraph::algo::tarjan_scc(&reference)
            .into_iter()
            .map(|scc| {
                let mut v: Vec<usize> = scc.into_iter().map(|n| n.index()).collect();
                v.sort_unstable();
                v
            })
            .collect();
        theirs.sort();

        prop_assert_eq!(ours, theirs);
    }
}
