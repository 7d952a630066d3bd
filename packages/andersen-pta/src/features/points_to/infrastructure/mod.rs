//! Infrastructure layer for Points-to Analysis
//!
//! - **UnionFind**: O(α(n)) node collapsing
//! - **SCC detector**: iterative Tarjan over any successor function
//! - **GraphOptimizer**: cycle hints from the dereference-explicit graph
//! - **AndersenSolver**: worklist fixpoint with dynamic load/store edges

pub mod andersen_solver;
pub mod graph_optimizer;
pub mod scc_detector;
pub mod union_find;

pub use andersen_solver::{AndersenSolver, SolveOutcome, SolverStats};
pub use graph_optimizer::{GraphOptimizer, OptimizationHints, OptimizerStats, Redirect};
pub use scc_detector::{find_sccs, tarjan_scc, Scc, SccResult, SccStats};
pub use union_find::UnionFind;
