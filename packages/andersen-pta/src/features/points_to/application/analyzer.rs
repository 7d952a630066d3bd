//! High-Level Points-to Analyzer
//!
//! Runs the phases in order: build → cycle hints (optional) → solve →
//! extract.
//!
//! # Usage
//! ```text
//! use andersen_pta::{AnalysisConfig, Function, PointsToAnalyzer};
//!
//! let mut f = Function::new("main");
//! let p = f.create_var("p");
//! let q = f.create_var("q");
//! f.create_alloc(p)?;
//! f.create_copy(q, p)?;
//!
//! let outcome = PointsToAnalyzer::new(AnalysisConfig::default()).analyze(&f)?;
//! assert!(outcome.result.may_alias("p", "q"));
//! ```

use super::result::PtaResult;
use crate::config::{AnalysisConfig, Validatable};
use crate::errors::{PtaError, Result};
use crate::features::points_to::infrastructure::{AndersenSolver, GraphOptimizer, SolveOutcome};
use crate::features::points_to::ports::StatementSource;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

/// Unified statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub nodes: usize,
    pub initial_worklist: usize,
    /// Cyclic SCCs in the dereference-explicit graph
    pub scc_count: usize,
    pub collapsed_nodes: usize,
    pub redirects: usize,
    pub online_merges: usize,
    pub iterations: usize,
    pub propagations: usize,
    pub dynamic_edges: usize,
    pub duration_ms: f64,
    pub duration_optimize_ms: f64,
    pub duration_solve_ms: f64,
}

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub result: PtaResult,
    pub stats: AnalysisStats,
}

#[derive(Debug, Clone, Default)]
pub struct PointsToAnalyzer {
    config: AnalysisConfig,
}

impl PointsToAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze one function
    ///
    /// Fails with [`PtaError::IterationLimit`] if the configured cap stops
    /// the solver before its fixpoint; no partial result is returned.
    pub fn analyze<S: StatementSource + ?Sized>(&self, source: &S) -> Result<AnalysisOutcome> {
        self.config.validate()?;
        let total_start = Instant::now();

        let (solver, outcome, mut stats) = self.run(source);
        if let SolveOutcome::IterationLimit { limit } = outcome {
            return Err(PtaError::IterationLimit {
                limit,
                iterations: stats.iterations,
            });
        }

        let result = PtaResult::from_graph(solver.graph(), source);
        stats.duration_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            entries = result.len(),
            duration_ms = stats.duration_ms,
            "points-to result extracted"
        );

        Ok(AnalysisOutcome { result, stats })
    }

    fn run<'a, S: StatementSource + ?Sized>(
        &self,
        source: &'a S,
    ) -> (AndersenSolver<'a, S>, SolveOutcome, AnalysisStats) {
        let mut solver = AndersenSolver::new(source);
        let mut stats = AnalysisStats {
            nodes: solver.graph().len(),
            initial_worklist: solver.worklist().len(),
            ..Default::default()
        };

        if self.config.enable_scc {
            let optimize_start = Instant::now();
            let mut optimizer = GraphOptimizer::new(source);
            let hints = optimizer.compute_hints();
            solver.apply_hints(&hints);
            stats.scc_count = optimizer.stats().scc.cyclic_count;
            stats.redirects = hints.redirects.len();
            stats.duration_optimize_ms = optimize_start.elapsed().as_secs_f64() * 1000.0;
        }

        let solve_start = Instant::now();
        let outcome = solver.solve(self.config.max_iterations);
        stats.duration_solve_ms = solve_start.elapsed().as_secs_f64() * 1000.0;

        let solver_stats = solver.stats();
        stats.collapsed_nodes = solver_stats.offline_collapsed;
        stats.online_merges = solver_stats.online_merges;
        stats.iterations = solver_stats.iterations;
        stats.propagations = solver_stats.propagations;
        stats.dynamic_edges = solver_stats.dynamic_edges;

        debug!(
            nodes = stats.nodes,
            sccs = stats.scc_count,
            iterations = stats.iterations,
            "analysis finished"
        );
        (solver, outcome, stats)
    }
}

/// Analyze `source` with the default configuration
///
/// The default configuration has no iteration cap, so the solver always
/// reaches its fixpoint.
pub fn andersen_pta<S: StatementSource + ?Sized>(source: &S) -> PtaResult {
    let (solver, outcome, _) = PointsToAnalyzer::default().run(source);
    debug_assert_eq!(outcome, SolveOutcome::Converged);
    PtaResult::from_graph(solver.graph(), source)
}
