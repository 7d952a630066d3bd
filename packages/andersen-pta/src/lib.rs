/*
 * Andersen PTA - Inclusion-Based Points-to Analysis
 *
 * Feature-First Hexagonal Architecture:
 * - features/ir/        : Pointer IR (statements, functions)
 * - features/points_to/ : Constraint graph, solver, cycle optimizer
 * - config/             : Presets, builder overrides, YAML loading
 * - errors              : Crate-wide error type
 *
 * Single-threaded: one analysis run owns its graph and worklist.
 */

#![allow(clippy::new_without_default)] // Default impl not always needed

/// Feature slices (ir, points_to)
pub mod features;

/// Configuration (presets, YAML)
pub mod config;

/// Error types
pub mod errors;

pub use config::{AnalysisConfig, Preset};
pub use errors::{PtaError, Result};
pub use features::ir::{AllocSiteId, Function, IrError, Stmt, StmtKind, VarId};
pub use features::points_to::{
    andersen_pta, AnalysisOutcome, AnalysisStats, PointsToAnalyzer, PtaResult, StatementSource,
};
