//! # Andersen Points-to Analysis
//!
//! Inclusion-based, flow- and context-insensitive pointer analysis for one
//! function at a time:
//! - **Constraint graph**: arena of nodes, deduplicated successor edges
//! - **Worklist solver**: propagates sets, grows load/store edges on demand
//! - **Cycle optimizer**: Tarjan SCCs over a dereference-explicit graph,
//!   collapsing copy cycles and redirecting dereference cycles
//!
//! ## Academic References
//! - Andersen, L. O. "Program Analysis and Specialization for C" (PhD 1994)
//! - Hardekopf & Lin "The Ant and the Grasshopper" (PLDI 2007)
//! - Hardekopf & Lin "Exploiting Pointer and Location Equivalence" (SAS 2007)
//!
//! ## Usage
//! ```text
//! use andersen_pta::features::points_to::andersen_pta;
//!
//! let result = andersen_pta(&function);
//! assert!(result.may_alias("x", "y"));
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports for public API
pub use application::{andersen_pta, AnalysisOutcome, AnalysisStats, PointsToAnalyzer, PtaResult};
pub use domain::{ConstraintGraph, NodeId, NodeRole, PointsToSet, Subject, Worklist};
pub use ports::StatementSource;
// Re-export infrastructure (internal use - prefer application layer)
#[doc(hidden)]
pub use infrastructure::andersen_solver::{AndersenSolver, SolveOutcome};
#[doc(hidden)]
pub use infrastructure::graph_optimizer::{GraphOptimizer, OptimizationHints};
