//! Application layer for Points-to Analysis
//!
//! - **PointsToAnalyzer**: configured end-to-end run with statistics
//! - **PtaResult**: name-keyed result for callers

pub mod analyzer;
pub mod result;

pub use analyzer::{andersen_pta, AnalysisOutcome, AnalysisStats, PointsToAnalyzer};
pub use result::PtaResult;
