//! Error types for andersen-pta
//!
//! Provides unified error handling across the crate.

use crate::config::ConfigError;
use crate::features::ir::IrError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PtaError {
    /// Rejected while building the IR
    #[error("IR error: {0}")]
    Ir(#[from] IrError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Solver hit its iteration cap before reaching a fixpoint
    #[error("Iteration limit {limit} reached after {iterations} iterations without a fixpoint")]
    IterationLimit { limit: usize, iterations: usize },
}

impl PtaError {
    /// True for resource limits the caller may retry with a larger budget
    pub fn is_resource_limit(&self) -> bool {
        matches!(self, PtaError::IterationLimit { .. })
    }
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, PtaError>;
