//! Configuration System
//!
//! Two tiers:
//! - Preset: one-liner defaults (`AnalysisConfig::from_preset`)
//! - Override: builder setters in code, or a versioned YAML file
//!
//! # Examples
//!
//! ```rust,ignore
//! use andersen_pta::config::{AnalysisConfig, Preset};
//!
//! let config = AnalysisConfig::from_preset(Preset::Fast).enable_scc(false);
//! let config = AnalysisConfig::from_yaml_file("pta.yaml")?;
//! ```

pub mod analysis_config;
pub mod error;
pub mod preset;
pub mod validation;

pub use analysis_config::{AnalysisConfig, FAST_MAX_ITERATIONS};
pub use error::{ConfigError, ConfigResult};
pub use preset::Preset;
pub use validation::Validatable;
