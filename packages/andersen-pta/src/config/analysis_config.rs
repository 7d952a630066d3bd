//! Points-to analysis configuration
//!
//! YAML layout (all keys but `version` optional):
//!
//! ```yaml
//! version: 1
//! preset: fast
//! overrides:
//!   enable_scc: false
//!   max_iterations: 50000
//! ```

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::validation::Validatable;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Worklist pop cap used by [`Preset::Fast`]
pub const FAST_MAX_ITERATIONS: usize = 1_000_000;

const SUPPORTED_VERSIONS: &[u32] = &[1];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Collapse cycles found by the offline optimizer
    pub enable_scc: bool,

    /// Max worklist pops (None = run to fixpoint)
    pub max_iterations: Option<usize>,
}

impl AnalysisConfig {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Fast => Self {
                enable_scc: true,
                max_iterations: Some(FAST_MAX_ITERATIONS),
            },
            Preset::Balanced | Preset::Custom => Self {
                enable_scc: true,
                max_iterations: None,
            },
            Preset::Thorough => Self {
                enable_scc: false,
                max_iterations: None,
            },
        }
    }

    /// Builder: Set enable_scc
    pub fn enable_scc(mut self, v: bool) -> Self {
        self.enable_scc = v;
        self
    }

    /// Builder: Set max_iterations
    pub fn max_iterations(mut self, v: Option<usize>) -> Self {
        self.max_iterations = v;
        self
    }

    /// Parse a versioned YAML document and validate the result
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        if !SUPPORTED_VERSIONS.contains(&file.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: file.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = match file.preset.as_deref() {
            Some(name) => name.parse::<Preset>()?,
            None => Preset::default(),
        };

        let mut config = Self::from_preset(preset);
        if let Some(overrides) = file.overrides {
            if let Some(v) = overrides.enable_scc {
                config.enable_scc = v;
            }
            if let Some(v) = overrides.max_iterations {
                config.max_iterations = Some(v);
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}

impl Validatable for AnalysisConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_iterations == Some(0) {
            return Err(ConfigError::range_with_hint(
                "max_iterations",
                0,
                1,
                usize::MAX,
                "Leave max_iterations unset to run to fixpoint",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFileV1 {
    version: u32,
    #[serde(default)]
    preset: Option<String>,
    #[serde(default)]
    overrides: Option<ConfigOverrides>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigOverrides {
    enable_scc: Option<bool>,
    max_iterations: Option<usize>,
}
