//! Processing configuration models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

use super::{DocumentFormat, GeneratorDispatch};

/// Configuration loaded from `tproc.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessConfig {
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
    /// Generator configuration.
    #[serde(default)]
    pub generators: GeneratorConfig,
    /// Labels applied to every processed template, below template labels.
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl ProcessConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(key) = self.labels.keys().find(|key| key.trim().is_empty()) {
            return Err(AppError::config_error(format!("label keys must not be empty (got '{}')", key)));
        }
        Ok(())
    }
}

/// How processed templates are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format; when unset, the input document's format is reused.
    #[serde(default)]
    pub format: Option<DocumentFormat>,
    /// Indent JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: None, pretty: default_true() }
    }
}

/// Generator setup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Seed for the expression generator; random when unset.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Generator selection scheme.
    #[serde(default)]
    pub dispatch: GeneratorDispatch,
}

fn default_true() -> bool {
    true
}
