use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Wire format of template documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    #[default]
    Yaml,
}

impl DocumentFormat {
    pub fn label(self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Yaml => "yaml",
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            _ => Err(AppError::config_error(format!(
                "Invalid output format '{}'. Expected 'json' or 'yaml'.",
                s
            ))),
        }
    }
}

/// How a parameter's `generate` field picks a generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorDispatch {
    /// `generate` is the generator name.
    #[default]
    Named,
    /// Character-class patterns in `generate` go to the expression generator.
    Expression,
}

impl GeneratorDispatch {
    pub fn label(self) -> &'static str {
        match self {
            GeneratorDispatch::Named => "named",
            GeneratorDispatch::Expression => "expression",
        }
    }
}
