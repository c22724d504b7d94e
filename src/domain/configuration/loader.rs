//! Configuration loading.

use crate::domain::{AppError, ProcessConfig};
use crate::ports::DocumentStore;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tproc.toml";

/// Load configuration from `explicit`, or from `tproc.toml` when present.
///
/// A missing default file yields the default configuration; a missing
/// explicit file is an error.
pub fn load_config(
    store: &impl DocumentStore,
    explicit: Option<&str>,
) -> Result<ProcessConfig, AppError> {
    let content = match explicit {
        Some(path) => Some(store.read_optional(path)?.ok_or_else(|| {
            AppError::config_error(format!("Config file not found: {}", path))
        })?),
        None => store.read_optional(DEFAULT_CONFIG_FILE)?,
    };

    match content {
        Some(content) => parse_config_content(&content),
        None => Ok(ProcessConfig::default()),
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<ProcessConfig, AppError> {
    let config: ProcessConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
