//! tproc: expand parameterized object templates into concrete, labeled object sets.
//!
//! The engine lives in [`domain::template`]: [`Processor::process`] resolves
//! parameters through a [`GeneratorRegistry`], substitutes `${NAME}` macros
//! in every string of every object, and merges the template's labels into
//! each object.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use adapters::FilesystemDocumentStore;
use app::{
    AppContext,
    commands::{parameters, process},
};
use domain::configuration::load_config;

pub use adapters::{JsonCodec, YamlCodec};
pub use app::commands::process::{ProcessOptions, ProcessOutcome};
pub use domain::{
    AppError, DocumentFormat, FieldError, FieldErrorKind, Generator, GeneratorError,
    GeneratorRegistry, GeneratorSelector, Parameter, Processor, Template,
};
pub use ports::TemplateCodec;
pub use services::ExpressionValueGenerator;

fn context(config_path: Option<&str>) -> Result<AppContext<FilesystemDocumentStore>, AppError> {
    let documents = FilesystemDocumentStore::current()?;
    let config = load_config(&documents, config_path)?;
    Ok(AppContext::new(documents, config))
}

/// Process a template file (or `-` for stdin) and return the encoded result.
///
/// `config_path` overrides the default `tproc.toml` lookup.
pub fn process(
    options: ProcessOptions,
    config_path: Option<&str>,
) -> Result<ProcessOutcome, AppError> {
    let ctx = context(config_path)?;
    process::execute(&ctx, options)
}

/// List the parameters declared by a template.
pub fn parameters(source: &str, config_path: Option<&str>) -> Result<Vec<Parameter>, AppError> {
    let ctx = context(config_path)?;
    parameters::execute(&ctx, source)
}

/// Render parameters as the table printed by `tproc parameters`.
pub fn parameters_table(parameters: &[Parameter]) -> String {
    parameters::render_table(parameters)
}
