pub mod parameters;
pub mod process;

use crate::domain::{AppError, Template};
use crate::ports::DocumentStore;

use crate::adapters::{codec_for, detect_format};
use crate::domain::DocumentFormat;

/// Read and decode the template at `source`, returning it with its detected format.
pub(crate) fn load_template(
    store: &impl DocumentStore,
    source: &str,
) -> Result<(Template, DocumentFormat), AppError> {
    let content = store.read_document(source)?;
    let format = detect_format(source, &content);
    let template = codec_for(format, false).decode(&content)?;
    Ok((template, format))
}

/// Split a `NAME=VALUE` argument. The value may be empty or contain `=`.
pub(crate) fn parse_assignment<'a>(
    what: &str,
    input: &'a str,
) -> Result<(&'a str, &'a str), AppError> {
    match input.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value)),
        _ => Err(AppError::InvalidAssignment { what: what.to_string(), input: input.to_string() }),
    }
}
