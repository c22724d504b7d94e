use std::fmt;
use std::io;

use thiserror::Error;

use crate::domain::generator::GeneratorError;

/// Library-wide error type for template processing.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Template file does not exist.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Document could not be decoded into a template.
    #[error("Failed to decode {format} document: {details}")]
    Decode { format: String, details: String },

    /// Template could not be encoded into the requested format.
    #[error("Failed to encode {format} document: {details}")]
    Encode { format: String, details: String },

    /// Configuration file is missing or invalid.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A `NAME=VALUE` style argument could not be parsed.
    #[error("Invalid {what} '{input}': expected NAME=VALUE")]
    InvalidAssignment { what: String, input: String },

    /// Template processing reported one or more field errors.
    #[error("{}", join_field_errors(.0))]
    Processing(Vec<FieldError>),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Field errors carried by a failed `Process` call, if any.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            AppError::Processing(errors) => errors,
            _ => &[],
        }
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}

/// Category of a parameter resolution failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// A mandatory parameter has no value after resolution.
    Required,
    /// The referenced generator is not registered.
    NotFound,
    /// The generator failed or produced an unusable value.
    Invalid,
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FieldErrorKind::Required => "Required value",
            FieldErrorKind::NotFound => "Not found",
            FieldErrorKind::Invalid => "Invalid value",
        };
        f.write_str(text)
    }
}

/// A failure attributed to a single field of the template document.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {kind}: {detail}")]
pub struct FieldError {
    pub kind: FieldErrorKind,
    /// Path of the offending field, e.g. `template.parameters[0]`.
    pub field: String,
    pub detail: String,
    #[source]
    pub source: Option<GeneratorError>,
}

impl FieldError {
    pub fn required(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self { kind: FieldErrorKind::Required, field: field.into(), detail: detail.into(), source: None }
    }

    pub fn not_found(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self { kind: FieldErrorKind::NotFound, field: field.into(), detail: detail.into(), source: None }
    }

    pub fn invalid(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self { kind: FieldErrorKind::Invalid, field: field.into(), detail: detail.into(), source: None }
    }

    /// Attach the generator failure that caused this error.
    pub fn with_source(mut self, source: GeneratorError) -> Self {
        self.source = Some(source);
        self
    }
}
