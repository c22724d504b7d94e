use serde_json::Value;

use crate::domain::{AppError, Template};

/// Port converting between wire documents and templates.
pub trait TemplateCodec {
    /// Short format name used in messages (`json`, `yaml`).
    fn format_name(&self) -> &'static str;

    /// Decode a template document.
    fn decode(&self, content: &str) -> Result<Template, AppError>;

    /// Encode a processed template.
    fn encode(&self, template: &Template) -> Result<String, AppError>;

    /// Encode an arbitrary object tree, e.g. a list of processed objects.
    fn encode_value(&self, value: &Value) -> Result<String, AppError>;
}
