//! Wire codecs for template documents.

mod json;
mod yaml;

use std::path::Path;

pub use json::JsonCodec;
pub use yaml::YamlCodec;

use crate::domain::DocumentFormat;
use crate::ports::TemplateCodec;

/// Codec for `format`. `pretty` only affects JSON output.
pub fn codec_for(format: DocumentFormat, pretty: bool) -> Box<dyn TemplateCodec> {
    match format {
        DocumentFormat::Json => Box::new(JsonCodec::new(pretty)),
        DocumentFormat::Yaml => Box::new(YamlCodec),
    }
}

/// Guess a document's format from its file extension, falling back to the
/// first non-blank character (`{` means JSON).
pub fn detect_format(source: &str, content: &str) -> DocumentFormat {
    let extension = Path::new(source).extension().and_then(|ext| ext.to_str());
    match extension.map(str::to_ascii_lowercase).as_deref() {
        Some("json") => DocumentFormat::Json,
        Some("yaml" | "yml") => DocumentFormat::Yaml,
        _ if content.trim_start().starts_with('{') => DocumentFormat::Json,
        _ => DocumentFormat::Yaml,
    }
}
