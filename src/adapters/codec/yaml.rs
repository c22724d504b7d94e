use serde_json::Value;

use crate::domain::{AppError, Template};
use crate::ports::TemplateCodec;

const FORMAT: &str = "yaml";

/// YAML codec backed by `serde_yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl TemplateCodec for YamlCodec {
    fn format_name(&self) -> &'static str {
        FORMAT
    }

    fn decode(&self, content: &str) -> Result<Template, AppError> {
        serde_yaml::from_str(content)
            .map_err(|err| AppError::Decode { format: FORMAT.into(), details: err.to_string() })
    }

    fn encode(&self, template: &Template) -> Result<String, AppError> {
        serde_yaml::to_string(template)
            .map_err(|err| AppError::Encode { format: FORMAT.into(), details: err.to_string() })
    }

    fn encode_value(&self, value: &Value) -> Result<String, AppError> {
        serde_yaml::to_string(value)
            .map_err(|err| AppError::Encode { format: FORMAT.into(), details: err.to_string() })
    }
}
