use serde::Serialize;
use serde_json::Value;

use crate::domain::{AppError, Template};
use crate::ports::TemplateCodec;

const FORMAT: &str = "json";

/// JSON codec backed by `serde_json`. Field order is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_text<T: Serialize>(&self, value: &T) -> Result<String, AppError> {
        let encoded =
            if self.pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) };
        encoded.map_err(|err| AppError::Encode { format: FORMAT.into(), details: err.to_string() })
    }
}

impl TemplateCodec for JsonCodec {
    fn format_name(&self) -> &'static str {
        FORMAT
    }

    fn decode(&self, content: &str) -> Result<Template, AppError> {
        serde_json::from_str(content)
            .map_err(|err| AppError::Decode { format: FORMAT.into(), details: err.to_string() })
    }

    fn encode(&self, template: &Template) -> Result<String, AppError> {
        self.to_text(template)
    }

    fn encode_value(&self, value: &Value) -> Result<String, AppError> {
        self.to_text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_object_field_order_through_round_trip() {
        let input = r#"{"kind":"Template","objects":[{"zeta":1,"alpha":2,"metadata":{"name":"x"}}]}"#;
        let codec = JsonCodec::new(false);

        let template = codec.decode(input).unwrap();

        assert_eq!(codec.encode(&template).unwrap(), input);
    }

    #[test]
    fn decode_error_names_format() {
        let err = JsonCodec::default().decode("{not json").unwrap_err();
        assert!(matches!(err, AppError::Decode { ref format, .. } if format == "json"));
    }

    #[test]
    fn pretty_output_is_indented() {
        let codec = JsonCodec::new(true);
        let text = codec.encode_value(&serde_json::json!({"a": {"b": 1}})).unwrap();
        assert_eq!(text, "{\n  \"a\": {\n    \"b\": 1\n  }\n}");
    }
}
