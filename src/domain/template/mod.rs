//! Template document model and the processing engine that expands it.

mod labels;
mod parameters;
mod processor;
mod substitution;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use labels::inject_labels;
pub use parameters::parameter_field_path;
pub use processor::Processor;
pub use substitution::{substitute_parameters, substitute_value};

/// A named slot resolved to a string value before substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Unique, case-sensitive key within a template.
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Explicit value. Non-empty values are never regenerated.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    /// Generator indicator; empty means no generation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub generate: String,
    /// Input expression for the generator named by `generate`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub from: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl Parameter {
    /// Parameter with an explicit value.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), ..Default::default() }
    }
}

/// A parameterized set of objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub objects: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Labels merged into every object by `Process`.
    #[serde(rename = "labels", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub object_labels: BTreeMap<String, String>,
}

impl Template {
    /// Add `parameter`, replacing the value and generator of an existing
    /// parameter with the same name in place.
    pub fn add_parameter(&mut self, parameter: Parameter) {
        match self.parameters.iter_mut().find(|p| p.name == parameter.name) {
            Some(existing) => {
                existing.value = parameter.value;
                existing.generate = parameter.generate;
                existing.from = parameter.from;
                existing.required = parameter.required;
                if !parameter.display_name.is_empty() {
                    existing.display_name = parameter.display_name;
                }
                if !parameter.description.is_empty() {
                    existing.description = parameter.description;
                }
            }
            None => self.parameters.push(parameter),
        }
    }

    pub fn parameter_by_name(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn parameter_by_name_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.parameters.iter_mut().find(|p| p.name == name)
    }

    /// Name to value map of every declared parameter.
    pub fn parameter_values(&self) -> BTreeMap<&str, &str> {
        self.parameters.iter().map(|p| (p.name.as_str(), p.value.as_str())).collect()
    }
}
