use serde_json::{Value, json};

use crate::domain::{Generator, GeneratorError};

/// Always produces `"foo"`.
pub struct FooGenerator;

impl Generator for FooGenerator {
    fn generate_value(&self, _expression: &str) -> Result<Value, GeneratorError> {
        Ok(Value::String("foo".into()))
    }
}

/// Always fails.
pub struct ErrorGenerator;

impl Generator for ErrorGenerator {
    fn generate_value(&self, _expression: &str) -> Result<Value, GeneratorError> {
        Err(GeneratorError::Failed("error".into()))
    }
}

/// Produces a structured value instead of a string.
pub struct NoStringGenerator;

impl Generator for NoStringGenerator {
    fn generate_value(&self, _expression: &str) -> Result<Value, GeneratorError> {
        Ok(json!({"not": "a string"}))
    }
}

/// Produces an empty string.
pub struct EmptyGenerator;

impl Generator for EmptyGenerator {
    fn generate_value(&self, _expression: &str) -> Result<Value, GeneratorError> {
        Ok(Value::String(String::new()))
    }
}
