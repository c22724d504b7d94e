//! Value generators and the strategy that picks one for a parameter.

mod selector;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

pub use selector::{ExpressionSelector, GeneratorCall, GeneratorSelector, NamedSelector};

/// Registry key of the built-in character-class expression generator.
pub const EXPRESSION_GENERATOR: &str = "expression";

/// Failure raised by a generator while producing a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The expression could not be interpreted.
    #[error("invalid expression '{expression}': {reason}")]
    InvalidExpression { expression: String, reason: String },

    /// Any other generator-specific failure.
    #[error("{0}")]
    Failed(String),
}

/// Capability producing a value from an expression.
///
/// Implementations are shared across `Process` calls and must tolerate
/// concurrent invocation.
pub trait Generator: Send + Sync {
    /// Produce a value for `expression`. Only string values are usable as
    /// parameter values; anything else is rejected by the resolver.
    fn generate_value(&self, expression: &str) -> Result<Value, GeneratorError>;
}

/// Immutable mapping from generator name to generator.
#[derive(Clone, Default)]
pub struct GeneratorRegistry {
    generators: HashMap<String, Arc<dyn Generator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration, replacing any generator with the same name.
    pub fn with<G>(mut self, name: impl Into<String>, generator: G) -> Self
    where
        G: Generator + 'static,
    {
        self.generators.insert(name.into(), Arc::new(generator));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Generator>> {
        self.generators.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.generators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry").field("names", &self.names()).finish()
    }
}
