use crate::domain::template::Parameter;

use super::EXPRESSION_GENERATOR;

/// Which generator to invoke for a parameter, and with what input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorCall<'a> {
    /// Registry key of the generator.
    pub name: &'a str,
    /// Expression handed to `Generator::generate_value`.
    pub expression: &'a str,
}

/// Strategy mapping a parameter's `generate` field to a registry entry.
pub trait GeneratorSelector: Send + Sync {
    /// Only called for parameters with a non-empty `generate` field.
    fn select<'a>(&self, parameter: &'a Parameter) -> GeneratorCall<'a>;
}

/// `generate` is the registry key; `from` (or `generate` itself) is the expression.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedSelector;

impl GeneratorSelector for NamedSelector {
    fn select<'a>(&self, parameter: &'a Parameter) -> GeneratorCall<'a> {
        let expression =
            if parameter.from.is_empty() { parameter.generate.as_str() } else { parameter.from.as_str() };
        GeneratorCall { name: &parameter.generate, expression }
    }
}

/// Like [`NamedSelector`], but a `generate` value written as a character-class
/// expression (`[a-z]{8}`) is routed to the expression generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionSelector;

impl GeneratorSelector for ExpressionSelector {
    fn select<'a>(&self, parameter: &'a Parameter) -> GeneratorCall<'a> {
        if parameter.generate.contains('[') {
            return GeneratorCall { name: EXPRESSION_GENERATOR, expression: &parameter.generate };
        }
        NamedSelector.select(parameter)
    }
}
