mod expression_generator;

pub use expression_generator::ExpressionValueGenerator;

use tracing::warn;

use crate::domain::{
    EXPRESSION_GENERATOR, ExpressionSelector, GeneratorDispatch, GeneratorRegistry, NamedSelector,
    Processor,
};

/// Registry holding the built-in generators.
pub fn standard_generators(seed: Option<u64>) -> GeneratorRegistry {
    let expression = match seed {
        Some(seed) => ExpressionValueGenerator::seeded(seed),
        None => ExpressionValueGenerator::new(),
    };
    GeneratorRegistry::new().with(EXPRESSION_GENERATOR, expression)
}

/// Processor over `generators` using the selection scheme named by `dispatch`.
pub fn build_processor(generators: GeneratorRegistry, dispatch: GeneratorDispatch) -> Processor {
    match dispatch {
        GeneratorDispatch::Named => Processor::with_selector(generators, NamedSelector),
        GeneratorDispatch::Expression => {
            if !generators.contains(EXPRESSION_GENERATOR) {
                warn!(
                    generator = EXPRESSION_GENERATOR,
                    "expression dispatch without a registered expression generator"
                );
            }
            Processor::with_selector(generators, ExpressionSelector)
        }
    }
}
