use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, info_span};

use crate::domain::FieldError;
use crate::domain::generator::{GeneratorRegistry, GeneratorSelector, NamedSelector};

use super::labels::inject_labels;
use super::parameters::resolve_parameters;
use super::substitution::substitute_value;
use super::Template;

/// Expands templates: resolves parameters, substitutes macros, injects labels.
///
/// Holds no per-template state, so one instance can process any number of
/// templates, including concurrently on different threads.
pub struct Processor {
    generators: GeneratorRegistry,
    selector: Box<dyn GeneratorSelector>,
}

impl Processor {
    /// Processor that looks generators up by the literal `generate` name.
    pub fn new(generators: GeneratorRegistry) -> Self {
        Self::with_selector(generators, NamedSelector)
    }

    pub fn with_selector<S>(generators: GeneratorRegistry, selector: S) -> Self
    where
        S: GeneratorSelector + 'static,
    {
        Self { generators, selector: Box::new(selector) }
    }

    /// Process `template` in place. An empty result means success.
    ///
    /// A parameter resolution failure is returned alone and leaves the
    /// objects untouched.
    pub fn process(&self, template: &mut Template) -> Vec<FieldError> {
        let span = info_span!("process", kind = %template.kind, objects = template.objects.len());
        let _guard = span.enter();

        if let Err(err) = self.generate_parameter_values(template) {
            debug!(field = %err.field, "parameter resolution failed");
            return vec![err];
        }

        let Template { parameters, objects, object_labels, .. } = template;
        let values: BTreeMap<&str, &str> =
            parameters.iter().map(|p| (p.name.as_str(), p.value.as_str())).collect();
        for object in objects.iter_mut() {
            substitute_value(object, &values);
        }

        inject_labels(objects, object_labels);
        Vec::new()
    }

    /// Resolve every parameter's value in place, stopping at the first failure.
    pub fn generate_parameter_values(&self, template: &mut Template) -> Result<(), FieldError> {
        resolve_parameters(template, &self.generators, self.selector.as_ref())
    }
}

impl fmt::Debug for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Processor").field("generators", &self.generators).finish_non_exhaustive()
    }
}
