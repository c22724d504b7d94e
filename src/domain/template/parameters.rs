use serde_json::Value;
use tracing::debug;

use crate::domain::FieldError;
use crate::domain::generator::{GeneratorRegistry, GeneratorSelector};

use super::{Parameter, Template};

/// Field path of the parameter at `index`, as reported in errors.
pub fn parameter_field_path(index: usize) -> String {
    format!("template.parameters[{}]", index)
}

/// Resolve every parameter value in declaration order, stopping at the first failure.
pub(super) fn resolve_parameters(
    template: &mut Template,
    generators: &GeneratorRegistry,
    selector: &dyn GeneratorSelector,
) -> Result<(), FieldError> {
    for (index, parameter) in template.parameters.iter_mut().enumerate() {
        resolve_parameter(index, parameter, generators, selector)?;
    }
    Ok(())
}

fn resolve_parameter(
    index: usize,
    parameter: &mut Parameter,
    generators: &GeneratorRegistry,
    selector: &dyn GeneratorSelector,
) -> Result<(), FieldError> {
    if !parameter.value.is_empty() {
        debug!(parameter = %parameter.name, "using explicit value");
        return Ok(());
    }

    let field = parameter_field_path(index);

    if parameter.generate.is_empty() {
        if parameter.required {
            return Err(FieldError::required(
                field,
                format!("parameter {} is required and must be specified", parameter.name),
            ));
        }
        debug!(parameter = %parameter.name, "optional parameter left empty");
        return Ok(());
    }

    let call = selector.select(parameter);
    let generator = generators.get(call.name).ok_or_else(|| {
        FieldError::not_found(
            field.clone(),
            format!("unable to find the '{}' generator for parameter {}", call.name, parameter.name),
        )
    })?;

    let generated = generator.generate_value(call.expression).map_err(|err| {
        FieldError::invalid(
            field.clone(),
            format!("failed to generate parameter {} using '{}': {}", parameter.name, call.name, err),
        )
        .with_source(err)
    })?;

    let value = match generated {
        Value::String(value) => value,
        other => {
            return Err(FieldError::invalid(
                field,
                format!(
                    "generator '{}' produced a non-string value for parameter {}: {}",
                    call.name, parameter.name, other
                ),
            ));
        }
    };

    if value.is_empty() && parameter.required {
        return Err(FieldError::required(
            field,
            format!("generator '{}' produced no value for required parameter {}", call.name, parameter.name),
        ));
    }

    debug!(parameter = %parameter.name, generator = call.name, "generated value");
    parameter.value = value;
    Ok(())
}
