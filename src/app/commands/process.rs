use serde_json::{Value, json};
use tracing::{info, warn};

use crate::adapters::codec_for;
use crate::app::AppContext;
use crate::domain::{AppError, DocumentFormat, Parameter, Template};
use crate::ports::DocumentStore;
use crate::services::{build_processor, standard_generators};

use super::{load_template, parse_assignment};

/// Options for the process command.
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// Template path, or `-` for standard input.
    pub template: String,
    /// `NAME=VALUE` parameter overrides.
    pub params: Vec<String>,
    /// `KEY=VALUE` labels added to every object.
    pub labels: Vec<String>,
    /// Output format; defaults to the configured or input format.
    pub output: Option<DocumentFormat>,
    /// Emit a `List` of the processed objects instead of the template.
    pub list: bool,
    /// Seed for the expression generator.
    pub seed: Option<u64>,
}

/// Result of processing a template.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    /// Encoded output document.
    pub document: String,
    pub format: DocumentFormat,
    pub object_count: usize,
}

/// Execute the process command.
///
/// Decodes the template, applies parameter and label overrides, runs the
/// processor and encodes the result.
pub fn execute<D>(ctx: &AppContext<D>, options: ProcessOptions) -> Result<ProcessOutcome, AppError>
where
    D: DocumentStore,
{
    let (mut template, input_format) = load_template(ctx.documents(), &options.template)?;
    apply_parameter_overrides(&mut template, &options.params)?;
    apply_labels(&mut template, ctx, &options.labels)?;

    let config = ctx.config();
    let generators = standard_generators(options.seed.or(config.generators.seed));
    let processor = build_processor(generators, config.generators.dispatch);

    let errors = processor.process(&mut template);
    if !errors.is_empty() {
        return Err(AppError::Processing(errors));
    }

    let format = options.output.or(config.output.format).unwrap_or(input_format);
    let codec = codec_for(format, config.output.pretty);
    let document = if options.list {
        codec.encode_value(&object_list(&template))?
    } else {
        codec.encode(&template)?
    };

    info!(objects = template.objects.len(), format = format.label(), "processed template");
    Ok(ProcessOutcome { document, format, object_count: template.objects.len() })
}

fn apply_parameter_overrides(template: &mut Template, params: &[String]) -> Result<(), AppError> {
    for raw in params {
        let (name, value) = parse_assignment("parameter", raw)?;
        match template.parameter_by_name_mut(name) {
            Some(parameter) => parameter.value = value.to_string(),
            None => {
                warn!(parameter = name, "adding parameter not declared by the template");
                template.add_parameter(Parameter::with_value(name, value));
            }
        }
    }
    Ok(())
}

/// Configured labels sit below template labels; command-line labels win.
fn apply_labels<D: DocumentStore>(
    template: &mut Template,
    ctx: &AppContext<D>,
    labels: &[String],
) -> Result<(), AppError> {
    for (key, value) in &ctx.config().labels {
        template.object_labels.entry(key.clone()).or_insert_with(|| value.clone());
    }
    for raw in labels {
        let (key, value) = parse_assignment("label", raw)?;
        template.object_labels.insert(key.to_string(), value.to_string());
    }
    Ok(())
}

fn object_list(template: &Template) -> Value {
    json!({
        "kind": "List",
        "apiVersion": "v1",
        "items": template.objects,
    })
}
