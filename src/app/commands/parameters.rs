use crate::app::AppContext;
use crate::domain::{AppError, Parameter};
use crate::ports::DocumentStore;

use super::load_template;

const HEADERS: [&str; 4] = ["NAME", "DESCRIPTION", "GENERATOR", "VALUE"];

/// List the parameters declared by the template at `source`.
pub fn execute<D: DocumentStore>(ctx: &AppContext<D>, source: &str) -> Result<Vec<Parameter>, AppError> {
    let (template, _) = load_template(ctx.documents(), source)?;
    Ok(template.parameters)
}

/// Render parameters as an aligned table.
///
/// The value column shows the generator input for generated parameters.
/// Required parameters are marked with `*` after their name.
pub fn render_table(parameters: &[Parameter]) -> String {
    let rows: Vec<[String; 4]> = parameters.iter().map(row).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn row(parameter: &Parameter) -> [String; 4] {
    let name =
        if parameter.required { format!("{}*", parameter.name) } else { parameter.name.clone() };
    let value = if parameter.value.is_empty() && !parameter.generate.is_empty() {
        parameter.from.clone()
    } else {
        parameter.value.clone()
    };
    let description = parameter.description.lines().next().unwrap_or_default().to_string();
    [name, description, parameter.generate.clone(), value]
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("   ");
    out.push_str(line.trim_end());
    out.push('\n');
}
