//! The formula card printed by `fincalc show`.

use fincalc_core::{FormulaDefinition, VariableKind};

use crate::styles::{render_accent, render_bold, render_muted};

/// Renders a multi-line description of `formula`: header, category,
/// relation, capability and one line per variable.
pub fn formula_card(formula: &FormulaDefinition) -> String {
    let mut lines = vec![
        format!(
            "{} {}",
            render_muted(&format!("#{}", formula.id)),
            render_bold(formula.name)
        ),
        format!("Category:  {}", formula.category),
        format!("Relation:  {}", formula.description),
        format!("Solver:    {}", formula.capability.tag()),
        String::new(),
        "Variables:".to_string(),
    ];

    let width = formula
        .variables
        .iter()
        .map(|v| v.name.len())
        .max()
        .unwrap_or(0);

    for var in formula.variables {
        let mut line = format!("  {}  {}", render_accent(&format!("{:<width$}", var.name)), var.label);

        let mut tags = Vec::new();
        if var.computed_by_default {
            tags.push("computed".to_string());
        }
        if var.percentage {
            tags.push("percent".to_string());
        }
        if var.kind == VariableKind::Select {
            tags.push(format!("one of: {}", var.options.join(" | ")));
        }
        if !tags.is_empty() {
            line.push_str(&format!("  {}", render_muted(&format!("[{}]", tags.join(", ")))));
        }
        lines.push(line);
    }

    lines.join("\n")
}
