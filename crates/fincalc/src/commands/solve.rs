//! `fincalc solve` -- derive the single missing variable of a formula.

use anyhow::{Result, bail};
use fincalc_core::validation::UNKNOWN_MARKER;
use fincalc_core::{Outcome, RawFields, validate_and_solve};
use fincalc_ui::styles::render_muted;
use serde::Serialize;

use crate::cli::SolveArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// JSON shape of a solve.
#[derive(Serialize)]
struct SolveReport {
    formula: u32,
    #[serde(flatten)]
    outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<String>,
}

/// Execute the `fincalc solve` command.
pub fn run(ctx: &RuntimeContext, args: &SolveArgs) -> Result<()> {
    let formula = ctx.registry.get(args.id)?;
    let fields = parse_values(&args.values)?;
    let outcome = validate_and_solve(formula, &fields)?;

    let formatted = match &outcome {
        Outcome::Solved { name, value } => formula
            .variable(name)
            .map(|var| (var, ctx.format.value(var, *value))),
        Outcome::NothingToCompute => None,
    };

    if ctx.json {
        output_json(&SolveReport {
            formula: formula.id,
            formatted: formatted.as_ref().map(|(_, text)| text.clone()),
            outcome,
        });
        return Ok(());
    }

    match (&outcome, formatted) {
        (Outcome::Solved { value, .. }, Some((var, _))) => {
            println!("{}", ctx.format.result_line(var, *value));
        }
        _ => {
            if !ctx.quiet {
                println!(
                    "{}",
                    render_muted("All fields are filled; nothing to calculate.")
                );
            }
        }
    }
    Ok(())
}

/// Turns `NAME=VALUE` arguments into raw form fields. An empty value or `?`
/// leaves the variable blank.
fn parse_values(values: &[String]) -> Result<RawFields> {
    let mut fields = RawFields::new();
    for item in values {
        let Some((name, value)) = item.split_once('=') else {
            bail!("invalid assignment '{}': expected NAME=VALUE", item);
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("invalid assignment '{}': missing variable name", item);
        }
        let value = match value.trim() {
            UNKNOWN_MARKER => "",
            other => other,
        };
        fields.insert(name.to_string(), value.to_string());
    }
    Ok(fields)
}
