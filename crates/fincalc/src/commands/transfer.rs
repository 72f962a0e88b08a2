//! `fincalc transfer` -- internal transfer price recommendation.

use anyhow::{Result, bail};
use fincalc_core::{Recommendation, Scenario, TransferFields, evaluate_transfer_pricing};
use serde::Serialize;

use crate::cli::TransferArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// JSON shape of a recommendation.
#[derive(Serialize)]
struct TransferReport {
    scenario: &'static str,
    label: &'static str,
    recommendation: Recommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommended_price: Option<f64>,
    explanation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<&'static str>,
}

/// Execute the `fincalc transfer` command.
pub fn run(ctx: &RuntimeContext, args: &TransferArgs) -> Result<()> {
    let scenario: Scenario = args.scenario.parse()?;
    let fields = TransferFields {
        market_price: finite("--market-price", args.market_price)?,
        supplier_variable_cost: finite("--supplier-variable-cost", args.supplier_variable_cost)?,
        buyer_external_price: finite("--buyer-external-price", args.buyer_external_price)?,
    };
    let recommendation = evaluate_transfer_pricing(scenario, &fields)?;

    if ctx.json {
        output_json(&TransferReport {
            scenario: scenario.key(),
            label: scenario.label(),
            recommended_price: recommendation.recommended_price(),
            explanation: recommendation.explanation(),
            warning: recommendation.warning(),
            recommendation,
        });
        return Ok(());
    }

    for line in ctx.format.recommendation_lines(scenario, &recommendation) {
        println!("{}", line);
    }
    Ok(())
}

fn finite(flag: &str, value: Option<f64>) -> Result<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() => bail!("{} must be a finite number", flag),
        other => Ok(other),
    }
}
