//! `fincalc show` -- display one formula.

use anyhow::Result;
use fincalc_ui::card::formula_card;

use crate::cli::ShowArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `fincalc show` command.
pub fn run(ctx: &RuntimeContext, args: &ShowArgs) -> Result<()> {
    let formula = ctx.registry.get(args.id)?;

    if ctx.json {
        output_json(formula);
    } else {
        println!("{}", formula_card(formula));
    }
    Ok(())
}
