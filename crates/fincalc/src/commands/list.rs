//! `fincalc list` -- list formulas grouped by category.

use anyhow::Result;
use fincalc_registry::CategoryGroup;
use fincalc_ui::styles::{render_category, render_muted};

use crate::cli::ListArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `fincalc list` command.
pub fn run(ctx: &RuntimeContext, args: &ListArgs) -> Result<()> {
    let groups = match args.search.as_deref() {
        Some(term) => ctx.registry.search(term),
        None => ctx.registry.groups(),
    };

    if ctx.json {
        output_json(&groups);
        return Ok(());
    }

    if groups.is_empty() {
        if let Some(term) = &args.search {
            println!("No formulas match '{}'.", term);
        }
        return Ok(());
    }

    println!("{}", render_groups(&groups).join("\n"));
    Ok(())
}

/// One header per category, then an indented `id. name` line per formula.
fn render_groups(groups: &[CategoryGroup]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(render_category(group.category.title()));
        for formula in &group.formulas {
            lines.push(format!(
                "  {} {}",
                render_muted(&format!("{:>2}.", formula.id)),
                formula.name
            ));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc_config::ColorMode;
    use fincalc_registry::Registry;
    use fincalc_ui::terminal::set_color_mode;

    #[test]
    fn groups_render_with_headers() {
        set_color_mode(ColorMode::Never);
        let lines = render_groups(&Registry::builtin().search("break-even"));
        assert_eq!(lines[0], "III. SENSITIVITY & DECISION ANALYSIS");
        assert_eq!(lines[1], "  16. Break-Even Units");
        assert_eq!(lines.len(), 2);
    }
}
