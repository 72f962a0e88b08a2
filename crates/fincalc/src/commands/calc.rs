//! `fincalc calc` -- interactive editing session for one formula.
//!
//! Reads one command per line from stdin. A prompt is shown only when a
//! person is typing; piped scripts get bare output.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use fincalc_core::{Outcome, Recommendation, Session, SessionError, TransferError, VariableKind};
use fincalc_ui::card::formula_card;
use fincalc_ui::format::NumberFormat;
use fincalc_ui::styles::{render_fail, render_fail_icon, render_muted, render_pass_icon};
use fincalc_ui::terminal::stdin_is_tty;
use tracing::debug;

use crate::cli::CalcArgs;
use crate::context::RuntimeContext;

const PROMPT: &str = "fincalc> ";

const HELP: &str = "\
Commands:
  set NAME VALUE    fill in a field (NAME=VALUE also works)
  unset NAME        clear a field so it can be solved for
  scenario WHICH    pick a capacity scenario (1, 2, no-capacity, spare-capacity)
  solve             derive the single empty field
  show              print the current fields
  clear             empty every field
  help              print this help
  quit              leave";

/// Execute the `fincalc calc` command.
pub fn run(ctx: &RuntimeContext, args: &CalcArgs) -> Result<()> {
    // A `json: true` config default still allows the interactive session.
    if ctx.json_flag {
        bail!("calc is interactive and has no JSON output; use 'fincalc solve --json'");
    }

    let formula = ctx.registry.get(args.id)?;
    let interactive = stdin_is_tty();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if interactive && !ctx.quiet {
        writeln!(out, "{}", formula_card(formula))?;
        writeln!(out, "{}", render_muted("Type 'help' for commands."))?;
    }

    let mut repl = Repl {
        session: Session::new(formula),
        format: ctx.format,
        prompt: interactive,
    };
    repl.run(io::stdin().lock(), &mut out)
}

/// Whether the loop keeps reading.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct Repl {
    session: Session,
    format: NumberFormat,
    prompt: bool,
}

impl Repl {
    fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.show_prompt(out)?;
        for line in input.lines() {
            let line = line?;
            if self.execute(line.trim(), out)? == Flow::Quit {
                break;
            }
            self.show_prompt(out)?;
        }
        Ok(())
    }

    fn show_prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        debug!(command, rest, "calc command");

        match command {
            "" => {}
            "quit" | "exit" | "q" => return Ok(Flow::Quit),
            "help" | "?" => writeln!(out, "{HELP}")?,
            "show" => self.show(out)?,
            "solve" | "calc" => self.solve(out)?,
            "clear" => {
                self.session.clear();
                writeln!(out, "{}", render_muted("All fields cleared."))?;
            }
            "set" => match rest.split_once(char::is_whitespace) {
                Some((name, value)) => {
                    let result = self.session.set(name, value.trim());
                    self.after_edit(result, out)?;
                }
                None => report(out, "usage: set NAME VALUE")?,
            },
            "unset" if !rest.is_empty() => {
                let result = self.session.unset(rest);
                self.after_edit(result, out)?;
            }
            "unset" => report(out, "usage: unset NAME")?,
            "scenario" => {
                let result = self.session.set_scenario(rest);
                self.after_edit(result, out)?;
            }
            _ => match line.split_once('=') {
                Some((name, value)) => {
                    let result = self.session.set(name.trim(), value.trim());
                    self.after_edit(result, out)?;
                }
                None => report(out, &format!("unknown command '{command}' (try 'help')"))?,
            },
        }
        Ok(Flow::Continue)
    }

    /// Reports a failed edit. Decision formulas re-evaluate after every
    /// successful edit and stay quiet while inputs are missing.
    fn after_edit<W: Write>(&self, result: Result<(), SessionError>, out: &mut W) -> Result<()> {
        if let Err(e) = result {
            return report(out, &e.to_string());
        }
        if self.session.formula().is_numeric() {
            return Ok(());
        }
        match self.session.evaluate_transfer() {
            Ok(rec) => self.print_recommendation(&rec, out),
            Err(SessionError::Transfer(TransferError::MissingField(_))) => Ok(()),
            Err(e) => report(out, &e.to_string()),
        }
    }

    fn solve<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if !self.session.formula().is_numeric() {
            return match self.session.evaluate_transfer() {
                Ok(rec) => self.print_recommendation(&rec, out),
                Err(e) => report(out, &e.to_string()),
            };
        }

        match self.session.calculate() {
            Ok(Outcome::Solved { name, value }) => {
                if let Some(var) = self.session.formula().variable(&name) {
                    writeln!(
                        out,
                        "{} {}",
                        render_pass_icon(),
                        self.format.result_line(var, value)
                    )?;
                }
                Ok(())
            }
            Ok(Outcome::NothingToCompute) => {
                writeln!(
                    out,
                    "{}",
                    render_muted("All fields are filled; unset one to solve for it.")
                )?;
                Ok(())
            }
            Err(e) => report(out, &e.to_string()),
        }
    }

    /// Prints the fields. Decision formulas list only the inputs the
    /// current scenario reads.
    fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        let formula = self.session.formula();
        let required = self.session.scenario().required_fields();
        writeln!(out, "{}", formula.description)?;
        for var in formula.variables {
            if !formula.is_numeric() && var.is_numeric() && !required.contains(&var.name) {
                continue;
            }
            let value = match var.kind {
                VariableKind::Select => self.session.scenario().label().to_string(),
                VariableKind::Number => match self.session.field(var.name) {
                    Some(raw) => raw
                        .parse::<f64>()
                        .map(|v| self.format.value(var, v))
                        .unwrap_or_else(|_| raw.to_string()),
                    None => render_muted("?"),
                },
            };
            writeln!(out, "  {} ({}): {}", var.label, var.name, value)?;
        }
        Ok(())
    }

    fn print_recommendation<W: Write>(&self, rec: &Recommendation, out: &mut W) -> Result<()> {
        for line in self.format.recommendation_lines(self.session.scenario(), rec) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

fn report<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "{} {}", render_fail_icon(), render_fail(message))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc_config::ColorMode;
    use fincalc_registry::Registry;
    use fincalc_ui::terminal::set_color_mode;
    use pretty_assertions::assert_eq;

    fn run_script(id: u32, script: &str) -> String {
        set_color_mode(ColorMode::Never);
        let formula = Registry::builtin().get(id).unwrap();
        let mut repl = Repl {
            session: Session::new(formula),
            format: NumberFormat::default(),
            prompt: false,
        };
        let mut out = Vec::new();
        repl.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn solves_the_blank_field() {
        let out = run_script(1, "set salesPrice 10\nset salesVolume 5\nsolve\n");
        assert_eq!(out, "\u{2713} Revenue ($): 50.00\n");
    }

    #[test]
    fn solved_value_is_kept_for_the_next_round() {
        let out = run_script(
            1,
            "salesPrice=10\nsalesVolume=5\nsolve\nunset salesPrice\nsolve\nshow\n",
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "\u{2713} Revenue ($): 50.00");
        assert_eq!(lines[1], "\u{2713} Sales Price per unit ($): 10.00");
        assert!(lines.contains(&"  Revenue ($) (revenue): 50.00"));
    }

    #[test]
    fn errors_are_reported_and_the_loop_continues() {
        let out = run_script(1, "set salesPrice ten\nsolve\nbogus\nset nope 1\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("invalid number for 'salesPrice'"));
        assert!(lines[1].contains("fill in all but one field"));
        assert!(lines[2].contains("unknown command 'bogus'"));
        assert!(lines[3].contains("unknown variable: nope"));
    }

    #[test]
    fn quit_stops_reading() {
        let out = run_script(1, "quit\nhelp\n");
        assert_eq!(out, "");
    }

    #[test]
    fn all_filled_is_a_notice() {
        let out = run_script(1, "set revenue 50\nset salesPrice 10\nset salesVolume 5\nsolve\n");
        assert!(out.contains("All fields are filled"));
    }

    #[test]
    fn decision_formula_updates_on_every_edit() {
        let out = run_script(22, "set marketPrice 120\n");
        assert!(out.contains("optimal internal transfer price is: 120.00"));

        let out = run_script(
            22,
            "scenario 2\nset supplierVariableCost 40\nset buyerExternalPrice 60\n",
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "In Scenario 2 (HAS available capacity), the optimal internal transfer price should be between: 40.00 and 60.00"
        );
        assert!(lines[2].ends_with("midpoint: 50.00"));
    }

    #[test]
    fn question_mark_clears_a_field() {
        let out = run_script(
            1,
            "set salesPrice 10\nset salesPrice ?\nset salesVolume 5\nset revenue 50\nsolve\n",
        );
        assert_eq!(out, "\u{2713} Sales Price per unit ($): 10.00\n");
    }

    #[test]
    fn decision_show_lists_scenario_inputs() {
        let out = run_script(22, "show\nscenario 2\nshow\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[1].contains("(scenario)"));
        assert!(lines[2].contains("(marketPrice)"));
        assert!(lines[4].contains("(scenario)"));
        assert!(lines[5].contains("(supplierVariableCost)"));
        assert!(lines[6].contains("(buyerExternalPrice)"));
        assert!(!lines[..3].iter().any(|l| l.contains("supplierVariableCost")));
    }

    #[test]
    fn scenario_is_rejected_for_numeric_formulas() {
        let out = run_script(1, "scenario 2\n");
        assert!(out.contains("formula 1 has no scenario selector"));
    }
}
