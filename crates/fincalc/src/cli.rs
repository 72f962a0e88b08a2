//! Clap CLI definitions for the `fincalc` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fincalc_config::ColorMode;

/// fincalc -- financial formula calculator.
///
/// Pick a formula, fill in every value but one, and fincalc derives the
/// missing one.
#[derive(Parser, Debug)]
#[command(
    name = "fincalc",
    about = "Solve-for-the-missing-value financial formula calculator",
    long_about = "Pick a formula, fill in every value but one, and fincalc derives the missing one. \
                  Covers profitability, ratios, sensitivity, cost allocation, internal pricing and \
                  project evaluation.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Configuration directory (default: discover .fincalc/ or $FINCALC_DIR).
    #[arg(long, global = true, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Decimal places for printed results (overrides configuration).
    #[arg(long, global = true, value_name = "N")]
    pub precision: Option<usize>,

    /// When to use colours: auto, always, never.
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<ColorMode>,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List formulas grouped by category.
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a formula's variables and relation.
    Show(ShowArgs),

    /// Solve a formula for its single missing variable.
    Solve(SolveArgs),

    /// Recommend an internal transfer price.
    Transfer(TransferArgs),

    /// Work on one formula interactively.
    Calc(CalcArgs),

    /// Manage configuration.
    Config(ConfigArgs),

    /// Generate shell completion scripts.
    Completion(CompletionArgs),

    /// Print version information.
    Version,
}

// ---------------------------------------------------------------------------
// List / Show
// ---------------------------------------------------------------------------

/// Arguments for `fincalc list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show formulas whose name contains this text (case-insensitive).
    #[arg(short = 's', long)]
    pub search: Option<String>,
}

/// Arguments for `fincalc show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Formula id.
    pub id: u32,
}

// ---------------------------------------------------------------------------
// Solve
// ---------------------------------------------------------------------------

/// Arguments for `fincalc solve`.
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Formula id.
    pub id: u32,

    /// Known values as NAME=VALUE. Leave exactly one variable out, empty,
    /// or set to `?`.
    #[arg(value_name = "NAME=VALUE")]
    pub values: Vec<String>,
}

// ---------------------------------------------------------------------------
// Transfer
// ---------------------------------------------------------------------------

/// Arguments for `fincalc transfer`.
#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Capacity scenario: 1 / no-capacity, or 2 / spare-capacity.
    #[arg(short = 's', long, default_value = "1")]
    pub scenario: String,

    /// Supplier's external market price (scenario 1).
    #[arg(long, allow_negative_numbers = true)]
    pub market_price: Option<f64>,

    /// Supplier's variable cost (scenario 2).
    #[arg(long, allow_negative_numbers = true)]
    pub supplier_variable_cost: Option<f64>,

    /// Buyer's external purchase price (scenario 2).
    #[arg(long, allow_negative_numbers = true)]
    pub buyer_external_price: Option<f64>,
}

// ---------------------------------------------------------------------------
// Calc
// ---------------------------------------------------------------------------

/// Arguments for `fincalc calc`.
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Formula id.
    pub id: u32,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Arguments for `fincalc config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set a configuration value.
    Set(ConfigSetArgs),
    /// Get the effective value of a key.
    Get(ConfigKeyArgs),
    /// List all effective configuration values.
    List,
    /// Reset a key to its default.
    Unset(ConfigKeyArgs),
    /// Print the configuration directory in use.
    Path,
}

/// Arguments for `fincalc config set`.
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Arguments for `fincalc config get` and `fincalc config unset`.
#[derive(Args, Debug)]
pub struct ConfigKeyArgs {
    /// Configuration key.
    pub key: String,
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Arguments for `fincalc completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Completion subcommands.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate Bash completions.
    Bash,
    /// Generate Zsh completions.
    Zsh,
    /// Generate Fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_solve_values() {
        let cli = Cli::parse_from(["fincalc", "solve", "1", "salesPrice=10", "revenue=?"]);
        match cli.command {
            Some(Commands::Solve(args)) => {
                assert_eq!(args.id, 1);
                assert_eq!(args.values, vec!["salesPrice=10", "revenue=?"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["fincalc", "list", "--json", "--precision", "4", "--color", "never"]);
        assert!(cli.global.json);
        assert_eq!(cli.global.precision, Some(4));
        assert_eq!(cli.global.color, Some(ColorMode::Never));
    }

    #[test]
    fn ls_alias() {
        let cli = Cli::parse_from(["fincalc", "ls", "-s", "profit"]);
        assert!(matches!(cli.command, Some(Commands::List(ListArgs { search: Some(_) }))));
    }
}
