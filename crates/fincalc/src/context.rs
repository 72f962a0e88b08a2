//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds everything a command handler needs: the
//! resolved configuration directory, the effective configuration, the
//! number format, and the formula registry.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use fincalc_config::{CalcConfig, config::MAX_PRECISION, find_config_dir, load_config};
use fincalc_registry::Registry;
use fincalc_ui::format::NumberFormat;
use fincalc_ui::terminal::set_color_mode;
use tracing::debug;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Configuration directory in use (e.g. `/project/.fincalc`), if any.
    pub config_dir: Option<PathBuf>,

    /// Effective configuration after file, environment and flag overrides.
    pub config: CalcConfig,

    /// How numbers are printed.
    pub format: NumberFormat,

    /// The built-in formula catalogue.
    pub registry: Registry,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Whether `--json` was given on the command line, as opposed to the
    /// `json` configuration default.
    pub json_flag: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Priority for every setting: flag > `FINCALC_*` environment >
    /// `.fincalc/config.yaml` > default.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let config_dir = match &global.config {
            Some(dir) => Some(dir.clone()),
            None => {
                let cwd = env::current_dir().context("failed to read current directory")?;
                find_config_dir(&cwd)
            }
        };

        let mut config = load_config(config_dir.as_deref())?;
        if let Some(precision) = global.precision {
            if precision > MAX_PRECISION {
                bail!("--precision must be at most {MAX_PRECISION}");
            }
            config.precision = precision;
        }
        if let Some(color) = global.color {
            config.color = color;
        }
        set_color_mode(config.color);
        debug!(?config_dir, ?config, "resolved runtime context");

        Ok(Self {
            format: NumberFormat {
                precision: config.precision,
                percent_suffix: config.percent_suffix,
            },
            json: global.json || config.json,
            json_flag: global.json,
            quiet: global.quiet,
            registry: Registry::builtin(),
            config_dir,
            config,
        })
    }
}
