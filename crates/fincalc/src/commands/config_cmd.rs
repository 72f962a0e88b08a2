//! `fincalc config` -- manage configuration (set/get/list/unset/path).
//!
//! `get` and `list` report the effective values, including environment and
//! flag overrides. `set` and `unset` edit only `.fincalc/config.yaml`.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use fincalc_config::{
    ensure_config_dir, find_config_dir_or_error, load_file_config, save_config,
};

use crate::cli::{ConfigArgs, ConfigCommands};
use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};

/// Execute the `fincalc config` command.
pub fn run(ctx: &RuntimeContext, args: &ConfigArgs) -> Result<()> {
    match &args.command {
        ConfigCommands::Set(set_args) => {
            let dir = writable_dir(ctx)?;
            let mut config = load_file_config(&dir)?;
            config.set(&set_args.key, &set_args.value)?;
            save_config(&dir, &config)
                .with_context(|| format!("failed to save configuration in {}", dir.display()))?;

            let value = config.get(&set_args.key)?;
            if ctx.json {
                output_json(&serde_json::json!({
                    "key": set_args.key,
                    "value": value,
                }));
            } else if !ctx.quiet {
                println!("Set {} = {}", set_args.key, value);
            }
        }

        ConfigCommands::Get(get_args) => {
            let value = ctx.config.get(&get_args.key)?;
            if ctx.json {
                output_json(&serde_json::json!({
                    "key": get_args.key,
                    "value": value,
                }));
            } else {
                println!("{}", value);
            }
        }

        ConfigCommands::List => {
            let entries = ctx.config.entries();
            if ctx.json {
                let map: serde_json::Map<String, serde_json::Value> = entries
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), serde_json::Value::String(v)))
                    .collect();
                output_json(&map);
            } else {
                let rows: Vec<Vec<String>> = entries
                    .into_iter()
                    .map(|(k, v)| vec![k.to_string(), v])
                    .collect();
                output_table(&["KEY", "VALUE"], &rows);
            }
        }

        ConfigCommands::Unset(unset_args) => {
            let dir = writable_dir(ctx)?;
            let mut config = load_file_config(&dir)?;
            config.unset(&unset_args.key)?;
            save_config(&dir, &config)
                .with_context(|| format!("failed to save configuration in {}", dir.display()))?;

            if ctx.json {
                output_json(&serde_json::json!({
                    "key": unset_args.key,
                    "unset": true,
                }));
            } else if !ctx.quiet {
                println!("Unset {}", unset_args.key);
            }
        }

        ConfigCommands::Path => {
            let dir = match &ctx.config_dir {
                Some(dir) => dir.clone(),
                None => find_config_dir_or_error(&current_dir()?)?,
            };
            if ctx.json {
                output_json(&serde_json::json!({ "path": dir }));
            } else {
                println!("{}", dir.display());
            }
        }
    }

    Ok(())
}

/// The directory `set`/`unset` write to: the one in use, or a new
/// `.fincalc/` in the working directory.
fn writable_dir(ctx: &RuntimeContext) -> Result<PathBuf> {
    match &ctx.config_dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(ensure_config_dir(&current_dir()?)?),
    }
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().context("failed to read current directory")
}
