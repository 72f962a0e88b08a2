//! Configuration management for fincalc.
//!
//! This crate discovers the `.fincalc/` project directory, loads
//! `.fincalc/config.yaml` layered with `FINCALC_*` environment variables, and
//! provides key-based access for the `config` subcommand.

pub mod config;
pub mod config_dir;

pub use config::{CalcConfig, ColorMode, ConfigError, load_config, load_file_config, save_config};
pub use config_dir::{ensure_config_dir, find_config_dir, find_config_dir_or_error};
