//! Discovery and management of the `.fincalc/` directory.
//!
//! The directory holds per-project settings. It is found by walking up from
//! the working directory, unless `FINCALC_DIR` points somewhere explicitly.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ConfigError;

/// The name of the project configuration directory.
pub const CONFIG_DIR_NAME: &str = ".fincalc";

/// The environment variable that overrides discovery.
pub const CONFIG_DIR_ENV: &str = "FINCALC_DIR";

/// Walk up the directory tree from `start` looking for a `.fincalc/`
/// directory.
///
/// `FINCALC_DIR` is checked first and wins when it names an existing
/// directory. Returns `None` once the filesystem root is reached.
///
/// # Examples
///
/// ```no_run
/// use fincalc_config::config_dir::find_config_dir;
/// use std::path::Path;
///
/// if let Some(dir) = find_config_dir(Path::new(".")) {
///     println!("Using settings from {}", dir.display());
/// }
/// ```
pub fn find_config_dir(start: &Path) -> Option<PathBuf> {
    let env_dir = std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from);
    find_config_dir_with(start, env_dir)
}

fn find_config_dir_with(start: &Path, env_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = env_dir.filter(|d| d.is_dir()) {
        debug!(dir = %dir.display(), "config dir from environment");
        return Some(dir);
    }

    let start = start.canonicalize().ok()?;
    let found = start
        .ancestors()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .find(|candidate| candidate.is_dir());
    debug!(start = %start.display(), ?found, "config dir lookup");
    found
}

/// Like [`find_config_dir`], but a missing directory is an error.
///
/// # Errors
///
/// Returns [`ConfigError::ConfigDirNotFound`] if no `.fincalc/` directory is
/// found.
pub fn find_config_dir_or_error(start: &Path) -> Result<PathBuf, ConfigError> {
    find_config_dir(start).ok_or(ConfigError::ConfigDirNotFound)
}

/// Ensure a `.fincalc/` directory exists at `path`.
///
/// If `path` itself is not called `.fincalc`, a `.fincalc/` subdirectory is
/// created under it. Returns the directory path.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if directory creation fails.
pub fn ensure_config_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    let config_dir = if path.ends_with(CONFIG_DIR_NAME) {
        path.to_path_buf()
    } else {
        path.join(CONFIG_DIR_NAME)
    };

    std::fs::create_dir_all(&config_dir)?;
    Ok(config_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
