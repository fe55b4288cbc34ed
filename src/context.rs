//! Config path resolution for trunkcfg.
//!
//! Resolution order:
//! 1. An explicit path given on the command line
//! 2. The `TRUNKCFG_CONFIG` environment variable
//! 3. `.trunk/trunk.yaml` in the working directory or the nearest ancestor

use crate::error::{ConfigError, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the config location.
pub const CONFIG_ENV_VAR: &str = "TRUNKCFG_CONFIG";

/// Directory trunk keeps its config in, relative to the repo root.
pub const TRUNK_DIR: &str = ".trunk";

/// Config file name inside [`TRUNK_DIR`].
pub const CONFIG_FILE_NAME: &str = "trunk.yaml";

/// Resolve the config path from the current working directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        debug!(var = CONFIG_ENV_VAR, "using config path from environment");
        return Ok(PathBuf::from(path));
    }

    let cwd = env::current_dir().map_err(|e| {
        ConfigError::Usage(format!("failed to get current working directory: {}", e))
    })?;
    find_config_from(&cwd)
}

/// Search `start` and its ancestors for `.trunk/trunk.yaml`.
pub fn find_config_from<P: AsRef<Path>>(start: P) -> Result<PathBuf> {
    let start = start.as_ref();

    for dir in start.ancestors() {
        let candidate = dir.join(TRUNK_DIR).join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "found config");
            return Ok(candidate);
        }
    }

    Err(ConfigError::Usage(format!(
        "no {}/{} found in '{}' or any parent directory.\n\
         Pass a path explicitly or set {}.",
        TRUNK_DIR,
        CONFIG_FILE_NAME,
        start.display(),
        CONFIG_ENV_VAR
    )))
}
