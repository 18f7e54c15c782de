use std::fs;
use std::path::Path;

use crate::error::{RepoDoctorError, Result};

use super::Config;

/// File name probed for under the scan root when no explicit path is given.
pub const LOCAL_CONFIG_NAME: &str = ".repo-doctor.toml";

/// Resolves and loads the configuration for a scan.
///
/// Precedence: `--no-config` wins and yields the defaults, an explicit path
/// must exist and is used as-is, otherwise `.repo-doctor.toml` under the scan
/// root is used when present and the defaults apply when it is not.
///
/// # Errors
/// Returns an error if an explicit config path does not exist, or if a config
/// file cannot be read or parsed.
pub fn load_config(root: &Path, explicit: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    if let Some(path) = explicit {
        if !path.exists() {
            return Err(RepoDoctorError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return load_from_path(path);
    }

    let local = root.join(LOCAL_CONFIG_NAME);
    if local.exists() {
        load_from_path(&local)
    } else {
        Ok(Config::default())
    }
}

/// Reads and parses a single TOML config file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
