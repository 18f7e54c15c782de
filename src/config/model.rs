use serde::{Deserialize, Serialize};

use crate::checker::DEFAULT_FORBIDDEN_MODULES;
use crate::report::DEFAULT_REPORT_DIR;
use crate::scanner::DEFAULT_EXCLUDED_DIRS;

/// Root of `.repo-doctor.toml`. Every section and key is optional; whatever
/// is absent falls back to the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub boundary: BoundaryConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// `[scan]` section: what the walker visits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// File extensions to analyze.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names the walker skips. Configuring this replaces the
    /// default set; dot-prefixed directories are skipped regardless.
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

/// `[boundary]` section: the core import rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BoundaryConfig {
    /// Top-level modules that core files must not import. Replaces the
    /// default set when configured.
    #[serde(default = "default_forbidden_modules")]
    pub forbidden_modules: Vec<String>,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            forbidden_modules: default_forbidden_modules(),
        }
    }
}

/// `[report]` section: where the CSV report lands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Directory under the scan root for the report file. The directory is
    /// also excluded from scanning so the tool never reads its own output.
    #[serde(default = "default_report_dir")]
    pub dir: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            dir: default_report_dir(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["py".to_string()]
}

fn default_exclude_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(ToString::to_string).collect()
}

fn default_forbidden_modules() -> Vec<String> {
    DEFAULT_FORBIDDEN_MODULES
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_report_dir() -> String {
    DEFAULT_REPORT_DIR.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
