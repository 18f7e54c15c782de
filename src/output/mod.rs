mod csv;
mod json;
mod text;

pub use csv::render_csv;
pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use std::path::Path;

use crate::error::Result;
use crate::report::HealthReport;

/// Trait for rendering a finished scan into a terminal summary.
pub trait SummaryFormatter {
    /// Format the report into a printable summary.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &HealthReport, report_path: &Path) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
