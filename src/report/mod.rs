use std::cmp::Reverse;
use std::path::{Path, PathBuf};

use crate::checker::Violation;
use crate::metrics::{FileRecord, FunctionRecord};

/// How many files and functions the rankings keep.
pub const TOP_N: usize = 10;

/// Default report directory under the scan root.
pub const DEFAULT_REPORT_DIR: &str = "reports";

/// File name of the CSV report inside the report directory.
pub const REPORT_FILE_NAME: &str = "project_health.csv";

/// Column order of the CSV report.
pub const REPORT_HEADER: [&str; 6] = ["section", "relpath", "metric", "value", "detail", "line"];

/// Aggregated scan results: the ranked hot spots plus every violation.
pub struct HealthReport {
    pub top_files: Vec<FileRecord>,
    pub top_functions: Vec<FunctionRecord>,
    pub violations: Vec<Violation>,
    pub files_scanned: usize,
    pub functions_seen: usize,
}

impl HealthReport {
    /// Ranks the collected records. Sorting is stable and the inputs arrive
    /// in scan order, so equal measurements keep their scan order in the
    /// rankings no matter how often the scan is repeated.
    #[must_use]
    pub fn build(
        files: Vec<FileRecord>,
        functions: Vec<FunctionRecord>,
        violations: Vec<Violation>,
    ) -> Self {
        let files_scanned = files.len();
        let functions_seen = functions.len();

        let mut top_files = files;
        top_files.sort_by_key(|record| Reverse(record.loc));
        top_files.truncate(TOP_N);

        let mut top_functions = functions;
        top_functions.sort_by_key(|record| Reverse(record.line_span()));
        top_functions.truncate(TOP_N);

        Self {
            top_files,
            top_functions,
            violations,
            files_scanned,
            functions_seen,
        }
    }

    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Report rows in section order: files, then functions, then violations.
    #[must_use]
    pub fn rows(&self) -> Vec<ReportRow> {
        let mut rows = Vec::new();
        for record in &self.top_files {
            rows.push(ReportRow::file(record));
        }
        for record in &self.top_functions {
            rows.push(ReportRow::function(record));
        }
        for violation in &self.violations {
            rows.push(ReportRow::violation(violation));
        }
        rows
    }
}

/// One data row of the CSV report, already stringified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub section: &'static str,
    pub relpath: String,
    pub metric: String,
    pub value: String,
    pub detail: String,
    pub line: String,
}

impl ReportRow {
    fn file(record: &FileRecord) -> Self {
        Self {
            section: "file",
            relpath: record.relpath.clone(),
            metric: "loc".to_string(),
            value: record.loc.to_string(),
            detail: String::new(),
            line: String::new(),
        }
    }

    fn function(record: &FunctionRecord) -> Self {
        Self {
            section: "function",
            relpath: record.relpath.clone(),
            metric: "loc".to_string(),
            value: record.line_span().to_string(),
            detail: format!(
                "{} ({}-{})",
                record.name, record.start_line, record.end_line
            ),
            line: record.start_line.to_string(),
        }
    }

    fn violation(violation: &Violation) -> Self {
        Self {
            section: "violation",
            relpath: violation.relpath.clone(),
            metric: violation.kind.as_str().to_string(),
            value: "1".to_string(),
            detail: violation.detail.clone(),
            line: violation.line.map_or_else(String::new, |l| l.to_string()),
        }
    }

    #[must_use]
    pub fn fields(&self) -> [&str; 6] {
        [
            self.section,
            &self.relpath,
            &self.metric,
            &self.value,
            &self.detail,
            &self.line,
        ]
    }
}

/// Where the CSV report lives for a given scan root and report directory.
#[must_use]
pub fn report_path(root: &Path, report_dir: &str) -> PathBuf {
    root.join(report_dir).join(REPORT_FILE_NAME)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
