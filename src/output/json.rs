use std::path::Path;

use serde::Serialize;

use crate::checker::Violation;
use crate::error::Result;
use crate::metrics::FunctionRecord;
use crate::report::HealthReport;

use super::SummaryFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    report_path: String,
    summary: Summary,
    top_files: Vec<FileEntry>,
    top_functions: Vec<FunctionEntry>,
    violations: Vec<ViolationEntry>,
}

#[derive(Serialize)]
struct Summary {
    files_scanned: usize,
    functions_seen: usize,
    violations: usize,
}

#[derive(Serialize)]
struct FileEntry {
    relpath: String,
    loc: usize,
}

#[derive(Serialize)]
struct FunctionEntry {
    relpath: String,
    name: String,
    start_line: usize,
    end_line: usize,
    loc: usize,
}

#[derive(Serialize)]
struct ViolationEntry {
    relpath: String,
    kind: String,
    detail: String,
    line: Option<usize>,
}

impl SummaryFormatter for JsonFormatter {
    fn format(&self, report: &HealthReport, report_path: &Path) -> Result<String> {
        let output = JsonOutput {
            report_path: report_path.to_string_lossy().replace('\\', "/"),
            summary: Summary {
                files_scanned: report.files_scanned,
                functions_seen: report.functions_seen,
                violations: report.violations.len(),
            },
            top_files: report
                .top_files
                .iter()
                .map(|record| FileEntry {
                    relpath: record.relpath.clone(),
                    loc: record.loc,
                })
                .collect(),
            top_functions: report.top_functions.iter().map(convert_function).collect(),
            violations: report.violations.iter().map(convert_violation).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_function(record: &FunctionRecord) -> FunctionEntry {
    FunctionEntry {
        relpath: record.relpath.clone(),
        name: record.name.clone(),
        start_line: record.start_line,
        end_line: record.end_line,
        loc: record.line_span(),
    }
}

fn convert_violation(violation: &Violation) -> ViolationEntry {
    ViolationEntry {
        relpath: violation.relpath.clone(),
        kind: violation.kind.as_str().to_string(),
        detail: violation.detail.clone(),
        line: violation.line,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
