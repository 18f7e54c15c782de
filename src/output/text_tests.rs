use std::path::Path;

use super::*;
use crate::checker::{Violation, ViolationKind};
use crate::metrics::{FileRecord, FunctionRecord};

fn sample_report() -> HealthReport {
    HealthReport::build(
        vec![FileRecord {
            relpath: "big.py".to_string(),
            loc: 42,
        }],
        vec![FunctionRecord {
            relpath: "big.py".to_string(),
            name: "huge".to_string(),
            start_line: 10,
            end_line: 42,
        }],
        Vec::new(),
    )
}

fn violating_report() -> HealthReport {
    HealthReport::build(
        Vec::new(),
        Vec::new(),
        vec![
            Violation {
                relpath: "core/x.py".to_string(),
                kind: ViolationKind::ForbiddenImport,
                detail: "core/x.py imports forbidden module 'requests'".to_string(),
                line: Some(3),
            },
            Violation {
                relpath: "core/bad.py".to_string(),
                kind: ViolationKind::SyntaxError,
                detail: "invalid syntax at line 1".to_string(),
                line: None,
            },
        ],
    )
}

fn format_plain(report: &HealthReport) -> String {
    TextFormatter::new(ColorMode::Never)
        .format(report, Path::new("reports/project_health.csv"))
        .unwrap()
}

#[test]
fn header_names_tool_and_report_path() {
    let output = format_plain(&sample_report());
    assert!(output.starts_with("repo-doctor -> wrote reports/project_health.csv\n"));
}

#[test]
fn file_ranking_lines_are_right_aligned() {
    let output = format_plain(&sample_report());
    assert!(output.contains("Top 10 Biggest Python Files (LOC)"));
    assert!(output.lines().any(|line| line.trim_start() == "42  big.py"));
}

#[test]
fn function_ranking_lines_show_span_and_location() {
    let output = format_plain(&sample_report());
    assert!(output.contains("Top 10 Longest Functions (LOC)"));
    assert!(
        output
            .lines()
            .any(|line| line.trim_start() == "33  huge  big.py:10-42")
    );
}

#[test]
fn clean_report_omits_violation_section() {
    let output = format_plain(&sample_report());
    assert!(!output.contains("Boundary Violations"));
    assert!(output.contains("Result: no boundary violations found."));
}

#[test]
fn violations_are_listed_with_optional_line() {
    let output = format_plain(&violating_report());
    assert!(output.contains("Boundary Violations (core/)"));
    assert!(output.lines().any(
        |line| line.trim_start() == "core/x.py:3  core/x.py imports forbidden module 'requests'"
    ));
    assert!(
        output
            .lines()
            .any(|line| line.trim_start() == "core/bad.py:  invalid syntax at line 1")
    );
    assert!(output.contains("Result: boundary violations found."));
}

#[test]
fn titles_appear_even_for_an_empty_tree() {
    let report = HealthReport::build(Vec::new(), Vec::new(), Vec::new());
    let output = format_plain(&report);

    assert!(output.contains("Top 10 Biggest Python Files (LOC)"));
    assert!(output.contains("Top 10 Longest Functions (LOC)"));
    assert!(output.contains("Result: no boundary violations found."));
}

#[test]
fn never_mode_emits_no_escape_codes() {
    let output = format_plain(&violating_report());
    assert!(!output.contains('\x1b'));
}

#[test]
fn always_mode_colors_the_result() {
    let formatter = TextFormatter::new(ColorMode::Always);

    let dirty = formatter
        .format(&violating_report(), Path::new("reports/project_health.csv"))
        .unwrap();
    assert!(dirty.contains("\x1b[31m"));

    let clean = formatter
        .format(&sample_report(), Path::new("reports/project_health.csv"))
        .unwrap();
    assert!(clean.contains("\x1b[32m"));
    assert!(clean.contains("\x1b[1m"));
    assert!(clean.contains("\x1b[36m"));
}
