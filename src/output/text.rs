use std::io::Write as IoWrite;
use std::path::Path;

use crate::error::Result;
use crate::report::HealthReport;

use super::SummaryFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                // Check if stdout is a TTY
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_rankings(&self, report: &HealthReport, output: &mut Vec<u8>) {
        writeln!(output).ok();
        writeln!(output, "Top 10 Biggest Python Files (LOC)").ok();
        for record in &report.top_files {
            writeln!(output, "  {:>5}  {}", record.loc, record.relpath).ok();
        }

        writeln!(output).ok();
        writeln!(output, "Top 10 Longest Functions (LOC)").ok();
        for record in &report.top_functions {
            writeln!(
                output,
                "  {:>5}  {}  {}:{}-{}",
                record.line_span(),
                record.name,
                record.relpath,
                record.start_line,
                record.end_line
            )
            .ok();
        }
    }

    fn write_violations(&self, report: &HealthReport, output: &mut Vec<u8>) {
        if report.has_violations() {
            writeln!(output).ok();
            writeln!(output, "Boundary Violations (core/)").ok();
            for violation in &report.violations {
                let line = violation.line.map_or_else(String::new, |l| l.to_string());
                writeln!(
                    output,
                    "  {}:{}  {}",
                    violation.relpath, line, violation.detail
                )
                .ok();
            }
            writeln!(output).ok();
            writeln!(
                output,
                "{} boundary violations found.",
                self.paint("Result:", ansi::RED)
            )
            .ok();
        } else {
            writeln!(output).ok();
            writeln!(
                output,
                "{} no boundary violations found.",
                self.paint("Result:", ansi::GREEN)
            )
            .ok();
        }
    }
}

impl SummaryFormatter for TextFormatter {
    fn format(&self, report: &HealthReport, report_path: &Path) -> Result<String> {
        let mut output = Vec::new();

        let path = report_path.to_string_lossy().replace('\\', "/");
        writeln!(
            output,
            "{} -> wrote {}",
            self.paint("repo-doctor", ansi::BOLD),
            self.paint(&path, ansi::CYAN)
        )
        .ok();

        self.write_rankings(report, &mut output);
        self.write_violations(report, &mut output);

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
