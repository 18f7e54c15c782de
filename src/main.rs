use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use rayon::prelude::*;

use repo_doctor::checker::{BoundaryChecker, BoundaryPolicy, Violation};
use repo_doctor::cli::{Cli, ColorChoice, Commands, InitArgs, ScanArgs};
use repo_doctor::config::{Config, load_config};
use repo_doctor::metrics::{FileRecord, FunctionRecord, count_logical_lines, function_records};
use repo_doctor::output::{
    ColorMode, JsonFormatter, OutputFormat, SummaryFormatter, TextFormatter, render_csv,
};
use repo_doctor::parser::{ParseOutcome, parse_module};
use repo_doctor::report::{HealthReport, report_path};
use repo_doctor::scanner::{ExclusionPolicy, FileScanner, SourceWalker, read_source, relative_display};
use repo_doctor::{EXIT_FAILURE, EXIT_SUCCESS, EXIT_VIOLATIONS, RepoDoctorError};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Scan(args) => run_scan(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_scan(args: &ScanArgs, cli: &Cli) -> i32 {
    match run_scan_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    }
}

fn run_scan_impl(args: &ScanArgs, cli: &Cli) -> repo_doctor::Result<i32> {
    // 1. Validate the scan root
    let root = args.root.as_path();
    if !root.exists() {
        return Err(RepoDoctorError::Config(format!(
            "scan root not found: {}",
            root.display()
        )));
    }
    if !root.is_dir() {
        return Err(RepoDoctorError::Config(format!(
            "scan root is not a directory: {}",
            root.display()
        )));
    }

    // 2. Load configuration
    let config = load_config(root, args.config.as_deref(), cli.no_config)?;

    // 3. Resolve scan policies; CLI flags extend what the config provides
    let report_dir = args
        .report_dir
        .clone()
        .unwrap_or_else(|| config.report.dir.clone());
    let exclusions = build_exclusions(&config, &args.exclude, &report_dir);
    let boundary = build_boundary(&config, &args.forbid);
    let extensions = args
        .ext
        .clone()
        .unwrap_or_else(|| config.scan.extensions.clone());

    // 4. Walk the tree
    let walker = SourceWalker::new(exclusions, extensions);
    let files = walker.scan(root)?;

    // 5. Analyze each file (parallel with rayon; scan order is preserved)
    let checker = BoundaryChecker::new(boundary);
    let analyses = files
        .par_iter()
        .map(|path| analyze_file(root, path, &checker))
        .collect::<repo_doctor::Result<Vec<_>>>()?;

    // 6. Aggregate in scan order and rank
    let mut all_files = Vec::new();
    let mut all_functions = Vec::new();
    let mut all_violations = Vec::new();
    for analysis in analyses {
        all_files.push(analysis.file);
        all_functions.extend(analysis.functions);
        all_violations.extend(analysis.violations);
    }
    let health = HealthReport::build(all_files, all_functions, all_violations);

    // 7. Write the CSV report
    let csv_path = write_report(root, &report_dir, &health)?;

    // 8. Print the summary
    if !cli.quiet {
        let output = format_summary(args.format, &health, &csv_path, cli.color)?;
        print!("{output}");
    }

    // 9. Exit code reflects violations, not rankings
    if health.has_violations() {
        Ok(EXIT_VIOLATIONS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Directory names the walker must skip: configured set, CLI additions, and
/// the report directory itself so the tool never scans its own output.
fn build_exclusions(config: &Config, cli_excludes: &[String], report_dir: &str) -> ExclusionPolicy {
    let report_segment = report_dir
        .split(['/', '\\'])
        .find(|segment| !segment.is_empty())
        .unwrap_or(report_dir);

    let names = config
        .scan
        .exclude_dirs
        .iter()
        .cloned()
        .chain(cli_excludes.iter().cloned())
        .chain(std::iter::once(report_segment.to_string()));
    ExclusionPolicy::new(names)
}

fn build_boundary(config: &Config, cli_forbidden: &[String]) -> BoundaryPolicy {
    let modules = config
        .boundary
        .forbidden_modules
        .iter()
        .cloned()
        .chain(cli_forbidden.iter().cloned());
    BoundaryPolicy::new(modules)
}

struct FileAnalysis {
    file: FileRecord,
    functions: Vec<FunctionRecord>,
    violations: Vec<Violation>,
}

fn analyze_file(
    root: &Path,
    path: &Path,
    checker: &BoundaryChecker,
) -> repo_doctor::Result<FileAnalysis> {
    let relpath = relative_display(root, path);
    let source = read_source(path)?;

    let loc = count_logical_lines(&source);
    let outcome = parse_module(&source)?;

    let functions = match &outcome {
        ParseOutcome::Parsed(tree) => function_records(tree, &relpath),
        ParseOutcome::Invalid(_) => Vec::new(),
    };
    let violations = checker.check(&relpath, &outcome);

    Ok(FileAnalysis {
        file: FileRecord { relpath, loc },
        functions,
        violations,
    })
}

fn write_report(
    root: &Path,
    report_dir: &str,
    health: &HealthReport,
) -> repo_doctor::Result<PathBuf> {
    let path = report_path(root, report_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, render_csv(&health.rows()))?;
    Ok(path)
}

fn format_summary(
    format: OutputFormat,
    health: &HealthReport,
    csv_path: &Path,
    color: ColorChoice,
) -> repo_doctor::Result<String> {
    match format {
        OutputFormat::Text => {
            TextFormatter::new(color_choice_to_mode(color)).format(health, csv_path)
        }
        OutputFormat::Json => JsonFormatter.format(health, csv_path),
    }
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    }
}

fn run_init_impl(args: &InitArgs) -> repo_doctor::Result<()> {
    let output_path = &args.output;

    // Refuse to clobber an existing config unless forced
    if output_path.exists() && !args.force {
        return Err(RepoDoctorError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn generate_config_template() -> String {
    r#"# repo-doctor configuration file

[scan]
# File extensions to analyze
extensions = ["py"]

# Directory names to skip; dot-prefixed directories are always skipped.
# Configuring this replaces the built-in set.
# exclude_dirs = ["venv", "__pycache__", "build", "dist"]

[boundary]
# Top-level modules that files under a core/ directory must not import
forbidden_modules = ["requests", "subprocess", "sqlite3"]

[report]
# Directory under the scan root for project_health.csv
dir = "reports"
"#
    .to_string()
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
