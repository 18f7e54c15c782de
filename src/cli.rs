use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "repo-doctor")]
#[command(author, version, about = "Static health checks for Python repositories")]
#[command(long_about = "Scans a Python repository tree, ranks the biggest files and longest \
    functions, and flags forbidden imports in core modules.\n\n\
    Exit codes:\n  \
    0 - Scan completed, no boundary violations\n  \
    1 - Scan failed (bad root, unreadable file, I/O error)\n  \
    2 - Scan completed, boundary violations found")]
pub struct Cli {
    /// Suppress the summary output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a repository and write the health report
    Scan(ScanArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Repository root to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File extensions to analyze (comma-separated, e.g., py,pyi)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Additional directory names to exclude (can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Additional forbidden top-level modules for core files
    #[arg(long)]
    pub forbid: Vec<String>,

    /// Report directory under the scan root (overrides config)
    #[arg(long)]
    pub report_dir: Option<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".repo-doctor.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
