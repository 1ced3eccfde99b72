// leakgate/src/cli.rs
//! This file defines the command-line interface (CLI) for the leakgate
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "leakgate",
    author = "Leakgate Maintainers",
    version = env!("CARGO_PKG_VERSION"),
    about = "Keep high-entropy secrets out of your commits",
    long_about = "Leakgate is a pre-commit guard that scans staged file content for strings that look like encoded secrets. It extracts runs of base64-alphabet characters from every word and flags the word as soon as one run's Shannon entropy exceeds a configurable threshold, so access keys and tokens are caught before they ever reach a commit.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for this run)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `leakgate` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scans files or the staged git index for high-entropy secrets.
    #[command(about = "Scans files or the staged git index for high-entropy secrets.")]
    Scan(ScanCommand),

    /// Installs leakgate as the repository's pre-commit hook.
    #[command(about = "Installs leakgate as the repository's pre-commit hook.")]
    Install(InstallCommand),
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Files to scan. Omit together with --staged to scan the git index.
    #[arg(value_name = "PATH", conflicts_with = "staged", help = "Files to scan.")]
    pub paths: Vec<PathBuf>,

    /// Scan the files currently staged in the git index.
    #[arg(long, help = "Scan the files currently staged in the git index.")]
    pub staged: bool,

    /// Path to a custom scan configuration file (YAML).
    #[arg(
        long = "config",
        value_name = "FILE",
        env = "LEAKGATE_CONFIG",
        help = "Path to a custom scan configuration file (YAML)."
    )]
    pub config: Option<PathBuf>,

    /// Enable the aggressive whole-word entropy detector for this run.
    #[arg(long, help = "Enable the aggressive whole-word entropy detector.")]
    pub aggressive: bool,

    /// Print the scan report as JSON to stdout (conflicts with --json-file).
    #[arg(
        long = "json-stdout",
        conflicts_with = "json_file",
        help = "Print the scan report to stdout as JSON."
    )]
    pub json_stdout: bool,

    /// Export the scan report to a JSON file.
    #[arg(
        long = "json-file",
        value_name = "FILE",
        help = "Export the scan report to a JSON file."
    )]
    pub json_file: Option<PathBuf>,
}

/// Arguments for the `install` command.
#[derive(Parser, Debug)]
pub struct InstallCommand {
    /// Overwrite an existing pre-commit hook.
    #[arg(long, short = 'f', help = "Overwrite an existing pre-commit hook.")]
    pub force: bool,
}
