// leakgate/src/commands/mod.rs
//! Command implementations for the leakgate CLI.

pub mod install;
pub mod scan;

use anyhow::Result;

use crate::cli::{Cli, Commands};

/// Exit code for a clean run (including a run where every entry was ignored).
pub const EXIT_CLEAN: i32 = 0;
/// Exit code when at least one detection was recorded.
pub const EXIT_DETECTIONS: i32 = 1;

/// Dispatches the parsed CLI to its command implementation and returns
/// the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Scan(args) => scan::run_scan(args),
        Commands::Install(args) => install::run_install(args),
    }
}
