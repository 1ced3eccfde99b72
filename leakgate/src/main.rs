// leakgate/src/main.rs
//! Leakgate entry point.
//!
//! Parses the CLI, initializes logging, and dispatches to the command
//! implementations. Command outcomes map onto the process exit code:
//! 0 for a clean run, 1 when detections were recorded, 2 for
//! operational errors (including argument errors reported by clap).

use clap::Parser;
use log::info;

use leakgate::cli::Cli;
use leakgate::commands;
use leakgate::logger;

fn main() {
    let args = Cli::parse();

    let level = if args.quiet {
        Some(log::LevelFilter::Off)
    } else if args.debug {
        Some(log::LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    info!("leakgate started. Version: {}", env!("CARGO_PKG_VERSION"));

    match commands::run(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("leakgate: {e:#}");
            std::process::exit(2);
        }
    }
}
