// leakgate/src/commands/scan.rs
//! Scan command implementation.
//!
//! Resolves the configuration (flag or `LEAKGATE_CONFIG`, then a
//! `.leakgate.yml` in the working directory, then the embedded
//! defaults), collects the additions to scan, runs the detector, and
//! renders the report.

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use leakgate_core::{
    Addition, AggressiveDetector, ConfiguredIgnores, ContentDetector, DetectionReport, ScanConfig,
};

use crate::cli::ScanCommand;
use crate::commands::{EXIT_CLEAN, EXIT_DETECTIONS};
use crate::git;
use crate::ui::report_view;

/// Configuration file discovered in the working directory when no
/// explicit path is given.
const CONFIG_FILE_NAME: &str = ".leakgate.yml";

/// The main operation runner for `leakgate scan`.
pub fn run_scan(args: ScanCommand) -> Result<i32> {
    info!("Starting scan operation.");
    let config = resolve_config(args.config.as_deref())?;

    let mut detector = ContentDetector::new(&config.detector)?;
    if args.aggressive || config.aggressive.enabled {
        debug!("Aggressive detector enabled.");
        detector = detector.with_fallback(Box::new(AggressiveDetector::new(&config.aggressive)?));
    }
    let ignores = ConfiguredIgnores::from_entries(&config.ignores)?;

    let additions = if args.staged {
        git::staged_additions()?
    } else if !args.paths.is_empty() {
        path_additions(&args.paths)?
    } else {
        bail!("nothing to scan: pass one or more paths, or --staged to scan the git index");
    };

    debug!("Scanning {} addition(s).", additions.len());
    let mut report = DetectionReport::new();
    detector.scan(&additions, &ignores, &mut report);

    handle_report_output(&args, &report, additions.len())?;

    if report.has_failures() {
        Ok(EXIT_DETECTIONS)
    } else {
        Ok(EXIT_CLEAN)
    }
}

fn resolve_config(explicit: Option<&Path>) -> Result<ScanConfig> {
    if let Some(path) = explicit {
        return ScanConfig::load_from_file(path);
    }
    let discovered = Path::new(CONFIG_FILE_NAME);
    if discovered.exists() {
        return ScanConfig::load_from_file(discovered);
    }
    debug!("No {} found; using the built-in defaults.", CONFIG_FILE_NAME);
    ScanConfig::load_default()
}

/// Reads the named files into additions. Directories are skipped with a
/// warning so that shell globs over mixed entries stay usable; a named
/// file that cannot be read is an error.
fn path_additions(paths: &[PathBuf]) -> Result<Vec<Addition>> {
    let mut additions = Vec::with_capacity(paths.len());
    for path in paths {
        if path.is_dir() {
            warn!(
                "Skipping directory {} (leakgate scans regular files).",
                path.display()
            );
            continue;
        }
        let data =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        additions.push(Addition::new(path.to_string_lossy(), data));
    }
    Ok(additions)
}

fn handle_report_output(args: &ScanCommand, report: &DetectionReport, scanned: usize) -> Result<()> {
    if let Some(path) = &args.json_file {
        let file = fs::File::create(path)
            .with_context(|| format!("Failed to create JSON report file {}", path.display()))?;
        report.write_json(file)?;
        info!("Wrote JSON report to {}", path.display());
    } else if args.json_stdout {
        println!("{}", report.to_json_string()?);
    } else {
        report_view::print_report(report, scanned)?;
    }
    Ok(())
}
