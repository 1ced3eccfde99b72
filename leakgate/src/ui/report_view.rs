// leakgate/src/ui/report_view.rs
//! Renders a scan report for the console.
//!
//! Findings are shown as a table followed by a one-line summary. Colors
//! are applied only when stdout is a terminal, so redirected output and
//! test captures stay plain.

use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use leakgate_core::{DetectionReport, ScanStatus};

/// Prints the report to stdout.
pub fn print_report(report: &DetectionReport, scanned: usize) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    print_report_to(&mut stdout.lock(), report, scanned, supports_color)
}

fn print_report_to(
    writer: &mut dyn Write,
    report: &DetectionReport,
    scanned: usize,
    colored: bool,
) -> Result<()> {
    if !report.is_empty() {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Path", "Status", "Message"]);

        for entry in report.entries() {
            let status_cell = match (entry.status, colored) {
                (ScanStatus::Failed, true) => Cell::new("FAILED").fg(Color::Red),
                (ScanStatus::Failed, false) => Cell::new("FAILED"),
                (ScanStatus::Ignored, true) => Cell::new("IGNORED").fg(Color::Yellow),
                (ScanStatus::Ignored, false) => Cell::new("IGNORED"),
            };
            table.add_row(vec![
                Cell::new(&entry.path),
                status_cell,
                Cell::new(&entry.message),
            ]);
        }
        writeln!(writer, "{table}")?;
    }

    let flagged = report.failures().count();
    let ignored = report.ignored().count();
    let summary = if flagged > 0 {
        format!(
            "{} file(s) scanned: {} flagged, {} ignored.",
            scanned, flagged, ignored
        )
    } else if ignored > 0 {
        format!("{} file(s) scanned: {} ignored, no secrets found.", scanned, ignored)
    } else {
        format!("{} file(s) scanned: no secrets found.", scanned)
    };

    match (flagged > 0, colored) {
        (true, true) => writeln!(writer, "{}", summary.red())?,
        (false, true) => writeln!(writer, "{}", summary.green())?,
        (_, false) => writeln!(writer, "{}", summary)?,
    }
    Ok(())
}
