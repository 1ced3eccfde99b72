// leakgate-core/src/report.rs
//! Provides the result sink for scan outcomes and utility functions for
//! logging matched words without leaking them into debug output.

use serde::{Deserialize, Serialize};
use log::debug;

use lazy_static::lazy_static;

use crate::errors::LeakgateError;

lazy_static! {
    /// A static boolean that is initialized once to determine if matched
    /// words are allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("LEAKGATE_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Terminal outcome recorded for a scanned path. Clean files produce no
/// entry at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Failed,
    Ignored,
}

/// One recorded outcome: the path, what happened, and a human-readable
/// message describing why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub path: String,
    pub status: ScanStatus,
    pub message: String,
}

/// Accumulates per-path outcomes over a scan run.
///
/// The scanner calls `fail` or `ignore` at most once per addition; a
/// path with neither call passed cleanly. Entries keep their insertion
/// order, so two scans over the same input produce identical reports.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionReport {
    entries: Vec<ReportEntry>,
}

impl DetectionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a detection failure for `path`.
    pub fn fail(&mut self, path: &str, message: String) {
        self.entries.push(ReportEntry {
            path: path.to_string(),
            status: ScanStatus::Failed,
            message,
        });
    }

    /// Records that `path` was skipped by the ignore policy.
    pub fn ignore(&mut self, path: &str, reason: String) {
        self.entries.push(ReportEntry {
            path: path.to_string(),
            status: ScanStatus::Ignored,
            message: reason,
        });
    }

    /// All recorded entries in insertion order.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// The entries recorded as detection failures.
    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries
            .iter()
            .filter(|e| e.status == ScanStatus::Failed)
    }

    /// The entries recorded as ignored.
    pub fn ignored(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries
            .iter()
            .filter(|e| e.status == ScanStatus::Ignored)
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, LeakgateError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LeakgateError::SerializationError(e.to_string()))
    }

    /// Writes the report as pretty-printed JSON to `writer`.
    pub fn write_json<W: std::io::Write>(&self, writer: W) -> Result<(), LeakgateError> {
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| LeakgateError::SerializationError(e.to_string()))
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_flagged_word_debug(module_path: &str, path: &str, word: &str) {
    debug!(
        "{} Flagged word in '{}': '{}'",
        module_path,
        path,
        get_loggable_content(word)
    );
}

pub fn log_ignored_addition_debug(module_path: &str, path: &str) {
    debug!("{} Skipping '{}': denied by ignore policy", module_path, path);
}
