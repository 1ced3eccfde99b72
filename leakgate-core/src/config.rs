//! Configuration management for `leakgate-core`.
//!
//! This module defines the data structures for the scan configuration.
//! It handles serialization/deserialization of YAML configurations and
//! provides utilities for loading and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use leakgate_entropy::BASE64_SYMBOLS;

use crate::errors::LeakgateError;

// Checksums pin an ignore entry to one exact content: SHA-256, lowercase hex.
static CHECKSUM_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-f]{64}$").unwrap());

/// Settings for the alphabet-run entropy detector.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// The symbols a candidate run may be composed of. Must be ASCII,
    /// non-empty, and free of duplicates; also serves as the closed
    /// universe for entropy estimation.
    pub alphabet: String,
    /// Words at or below this byte length are never flagged; a run must
    /// be strictly longer than this to become an entropy candidate.
    pub min_secret_length: usize,
    /// Shannon entropy (bits per symbol) a candidate must strictly exceed.
    pub entropy_threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            alphabet: BASE64_SYMBOLS.to_string(),
            min_secret_length: 20,
            entropy_threshold: 4.5,
        }
    }
}

/// Settings for the optional aggressive detector, which re-tests words
/// the alphabet detector passed using a whole-word raw-byte entropy
/// estimate.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AggressiveConfig {
    /// Whether the aggressive detector runs at all.
    pub enabled: bool,
    /// Words shorter than this byte length are never re-tested.
    pub min_token_length: usize,
    /// Raw-byte entropy (bits per symbol) a word must strictly exceed.
    pub entropy_threshold: f64,
}

impl Default for AggressiveConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_token_length: 16,
            entropy_threshold: 4.0,
        }
    }
}

/// One entry of the `ignores` section: a glob-style path pattern,
/// optionally pinned to one exact file content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IgnoreEntry {
    /// Glob-style pattern matched against the full addition path
    /// (`*` and `?` wildcards).
    pub path: String,
    /// SHA-256 of the exempted content, lowercase hex. When present,
    /// the entry only applies while the file content matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

/// Represents the top-level scan configuration for Leakgate.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Settings for the alphabet-run entropy detector.
    pub detector: DetectorConfig,
    /// Settings for the optional aggressive detector.
    pub aggressive: AggressiveConfig,
    /// Paths to skip during scanning.
    pub ignores: Vec<IgnoreEntry>,
}

impl ScanConfig {
    /// Loads a scan configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading scan configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ScanConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        debug!(
            "Loaded scan configuration with {} ignore entries.",
            config.ignores.len()
        );

        Ok(config)
    }

    /// Loads the default scan configuration from the embedded string.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default scan configuration from embedded string...");
        let default_yaml = include_str!("../config/default.yml");
        let config: ScanConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default configuration")?;
        Ok(config)
    }

    /// Validates the whole configuration, reporting every problem at once.
    pub fn validate(&self) -> Result<(), LeakgateError> {
        let mut errors = self.detector.errors();
        errors.extend(self.aggressive.errors());
        errors.extend(self.ignore_errors());
        fold_errors(errors)
    }

    fn ignore_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        for (index, entry) in self.ignores.iter().enumerate() {
            if entry.path.is_empty() {
                errors.push(format!("`ignores[{}]` has an empty `path` field.", index));
            }
            if let Some(checksum) = &entry.checksum {
                if !CHECKSUM_FORMAT.is_match(checksum) {
                    errors.push(format!(
                        "`ignores[{}]` has a malformed `checksum` (expected 64 lowercase hex characters).",
                        index
                    ));
                }
            }
        }
        errors
    }
}

impl DetectorConfig {
    /// Validates the detector settings in isolation.
    pub fn validate(&self) -> Result<(), LeakgateError> {
        fold_errors(self.errors())
    }

    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.alphabet.is_empty() {
            errors.push("`detector.alphabet` must not be empty.".to_string());
        }
        if !self.alphabet.is_ascii() {
            errors.push("`detector.alphabet` must contain only ASCII symbols.".to_string());
        }
        let mut seen = [false; 256];
        for &b in self.alphabet.as_bytes() {
            if seen[b as usize] {
                errors.push(format!(
                    "`detector.alphabet` lists the symbol '{}' more than once.",
                    b as char
                ));
                break;
            }
            seen[b as usize] = true;
        }
        if self.min_secret_length == 0 {
            errors.push("`detector.min_secret_length` must be greater than zero.".to_string());
        }
        if !self.entropy_threshold.is_finite() || self.entropy_threshold <= 0.0 {
            errors.push(
                "`detector.entropy_threshold` must be a positive, finite number.".to_string(),
            );
        }
        errors
    }
}

impl AggressiveConfig {
    /// Validates the aggressive detector settings in isolation.
    pub fn validate(&self) -> Result<(), LeakgateError> {
        fold_errors(self.errors())
    }

    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.min_token_length == 0 {
            errors.push("`aggressive.min_token_length` must be greater than zero.".to_string());
        }
        if !self.entropy_threshold.is_finite() || self.entropy_threshold <= 0.0 {
            errors.push(
                "`aggressive.entropy_threshold` must be a positive, finite number.".to_string(),
            );
        }
        errors
    }
}

fn fold_errors(errors: Vec<String>) -> Result<(), LeakgateError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(LeakgateError::InvalidConfig(format!(
            "Scan configuration validation failed:\n{}",
            errors.join("\n")
        )))
    }
}
