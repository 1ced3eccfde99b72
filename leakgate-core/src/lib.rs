// leakgate-core/src/lib.rs
//! # Leakgate Core Library
//!
//! `leakgate-core` provides the fundamental, platform-independent logic for
//! detecting high-entropy secrets in staged file content. It defines the data
//! structures for scan configuration, implements the alphabet-run entropy
//! detector, and exposes a pluggable `WordDetector` trait so detection
//! strategies can be chained or swapped.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! classification of input data based on the configured thresholds, without
//! concerns for I/O or application-specific state management. Reading staged
//! files, discovering configuration and rendering results belong to the CLI.
//!
//! ## Modules
//!
//! * `config`: Defines `ScanConfig` and its sections for detector tuning and ignores.
//! * `addition`: Defines `Addition`, a staged file handed to the scanner.
//! * `detector`: Defines the `WordDetector` trait, enabling a modular design.
//! * `detectors`: Contains concrete implementations of the `WordDetector` trait.
//! * `ignore`: Defines the `IgnorePolicy` trait and the configured implementation.
//! * `report`: Defines the result sink that records per-path outcomes.
//! * `errors`: Defines the structured error type for the library.
//!
//! ## Public API
//!
//! **Configuration**
//!
//! * [`ScanConfig`]: The top-level scan configuration, including loading and validation.
//! * [`ScanConfig::load_from_file`]: Loads a configuration from a YAML file.
//! * [`ScanConfig::load_default`]: Loads the built-in default configuration.
//!
//! **Detection**
//!
//! * [`WordDetector`]: A trait for pluggable word-level detection strategies.
//! * [`ContentDetector`]: The alphabet-run entropy detector and scan driver.
//! * [`AggressiveDetector`]: The opt-in whole-word raw-byte entropy detector.
//!
//! **Scan Inputs and Outcomes**
//!
//! * [`Addition`]: A staged file (path plus raw content) handed to the scanner.
//! * [`IgnorePolicy`] / [`ConfiguredIgnores`]: Decide which additions are skipped.
//! * [`DetectionReport`]: Accumulates per-path outcomes; clean files stay silent.
//!
//! ## Usage Example
//!
//! ```rust
//! use leakgate_core::{Addition, ConfiguredIgnores, ContentDetector, DetectionReport, ScanConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the built-in default configuration.
//!     let config = ScanConfig::load_default()?;
//!
//!     // 2. Build the detector and the ignore policy from it.
//!     let detector = ContentDetector::new(&config.detector)?;
//!     let ignores = ConfiguredIgnores::from_entries(&config.ignores)?;
//!
//!     // 3. Prepare the staged content to scan.
//!     let additions = vec![Addition::new(
//!         "notes.txt",
//!         b"deploy key: wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY".to_vec(),
//!     )];
//!
//!     // 4. Scan and inspect the outcomes.
//!     let mut report = DetectionReport::new();
//!     detector.scan(&additions, &ignores, &mut report);
//!
//!     for entry in report.failures() {
//!         println!("{}: {}", entry.path, entry.message);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The library uses `anyhow::Error` for fallible loading operations and the
//! structured [`LeakgateError`] for programmatically handleable failures such
//! as configuration validation.
//!
//! ## Design Principles
//!
//! * **Pluggable Detection:** The `WordDetector` trait allows detection
//!   strategies to be chained behind the entropy check or replaced outright.
//! * **Stateless:** The core library does not maintain application state.
//! * **Deterministic:** Scanning the same additions with the same
//!   configuration always produces an identical report.
//!
//! ---
//! License: MIT OR Apache-2.0

// All modules must be declared before they can be used.
pub mod addition;
pub mod config;
pub mod detector;
pub mod detectors;
pub mod errors;
pub mod ignore;
pub mod report;

/// Re-exports the public configuration types for the scan pipeline.
pub use config::{AggressiveConfig, DetectorConfig, IgnoreEntry, ScanConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::LeakgateError;

/// Re-exports the staged-file input type.
pub use addition::Addition;

/// Re-exports the core detection trait.
pub use detector::WordDetector;

/// Re-exports the concrete detector implementations.
pub use detectors::aggressive::AggressiveDetector;
pub use detectors::content::ContentDetector;

/// Re-exports the ignore policy trait and its configured implementation.
pub use ignore::{ConfiguredIgnores, IgnorePolicy};

/// Re-exports the result sink types and log-redaction helpers.
pub use report::{redact_sensitive, DetectionReport, ReportEntry, ScanStatus};
