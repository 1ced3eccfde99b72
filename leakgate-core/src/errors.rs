//! errors.rs - Custom error types for the leakgate-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `leakgate-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LeakgateError {
    #[error("Scan configuration is invalid: {0}")]
    InvalidConfig(String),

    #[error("Failed to compile ignore pattern '{0}': {1}")]
    IgnorePatternError(String, regex::Error),

    #[error("Failed to serialize scan report: {0}")]
    SerializationError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    // Add other specific error types as the project grows
    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
