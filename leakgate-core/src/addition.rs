// leakgate-core/src/addition.rs
//! Represents a single staged file handed to the scanner.
//!
//! An `Addition` carries the repository-relative path of a file together
//! with its raw byte content. Content is kept as bytes until scanning
//! time so that binary files pass through the same code path as text.

use sha2::{Digest, Sha256};
use std::borrow::Cow;

/// A file staged for scanning: its path and raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addition {
    /// Repository-relative path, as reported by the caller.
    pub path: String,
    /// Raw file content. Not required to be valid UTF-8.
    pub data: Vec<u8>,
}

impl Addition {
    pub fn new(path: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }

    /// The content as text. Invalid UTF-8 sequences are replaced with
    /// U+FFFD, which is never an alphabet symbol and therefore behaves
    /// as a separator during candidate extraction.
    pub fn content_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    /// SHA-256 of the raw content, lowercase hex. Checksum-pinned ignore
    /// entries compare against this value.
    pub fn checksum(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.data);
        hex::encode(hasher.finalize())
    }
}
