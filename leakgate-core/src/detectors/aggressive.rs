// leakgate-core/src/detectors/aggressive.rs
//! The opt-in aggressive detector.
//!
//! Where the content detector only weighs runs drawn from a fixed
//! alphabet, this one estimates the raw-byte entropy of the whole word.
//! That catches randomness expressed outside the configured alphabet at
//! the price of more false positives, which is why it is disabled by
//! default and only ever sees words the content detector found clean.

use leakgate_entropy::byte_entropy;

use crate::config::AggressiveConfig;
use crate::detector::WordDetector;
use crate::errors::LeakgateError;

/// Whole-word raw-byte entropy detector.
pub struct AggressiveDetector {
    min_token_length: usize,
    entropy_threshold: f64,
}

impl AggressiveDetector {
    /// Builds a detector from validated settings.
    pub fn new(config: &AggressiveConfig) -> Result<Self, LeakgateError> {
        config.validate()?;
        Ok(Self {
            min_token_length: config.min_token_length,
            entropy_threshold: config.entropy_threshold,
        })
    }
}

impl WordDetector for AggressiveDetector {
    fn test<'w>(&self, word: &'w str) -> Option<&'w str> {
        if word.len() < self.min_token_length {
            return None;
        }
        if byte_entropy(word.as_bytes()) > self.entropy_threshold {
            return Some(word);
        }
        None
    }
}
