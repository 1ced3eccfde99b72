// leakgate-core/src/detector.rs
//! Defines the core WordDetector trait.
//!
//! The `WordDetector` trait is the seam between the scanner and any
//! secret-detection strategy. The primary implementation is the
//! alphabet-run entropy detector; an optional aggressive detector can
//! be chained behind it. The trait keeps those strategies
//! interchangeable without the scanner knowing which one is active.
//!
//! License: MIT OR Apache-2.0

/// A trait that defines the contract for testing a single word.
///
/// Implementations examine one whitespace-delimited word at a time and
/// decide whether it should be reported. The returned slice borrows from
/// the word, never from the detector, so callers may hold onto it while
/// continuing to use the detector.
pub trait WordDetector: Send + Sync {
    /// Tests `word` and returns the offending text when it looks like a
    /// secret, or `None` when the word is clean.
    ///
    /// # Arguments
    /// * `word` - A single whitespace-delimited token from the scanned content.
    fn test<'w>(&self, word: &'w str) -> Option<&'w str>;
}
