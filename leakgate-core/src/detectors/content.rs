// leakgate-core/src/detectors/content.rs
//! The alphabet-run entropy detector and the scan driver.
//!
//! `ContentDetector` implements the primary detection strategy: within
//! each word it extracts maximal runs of alphabet symbols and flags the
//! word as soon as one run's Shannon entropy, estimated against the
//! full alphabet universe, exceeds the configured threshold. Words the
//! entropy check passes can optionally be handed to a fallback
//! detector.
//!
//! The same type drives whole-batch scans: for every addition it asks
//! the ignore policy first, then walks the content line by line and
//! word by word, stopping at the first match per file. Files without a
//! match produce no report entry at all.
//!
//! License: MIT OR Apache-2.0

use leakgate_entropy::{shannon_entropy, Alphabet, Candidates};

use crate::addition::Addition;
use crate::config::DetectorConfig;
use crate::detector::WordDetector;
use crate::errors::LeakgateError;
use crate::ignore::IgnorePolicy;
use crate::report::{log_flagged_word_debug, log_ignored_addition_debug, DetectionReport};

/// The alphabet-run entropy detector.
pub struct ContentDetector {
    alphabet: Alphabet,
    min_secret_length: usize,
    entropy_threshold: f64,
    fallback: Option<Box<dyn WordDetector>>,
}

impl ContentDetector {
    /// Builds a detector from validated settings.
    pub fn new(config: &DetectorConfig) -> Result<Self, LeakgateError> {
        config.validate()?;
        Ok(Self {
            alphabet: Alphabet::new(&config.alphabet),
            min_secret_length: config.min_secret_length,
            entropy_threshold: config.entropy_threshold,
            fallback: None,
        })
    }

    /// Chains a fallback detector behind the entropy check. The fallback
    /// only sees words the entropy check found clean.
    pub fn with_fallback(mut self, fallback: Box<dyn WordDetector>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Returns the first offending word in `content`, walking lines in
    /// order and words in line order.
    pub fn first_match<'c>(&self, content: &'c str) -> Option<&'c str> {
        content
            .split('\n')
            .flat_map(str::split_whitespace)
            .find_map(|word| self.test(word))
    }

    /// Scans a batch of additions, recording outcomes in `report`.
    ///
    /// Per addition: the ignore policy is consulted before any content
    /// is read; a denied addition is recorded as ignored and never
    /// classified. Otherwise the first match, if any, is recorded as a
    /// failure and the rest of the file is skipped. A clean file leaves
    /// no trace in the report.
    pub fn scan(
        &self,
        additions: &[Addition],
        ignores: &dyn IgnorePolicy,
        report: &mut DetectionReport,
    ) {
        for addition in additions {
            if ignores.denies(addition) {
                log_ignored_addition_debug(module_path!(), &addition.path);
                report.ignore(
                    &addition.path,
                    format!(
                        "{} was ignored by an ignore pattern in the scan configuration",
                        addition.path
                    ),
                );
                continue;
            }

            let content = addition.content_lossy();
            if let Some(word) = self.first_match(&content) {
                log_flagged_word_debug(module_path!(), &addition.path, word);
                report.fail(
                    &addition.path,
                    format!(
                        "Expected file to not contain base64 encoded texts such as: {}",
                        word
                    ),
                );
            }
        }
    }
}

impl WordDetector for ContentDetector {
    fn test<'w>(&self, word: &'w str) -> Option<&'w str> {
        let flagged = Candidates::new(word, &self.alphabet, self.min_secret_length).any(|run| {
            shannon_entropy(run.as_bytes(), self.alphabet.symbols()) > self.entropy_threshold
        });
        if flagged {
            // The whole word is reported, not the run, so the finding
            // keeps its surrounding context.
            return Some(word);
        }
        match &self.fallback {
            Some(fallback) => fallback.test(word),
            None => None,
        }
    }
}
