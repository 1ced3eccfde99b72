// leakgate-core/src/ignore.rs
//! Ignore policy for the scanner.
//!
//! The scanner consults an `IgnorePolicy` before looking at a file's
//! content. The concrete `ConfiguredIgnores` implementation is built
//! from the `ignores` section of the scan configuration: glob-style
//! path patterns, each optionally pinned to one exact file content via
//! a SHA-256 checksum. A pinned entry stops matching as soon as the
//! file changes, which forces a fresh review of the exemption.
//!
//! License: MIT OR Apache-2.0

use regex::Regex;

use crate::addition::Addition;
use crate::config::IgnoreEntry;
use crate::errors::LeakgateError;

/// Decides whether an addition is skipped without scanning.
pub trait IgnorePolicy: Send + Sync {
    /// Pure predicate: `true` when `addition` must not be scanned.
    fn denies(&self, addition: &Addition) -> bool;
}

struct CompiledIgnore {
    pattern: Regex,
    checksum: Option<String>,
}

/// Ignore entries from the scan configuration, with their glob patterns
/// compiled once at construction.
pub struct ConfiguredIgnores {
    ignores: Vec<CompiledIgnore>,
}

impl ConfiguredIgnores {
    /// Compiles the configured entries into a usable policy.
    pub fn from_entries(entries: &[IgnoreEntry]) -> Result<Self, LeakgateError> {
        let mut ignores = Vec::with_capacity(entries.len());
        for entry in entries {
            ignores.push(CompiledIgnore {
                pattern: glob_to_regex(&entry.path)?,
                checksum: entry.checksum.clone(),
            });
        }
        Ok(Self { ignores })
    }

    /// A policy that denies nothing.
    pub fn empty() -> Self {
        Self { ignores: Vec::new() }
    }
}

impl IgnorePolicy for ConfiguredIgnores {
    fn denies(&self, addition: &Addition) -> bool {
        self.ignores.iter().any(|ignore| {
            ignore.pattern.is_match(&addition.path)
                && ignore
                    .checksum
                    .as_ref()
                    .map_or(true, |pinned| *pinned == addition.checksum())
        })
    }
}

/// Translates a glob-style pattern into an anchored regex.
///
/// `*` matches any run of characters (including `/`) and `?` matches a
/// single character; everything else is literal.
fn glob_to_regex(pattern: &str) -> Result<Regex, LeakgateError> {
    let mut translated = String::with_capacity(pattern.len() + 8);
    translated.push('^');
    for c in pattern.chars() {
        match c {
            '*' => translated.push_str(".*"),
            '?' => translated.push('.'),
            _ => translated.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4]))),
        }
    }
    translated.push('$');
    Regex::new(&translated)
        .map_err(|e| LeakgateError::IgnorePatternError(pattern.to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, checksum: Option<&str>) -> IgnoreEntry {
        IgnoreEntry {
            path: path.to_string(),
            checksum: checksum.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_policy_denies_nothing() {
        let policy = ConfiguredIgnores::empty();
        assert!(!policy.denies(&Addition::new("secrets.txt", b"anything".to_vec())));
    }

    #[test]
    fn test_exact_path_match() {
        let policy = ConfiguredIgnores::from_entries(&[entry("docs/readme.md", None)]).unwrap();
        assert!(policy.denies(&Addition::new("docs/readme.md", Vec::new())));
        assert!(!policy.denies(&Addition::new("docs/readme.md.bak", Vec::new())));
        assert!(!policy.denies(&Addition::new("other/docs/readme.md", Vec::new())));
    }

    #[test]
    fn test_star_glob_spans_directories() {
        let policy = ConfiguredIgnores::from_entries(&[entry("testdata/*.pem", None)]).unwrap();
        assert!(policy.denies(&Addition::new("testdata/server.pem", Vec::new())));
        assert!(policy.denies(&Addition::new("testdata/certs/ca.pem", Vec::new())));
        assert!(!policy.denies(&Addition::new("src/server.pem", Vec::new())));
    }

    #[test]
    fn test_question_mark_matches_one_character() {
        let policy = ConfiguredIgnores::from_entries(&[entry("key?.txt", None)]).unwrap();
        assert!(policy.denies(&Addition::new("key1.txt", Vec::new())));
        assert!(!policy.denies(&Addition::new("key10.txt", Vec::new())));
    }

    #[test]
    fn test_literal_dots_are_not_wildcards() {
        let policy = ConfiguredIgnores::from_entries(&[entry("a.txt", None)]).unwrap();
        assert!(!policy.denies(&Addition::new("aYtxt", Vec::new())));
    }

    #[test]
    fn test_checksum_pin_matches_only_exact_content() {
        let pinned = Addition::new("fixture.txt", b"hello".to_vec());
        let policy =
            ConfiguredIgnores::from_entries(&[entry("fixture.txt", Some(&pinned.checksum()))])
                .unwrap();

        assert!(policy.denies(&pinned));
        // Same path, different content: the exemption no longer applies.
        assert!(!policy.denies(&Addition::new("fixture.txt", b"hello, world".to_vec())));
    }
}
