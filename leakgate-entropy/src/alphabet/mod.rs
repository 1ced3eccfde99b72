// leakgate-entropy/src/alphabet/mod.rs
use alloc::vec::Vec;

/// The symbols accepted by the standard base64 encoding, including the
/// `=` padding character. This is the default detection alphabet.
pub const BASE64_SYMBOLS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

/// A fixed set of symbols a candidate run may be composed of.
///
/// Keeps two views of the same set: a byte-indexed membership table for
/// O(1) lookups while scanning, and the ordered symbol list that serves
/// as the closed universe for entropy estimation. Built once at detector
/// construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Alphabet {
    members: [bool; 256],
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Builds an alphabet from the bytes of `symbols`.
    ///
    /// The membership table is byte-indexed, so callers are expected to
    /// pass ASCII symbols; multi-byte characters would be registered as
    /// their individual UTF-8 bytes.
    pub fn new(symbols: &str) -> Self {
        let mut members = [false; 256];
        for &b in symbols.as_bytes() {
            members[b as usize] = true;
        }
        Self {
            members,
            symbols: symbols.as_bytes().to_vec(),
        }
    }

    /// The default alphabet: the 65 standard base64 symbols.
    pub fn base64() -> Self {
        Self::new(BASE64_SYMBOLS)
    }

    /// Whether `byte` belongs to the alphabet.
    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.members[byte as usize]
    }

    /// The ordered symbol list as supplied at construction, used as the
    /// entropy universe. Duplicates are kept verbatim.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Number of symbols supplied at construction.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
