// leakgate-entropy/src/candidates/mod.rs
use crate::alphabet::Alphabet;

/// Lazy iterator over the encoded-looking fragments of a single word.
///
/// A candidate is a maximal run of consecutive alphabet symbols that is
/// strictly longer than the configured minimum. Runs are never merged
/// across separator bytes, and a word shorter than the minimum is
/// rejected outright without scanning.
///
/// The yielded slices borrow from the word, not from the alphabet, so a
/// caller may return them past the lifetime of the detector that owns
/// the alphabet.
pub struct Candidates<'w, 'a> {
    word: &'w str,
    alphabet: &'a Alphabet,
    min_length: usize,
    pos: usize,
}

impl<'w, 'a> Candidates<'w, 'a> {
    /// Creates an iterator over the qualifying runs of `word`.
    pub fn new(word: &'w str, alphabet: &'a Alphabet, min_length: usize) -> Self {
        // A word shorter than the minimum cannot contain a qualifying run.
        let pos = if word.len() < min_length { word.len() } else { 0 };
        Candidates {
            word,
            alphabet,
            min_length,
            pos,
        }
    }
}

impl<'w, 'a> Iterator for Candidates<'w, 'a> {
    type Item = &'w str;

    fn next(&mut self) -> Option<&'w str> {
        let bytes = self.word.as_bytes();
        while self.pos < bytes.len() {
            while self.pos < bytes.len() && !self.alphabet.contains(bytes[self.pos]) {
                self.pos += 1;
            }
            let start = self.pos;
            while self.pos < bytes.len() && self.alphabet.contains(bytes[self.pos]) {
                self.pos += 1;
            }
            if self.pos == start {
                return None;
            }
            if self.pos - start > self.min_length {
                // Alphabet symbols are ASCII, so both run boundaries fall
                // on character boundaries of the surrounding UTF-8.
                return Some(&self.word[start..self.pos]);
            }
        }
        None
    }
}
