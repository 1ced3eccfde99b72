// leakgate-entropy/src/entropy/mod.rs
use libm::log2;

/// Calculates the Shannon entropy of `data` under a closed symbol universe.
///
/// Every symbol of `universe` is visited, not just the symbols present in
/// `data`; symbols that do not occur contribute nothing, while occurrences
/// of bytes outside the universe only enlarge the denominator. This keeps
/// the result comparable against one fixed threshold regardless of which
/// subset of the universe a candidate happens to use.
///
/// Returns the entropy in bits per symbol; an empty `data` yields `0.0`.
pub fn shannon_entropy(data: &[u8], universe: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut frequencies = [0usize; 256];
    for &byte in data {
        frequencies[byte as usize] += 1;
    }

    let len = data.len() as f64;
    let mut entropy = 0.0;

    for &symbol in universe {
        let count = frequencies[symbol as usize];
        if count > 0 {
            let p = count as f64 / len;
            entropy -= p * log2(p);
        }
    }

    entropy
}

/// Calculates the Shannon entropy of a byte slice over the raw bytes it
/// actually contains (an open universe of all 256 values).
///
/// Returns the entropy in bits per symbol.
pub fn byte_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut frequencies = [0usize; 256];
    for &byte in data {
        frequencies[byte as usize] += 1;
    }

    let len = data.len() as f64;
    let mut entropy = 0.0;

    for &count in frequencies.iter() {
        if count > 0 {
            let p = count as f64 / len;
            entropy -= p * log2(p);
        }
    }

    entropy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::BASE64_SYMBOLS;

    #[test]
    fn test_shannon_entropy_empty() {
        assert_eq!(shannon_entropy(b"", BASE64_SYMBOLS.as_bytes()), 0.0);
    }

    #[test]
    fn test_shannon_entropy_zero_randomness() {
        let repeated = [b'A'; 21];
        assert_eq!(shannon_entropy(&repeated, BASE64_SYMBOLS.as_bytes()), 0.0);
    }

    #[test]
    fn test_shannon_entropy_uniform_spread() {
        let entropy = shannon_entropy(b"abcdefgh", BASE64_SYMBOLS.as_bytes());
        assert!((entropy - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_shannon_entropy_ignores_bytes_outside_universe() {
        // '!' is not a universe symbol, so only the two 'A's carry weight
        // while the length still counts all four bytes.
        let entropy = shannon_entropy(b"AA!!", BASE64_SYMBOLS.as_bytes());
        assert!((entropy - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_shannon_entropy_aws_example_secret() {
        // The canonical 40-character example secret key from the AWS docs;
        // diverse enough to clear the 4.5-bit detection threshold.
        let entropy = shannon_entropy(
            b"wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
            BASE64_SYMBOLS.as_bytes(),
        );
        assert!(entropy > 4.5, "expected > 4.5 bits, got {entropy}");
        assert!(entropy < 4.7, "expected < 4.7 bits, got {entropy}");
    }

    #[test]
    fn test_byte_entropy_empty() {
        assert_eq!(byte_entropy(b""), 0.0);
    }

    #[test]
    fn test_byte_entropy_zero_randomness() {
        assert_eq!(byte_entropy(b"aaaaa"), 0.0);
    }

    #[test]
    fn test_byte_entropy_uniform_spread() {
        let entropy = byte_entropy(b"abcdefgh");
        assert!((entropy - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_byte_entropy_counts_every_byte() {
        // Unlike the closed-universe estimator, punctuation contributes here.
        let entropy = byte_entropy(b"AA!!");
        assert!((entropy - 1.0).abs() < 1e-10);
    }
}
