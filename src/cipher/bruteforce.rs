// Mon Jan 19 2026 - Alex

use crate::cipher::shift::decode;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Every non-trivial shift of the 26-letter alphabet.
pub const KEY_SPACE: RangeInclusive<u8> = 1..=25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub shift: u8,
    pub plaintext: String,
}

impl Candidate {
    pub fn new(shift: u8, plaintext: String) -> Self {
        Self { shift, plaintext }
    }
}

/// Decodes `ciphertext` under every key in [`KEY_SPACE`], in ascending order.
pub fn bruteforce(ciphertext: &str) -> Vec<Candidate> {
    KEY_SPACE
        .map(|shift| Candidate::new(shift, decode(ciphertext, shift as i64)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::shift::encode;

    #[test]
    fn test_bruteforce_count() {
        let candidates = bruteforce("KHOOR");
        assert_eq!(candidates.len(), 25);
        let shifts: Vec<u8> = candidates.iter().map(|c| c.shift).collect();
        assert_eq!(shifts, (1..=25).collect::<Vec<u8>>());
    }

    #[test]
    fn test_bruteforce_contains_solution() {
        let cipher = encode("HELLO", 7);
        let candidates = bruteforce(&cipher);
        assert!(candidates.iter().any(|c| c.plaintext == "HELLO"));
    }

    #[test]
    fn test_bruteforce_finds_key() {
        let plain = "This is a test";
        let cipher = encode(plain, 5);
        let found = bruteforce(&cipher)
            .into_iter()
            .find(|c| c.plaintext == plain)
            .map(|c| c.shift);
        assert_eq!(found, Some(5));
    }

    #[test]
    fn test_bruteforce_empty() {
        let candidates = bruteforce("");
        assert_eq!(candidates.len(), 25);
        assert!(candidates.iter().all(|c| c.plaintext.is_empty()));
    }
}
