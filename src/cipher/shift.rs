// Mon Jan 19 2026 - Alex

pub const ALPHABET_SIZE: i64 = 26;

/// Shifts a single character by `key` positions within its own case.
/// Anything that is not an ASCII letter comes back untouched.
pub fn shift_char(c: char, key: i64) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };

    let index = (c as u8 - base) as i64;
    let shifted = (index + key.rem_euclid(ALPHABET_SIZE)) % ALPHABET_SIZE;
    (base + shifted as u8) as char
}

pub fn encode(text: &str, key: i64) -> String {
    text.chars().map(|c| shift_char(c, key)).collect()
}

pub fn decode(text: &str, key: i64) -> String {
    encode(text, -key.rem_euclid(ALPHABET_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_basic() {
        assert_eq!(encode("HELLO", 3), "KHOOR");
    }

    #[test]
    fn test_decode_basic() {
        assert_eq!(decode("KHOOR", 3), "HELLO");
    }

    #[test]
    fn test_roundtrip_every_key() {
        let text = "The quick brown fox jumps over the lazy dog!";
        for key in 1..=25 {
            assert_eq!(decode(&encode(text, key), key), text);
        }
    }

    #[test]
    fn test_preserves_case() {
        let cipher = encode("HeLLo WoRLd", 5);
        let pattern: Vec<bool> = cipher.chars().map(|c| c.is_uppercase()).collect();
        let expected: Vec<bool> = "HeLLo WoRLd".chars().map(|c| c.is_uppercase()).collect();
        assert_eq!(pattern, expected);
        assert_eq!(decode(&cipher, 5), "HeLLo WoRLd");
    }

    #[test]
    fn test_non_alpha_passthrough() {
        let plain = "Hello, World! 123 éà\n\t";
        let cipher = encode(plain, 7);
        for (p, c) in plain.chars().zip(cipher.chars()) {
            if !p.is_ascii_alphabetic() {
                assert_eq!(p, c);
            }
        }
        assert!(cipher.contains("123"));
        assert!(cipher.ends_with("éà\n\t"));
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode("", 5), "");
        assert_eq!(decode("", 5), "");
    }

    #[test]
    fn test_key_wraparound() {
        assert_eq!(encode("HELLO", 29), encode("HELLO", 3));
        assert_eq!(encode("HELLO", -23), encode("HELLO", 3));
        assert_eq!(encode("Zebra", 26), "Zebra");
    }

    #[test]
    fn test_extreme_keys() {
        // i64::MAX is 7 and i64::MIN is 18, mod 26
        assert_eq!(encode("b", i64::MAX), encode("b", 7));
        assert_eq!(decode("b", i64::MIN), decode("b", 18));
        assert_eq!(decode("Zz", i64::MAX), "Ss");
        assert_eq!(decode(&encode("Hello", i64::MIN), i64::MIN), "Hello");
    }

    #[test]
    fn test_zero_key() {
        assert_eq!(encode("HELLO WORLD", 0), "HELLO WORLD");
    }

    #[test]
    fn test_alphabet_edges() {
        assert_eq!(shift_char('z', 1), 'a');
        assert_eq!(shift_char('A', -1), 'Z');
        assert_eq!(shift_char('7', 4), '7');
    }
}
