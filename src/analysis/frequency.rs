// Tue Jan 20 2026 - Alex

use crate::analysis::round_to;
use crate::cipher::shift::decode;
use crate::language::{Language, LanguageProfile};
use ahash::AHashMap;
use serde::{Serialize, Serializer};
use serde::ser::SerializeMap;

/// Observed share of each letter `a`..`z`, in percent of all alphabetic characters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterFrequency {
    percentages: [f64; 26],
}

impl LetterFrequency {
    pub fn get(&self, letter: char) -> f64 {
        let lower = letter.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            self.percentages[(lower as u8 - b'a') as usize]
        } else {
            0.0
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.percentages
            .iter()
            .enumerate()
            .map(|(i, &pct)| ((b'a' + i as u8) as char, pct))
    }

    pub fn is_empty(&self) -> bool {
        self.percentages.iter().all(|&p| p == 0.0)
    }

    /// The most frequent letter, earliest in the alphabet on ties.
    pub fn dominant(&self) -> Option<char> {
        if self.is_empty() {
            return None;
        }
        self.iter()
            .fold(None, |best: Option<(char, f64)>, (c, p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((c, p)),
            })
            .map(|(c, _)| c)
    }
}

impl Serialize for LetterFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(26))?;
        for (letter, pct) in self.iter() {
            map.serialize_entry(&letter, &pct)?;
        }
        map.end()
    }
}

struct LetterCounts {
    ascii: [usize; 26],
    all: AHashMap<char, usize>,
    total: usize,
}

fn count_letters(text: &str) -> LetterCounts {
    let mut counts = LetterCounts {
        ascii: [0; 26],
        all: AHashMap::new(),
        total: 0,
    };

    for c in text.chars().filter(|c| c.is_alphabetic()) {
        let lower = c.to_lowercase().next().unwrap_or(c);
        counts.total += 1;
        *counts.all.entry(lower).or_insert(0) += 1;
        if lower.is_ascii_lowercase() {
            counts.ascii[(lower as u8 - b'a') as usize] += 1;
        }
    }

    counts
}

pub fn letter_frequency(text: &str) -> LetterFrequency {
    let counts = count_letters(text);
    let mut percentages = [0.0; 26];

    if counts.total > 0 {
        for (pct, &n) in percentages.iter_mut().zip(counts.ascii.iter()) {
            *pct = round_to(n as f64 / counts.total as f64 * 100.0, 2);
        }
    }

    LetterFrequency { percentages }
}

/// Distance between the observed letter distribution and a reference profile. Lower is closer.
pub fn chi_squared_against(text: &str, profile: &LanguageProfile) -> f64 {
    let observed = letter_frequency(text);

    let chi2: f64 = profile
        .letters()
        .filter(|&(_, expected)| expected > 0.0)
        .map(|(letter, expected)| (observed.get(letter) - expected).powi(2) / expected)
        .sum();

    round_to(chi2, 2)
}

pub fn chi_squared(text: &str, language: Language) -> f64 {
    chi_squared_against(text, language.profile())
}

/// Probability that two letters drawn without replacement are identical.
pub fn index_of_coincidence(text: &str) -> f64 {
    let counts = count_letters(text);
    let n = counts.total;

    if n <= 1 {
        return 0.0;
    }

    let pairs: usize = counts.all.values().map(|&c| c * (c - 1)).sum();
    round_to(pairs as f64 / (n * (n - 1)) as f64, 4)
}

/// Language whose letter profile is closest. French only wins when strictly closer.
pub fn guess_language(text: &str) -> Language {
    let fr = chi_squared(text, Language::Fr);
    let en = chi_squared(text, Language::En);

    if fr < en {
        Language::Fr
    } else {
        Language::En
    }
}

/// Best single shift (0..=25) for one interleaved segment of a polyalphabetic
/// ciphertext, judged by chi-squared alone.
pub fn best_segment_shift(segment: &str, language: Language) -> u8 {
    let mut best_shift = 0u8;
    let mut best_chi2 = f64::INFINITY;

    for shift in 0..26u8 {
        let chi2 = chi_squared(&decode(segment, shift as i64), language);
        if chi2 < best_chi2 {
            best_chi2 = chi2;
            best_shift = shift;
        }
    }

    log::trace!("segment best shift {} (chi2 {:.2})", best_shift, best_chi2);
    best_shift
}

pub fn key_letter(shift: u8) -> char {
    (b'a' + shift % 26) as char
}

/// Recovers a periodic key of `key_len` letters by solving each interleaved
/// segment of the ciphertext letters independently.
pub fn recover_key(text: &str, key_len: usize, language: Language) -> String {
    if key_len == 0 {
        return String::new();
    }

    let letters: Vec<char> = text.chars().filter(|c| c.is_ascii_alphabetic()).collect();

    (0..key_len)
        .map(|offset| {
            let segment: String = letters.iter().skip(offset).step_by(key_len).collect();
            key_letter(best_segment_shift(&segment, language))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::shift::encode;

    const EN_SAMPLE: &str = "The cat is on the table and it sleeps in the house of the old woman";
    const FR_SAMPLE: &str = "Le chat est sur la table et il dort dans la maison de la grand-mere";

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_letter_frequency() {
        let freq = letter_frequency("Hello");
        assert!(approx(freq.get('l'), 40.0));
        assert!(approx(freq.get('e'), 20.0));
        assert!(approx(freq.get('H'), 20.0));
        assert!(approx(freq.get('z'), 0.0));
        assert_eq!(freq.iter().count(), 26);
        assert_eq!(freq.dominant(), Some('l'));
    }

    #[test]
    fn test_letter_frequency_excludes_non_letters() {
        let freq = letter_frequency("a1b2 !!");
        assert!(approx(freq.get('a'), 50.0));
        assert!(approx(freq.get('b'), 50.0));
    }

    #[test]
    fn test_letter_frequency_empty() {
        let freq = letter_frequency("123 ...");
        assert!(freq.is_empty());
        assert_eq!(freq.dominant(), None);
    }

    #[test]
    fn test_chi_squared_values() {
        assert!(approx(chi_squared("hello world", Language::En), 283.5));
        assert!(approx(chi_squared(EN_SAMPLE, Language::En), 19.86));
        assert!(approx(chi_squared(FR_SAMPLE, Language::Fr), 39.66));
    }

    #[test]
    fn test_chi_squared_empty_is_profile_mass() {
        assert!(approx(chi_squared("", Language::Fr), 97.18));
        assert!(approx(chi_squared("", Language::En), 100.02));
    }

    #[test]
    fn test_index_of_coincidence() {
        assert!(approx(index_of_coincidence("hello world"), 0.0889));
        assert!(approx(index_of_coincidence("aaaa"), 1.0));
        assert!(approx(index_of_coincidence("abcd"), 0.0));
        assert!(approx(index_of_coincidence(EN_SAMPLE), 0.0709));
    }

    #[test]
    fn test_index_of_coincidence_degenerate() {
        assert_eq!(index_of_coincidence(""), 0.0);
        assert_eq!(index_of_coincidence("a"), 0.0);
        assert_eq!(index_of_coincidence("!? 42"), 0.0);
    }

    #[test]
    fn test_ic_is_shift_invariant() {
        assert_eq!(index_of_coincidence(EN_SAMPLE), index_of_coincidence(&encode(EN_SAMPLE, 11)));
    }

    #[test]
    fn test_guess_language() {
        assert_eq!(guess_language(FR_SAMPLE), Language::Fr);
        assert_eq!(guess_language(EN_SAMPLE), Language::En);
    }

    #[test]
    fn test_best_segment_shift() {
        let cipher = encode(EN_SAMPLE, 3);
        assert_eq!(best_segment_shift(&cipher, Language::En), 3);
        assert_eq!(key_letter(3), 'd');
    }

    #[test]
    fn test_recover_key() {
        let cipher = "Sx ukw rri zowr yj rsqcc mr geq dlc gspcx mp xgwiq sx ukw rri yqi mp agchmw \
                      mr geq dlc kkc yj dysjswfxiqc mr geq dlc otmml mp fcvmcp mr geq dlc otmml mp \
                      mlmvcnyjsxw sx ukw rri qoeqyr mp pgqlr sx ukw rri qoeqyr mp hybolowq sx ukw \
                      rri qzvgxk mp lmzi gd ayc xfo agxxcb sd niqzegb";
        assert_eq!(recover_key(cipher, 3, Language::En), "key");
        assert_eq!(recover_key(cipher, 0, Language::En), "");
    }
}
