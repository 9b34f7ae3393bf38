// Mon Jan 19 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    En,
}

impl Language {
    /// Evaluation order. Earlier languages win score ties.
    pub const ALL: [Language; 2] = [Language::Fr, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Fr => "French",
            Language::En => "English",
        }
    }

    pub fn profile(&self) -> &'static LanguageProfile {
        match self {
            Language::Fr => &FRENCH,
            Language::En => &ENGLISH,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fr" | "french" => Ok(Language::Fr),
            "en" | "english" => Ok(Language::En),
            other => Err(format!("Unsupported language: {} (expected fr or en)", other)),
        }
    }
}

/// Expected letter frequencies in percent, indexed `a`..`z`.
#[derive(Debug)]
pub struct LanguageProfile {
    pub language: Language,
    pub frequencies: [f64; 26],
}

impl LanguageProfile {
    pub fn expected(&self, letter: char) -> Option<f64> {
        if letter.is_ascii_lowercase() {
            Some(self.frequencies[(letter as u8 - b'a') as usize])
        } else {
            None
        }
    }

    pub fn letters(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.frequencies
            .iter()
            .enumerate()
            .map(|(i, &pct)| ((b'a' + i as u8) as char, pct))
    }
}

pub static FRENCH: LanguageProfile = LanguageProfile {
    language: Language::Fr,
    frequencies: [
        7.64, 0.90, 3.26, 3.67, 14.71, 1.06, 0.87, 0.74, 7.53, 0.61, 0.05, 5.46, 2.97,
        7.10, 5.38, 3.02, 1.36, 6.55, 7.95, 7.24, 6.31, 1.84, 0.07, 0.43, 0.13, 0.33,
    ],
};

pub static ENGLISH: LanguageProfile = LanguageProfile {
    language: Language::En,
    frequencies: [
        8.17, 1.49, 2.78, 4.25, 12.70, 2.23, 2.02, 6.09, 6.97, 0.15, 0.77, 4.03, 2.41,
        6.75, 7.51, 1.93, 0.10, 5.99, 6.33, 9.06, 2.76, 0.98, 2.36, 0.15, 1.97, 0.07,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_sum_to_hundred() {
        for language in Language::ALL {
            let total: f64 = language.profile().frequencies.iter().sum();
            assert!((total - 100.0).abs() < 0.5, "{} sums to {}", language, total);
        }
    }

    #[test]
    fn test_expected_lookup() {
        assert_eq!(FRENCH.expected('e'), Some(14.71));
        assert_eq!(ENGLISH.expected('t'), Some(9.06));
        assert_eq!(ENGLISH.expected('E'), None);
        assert_eq!(ENGLISH.letters().count(), 26);
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("fr".parse::<Language>(), Ok(Language::Fr));
        assert_eq!("English".parse::<Language>(), Ok(Language::En));
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::Fr.to_string(), "fr");
    }
}
