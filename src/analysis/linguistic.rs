// Tue Jan 20 2026 - Alex

use crate::analysis::round_to;
use crate::analysis::tokenizer::tokenize;
use crate::language::{Language, StopwordSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StopwordStats {
    pub stop_count: usize,
    pub total_count: usize,
    pub pct: f64,
}

pub fn stopword_stats<S: AsRef<str>>(tokens: &[S], stopwords: &StopwordSet) -> StopwordStats {
    let total_count = tokens.len();
    let stop_count = tokens
        .iter()
        .filter(|t| stopwords.contains(t.as_ref()))
        .count();

    let pct = if total_count > 0 {
        round_to(stop_count as f64 / total_count as f64 * 100.0, 2)
    } else {
        0.0
    };

    StopwordStats {
        stop_count,
        total_count,
        pct,
    }
}

pub fn text_stopword_stats(text: &str, stopwords: &StopwordSet) -> StopwordStats {
    stopword_stats(&tokenize(text), stopwords)
}

pub fn avg_word_length(text: &str) -> f64 {
    mean_token_length(&tokenize(text))
}

pub(crate) fn mean_token_length<S: AsRef<str>>(tokens: &[S]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let letters: usize = tokens.iter().map(|t| t.as_ref().len()).sum();
    round_to(letters as f64 / tokens.len() as f64, 2)
}

/// Share of alphabetic characters over the whole text, in percent.
pub fn alpha_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    round_to(letters as f64 / total as f64 * 100.0, 2)
}

/// Picks French only when it has strictly more stopword hits than English.
pub fn guess_language_by_stopwords(
    text: &str,
    french: &StopwordSet,
    english: &StopwordSet,
) -> (Language, usize) {
    let tokens = tokenize(text);
    let fr = stopword_stats(&tokens, french).stop_count;
    let en = stopword_stats(&tokens, english).stop_count;

    if fr > en {
        (Language::Fr, fr)
    } else {
        (Language::En, en)
    }
}
