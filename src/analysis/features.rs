// Tue Jan 20 2026 - Alex

use crate::analysis::frequency::{chi_squared, index_of_coincidence};
use crate::analysis::linguistic::{alpha_ratio, mean_token_length, stopword_stats};
use crate::analysis::tokenizer::tokenize;
use crate::language::{Language, StopwordSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    pub stopword_count: usize,
    pub token_count: usize,
    pub stopword_pct: f64,
    pub chi_squared: f64,
    pub index_of_coincidence: f64,
    pub avg_word_length: f64,
    pub alpha_ratio: f64,
}

impl FeatureVector {
    /// Measures `plaintext` as if it were written in `language`.
    pub fn extract(plaintext: &str, language: Language, stopwords: &StopwordSet) -> Self {
        let tokens = tokenize(plaintext);
        let stats = stopword_stats(&tokens, stopwords);

        Self {
            stopword_count: stats.stop_count,
            token_count: stats.total_count,
            stopword_pct: stats.pct,
            chi_squared: chi_squared(plaintext, language),
            index_of_coincidence: index_of_coincidence(plaintext),
            avg_word_length: mean_token_length(&tokens),
            alpha_ratio: alpha_ratio(plaintext),
        }
    }
}
