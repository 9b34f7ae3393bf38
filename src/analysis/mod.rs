// Tue Jan 20 2026 - Alex

pub mod tokenizer;
pub mod linguistic;
pub mod frequency;
pub mod features;

pub use tokenizer::tokenize;
pub use linguistic::{
    alpha_ratio, avg_word_length, guess_language_by_stopwords, stopword_stats,
    text_stopword_stats, StopwordStats,
};
pub use frequency::{
    best_segment_shift, chi_squared, chi_squared_against, guess_language, index_of_coincidence,
    key_letter, letter_frequency, recover_key, LetterFrequency,
};
pub use features::FeatureVector;

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(33.33333, 2), 33.33);
        assert_eq!(round_to(0.088888, 4), 0.0889);
        assert_eq!(round_to(-1.006, 2), -1.01);
        assert_eq!(round_to(0.0, 2), 0.0);
        assert_eq!(round_to(5.125, 2), 5.12);
        assert_eq!(round_to(5.375, 2), 5.38);
        assert_eq!(round_to(62.5, 0), 62.0);
    }
}
