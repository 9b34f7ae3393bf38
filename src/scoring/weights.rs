// Wed Jan 21 2026 - Alex

use serde::{Deserialize, Serialize};

/// Fixed scoring policy. The integer weights add up to 100, so a perfect
/// candidate scores 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub stopwords: f64,
    pub chi_squared: f64,
    pub index_of_coincidence: f64,
    pub word_length: f64,
    pub alpha_ratio: f64,
    /// Stopword percentage treated as a perfect match.
    pub stopword_target_pct: f64,
    /// Chi-squared at or above which the frequency sub-score bottoms out.
    pub chi_squared_ceiling: f64,
    pub ic_reference: f64,
    pub ideal_word_length: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            stopwords: 40.0,
            chi_squared: 30.0,
            index_of_coincidence: 15.0,
            word_length: 10.0,
            alpha_ratio: 5.0,
            stopword_target_pct: 50.0,
            chi_squared_ceiling: 200.0,
            ic_reference: 0.070,
            ideal_word_length: 5.0,
        }
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.stopwords + self.chi_squared + self.index_of_coincidence + self.word_length + self.alpha_ratio
    }

    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("stopwords", self.stopwords),
            ("chi_squared", self.chi_squared),
            ("index_of_coincidence", self.index_of_coincidence),
            ("word_length", self.word_length),
            ("alpha_ratio", self.alpha_ratio),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(format!("weight {} must be a non-negative number", name));
            }
        }
        if (self.total() - 100.0).abs() > 1e-9 {
            return Err(format!("weights must sum to 100, got {}", self.total()));
        }

        let scales = [
            ("stopword_target_pct", self.stopword_target_pct),
            ("chi_squared_ceiling", self.chi_squared_ceiling),
            ("ic_reference", self.ic_reference),
            ("ideal_word_length", self.ideal_word_length),
        ];
        for (name, scale) in scales {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(format!("{} must be greater than 0", name));
            }
        }
        Ok(())
    }
}
