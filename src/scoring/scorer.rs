// Wed Jan 21 2026 - Alex

use crate::analysis::round_to;
use crate::analysis::FeatureVector;
use crate::language::{Language, StopwordSet};
use crate::scoring::weights::ScoringWeights;
use serde::{Deserialize, Serialize};

/// Per-feature sub-scores, each in `[0, 1]` before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SubScores {
    pub stopwords: f64,
    pub chi_squared: f64,
    pub index_of_coincidence: f64,
    pub word_length: f64,
    pub alpha_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub features: FeatureVector,
    pub score: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CompositeScorer {
    weights: ScoringWeights,
}

impl CompositeScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn sub_scores(&self, f: &FeatureVector) -> SubScores {
        let w = &self.weights;
        SubScores {
            stopwords: unit(f.stopword_pct / w.stopword_target_pct),
            chi_squared: unit(1.0 - f.chi_squared / w.chi_squared_ceiling),
            index_of_coincidence: unit(f.index_of_coincidence / w.ic_reference),
            word_length: unit(
                1.0 - (w.ideal_word_length - f.avg_word_length).abs() / w.ideal_word_length,
            ),
            alpha_ratio: unit(f.alpha_ratio / 100.0),
        }
    }

    /// Weighted sum of the sub-scores, rounded to 2 decimals.
    pub fn score(&self, features: &FeatureVector) -> f64 {
        let s = self.sub_scores(features);
        let w = &self.weights;

        let total = w.stopwords * s.stopwords
            + w.chi_squared * s.chi_squared
            + w.index_of_coincidence * s.index_of_coincidence
            + w.word_length * s.word_length
            + w.alpha_ratio * s.alpha_ratio;

        round_to(total, 2)
    }

    pub fn evaluate(&self, plaintext: &str, language: Language, stopwords: &StopwordSet) -> Evaluation {
        let features = FeatureVector::extract(plaintext, language, stopwords);
        let score = self.score(&features);
        log::trace!("[{}] score {:.2} {:?}", language, score, features);
        Evaluation { features, score }
    }
}

/// Clamps into `[0, 1]`. NaN maps to 0.
fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Scores raw feature values with the default policy.
///
/// `n_stop` is carried for reporting only; the percentage drives the score.
pub fn score(n_stop: usize, pct_stop: f64, chi2: f64, ic: f64, avg_len: f64, alpha_r: f64) -> f64 {
    let features = FeatureVector {
        stopword_count: n_stop,
        stopword_pct: pct_stop,
        chi_squared: chi2,
        index_of_coincidence: ic,
        avg_word_length: avg_len,
        alpha_ratio: alpha_r,
        ..FeatureVector::default()
    };
    CompositeScorer::new().score(&features)
}

pub fn evaluate(plaintext: &str, language: Language, stopwords: &StopwordSet) -> Evaluation {
    CompositeScorer::new().evaluate(plaintext, language, stopwords)
}
