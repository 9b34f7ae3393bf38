// Wed Jan 21 2026 - Alex

use crate::analysis::FeatureVector;
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub shift: u8,
    pub language: Language,
    pub plaintext: String,
    pub features: FeatureVector,
    pub score: f64,
}

/// Sorts by score, highest first. The sort is stable, so equal scores keep
/// their enumeration order (lower shift, then earlier language).
pub fn rank(mut results: Vec<ScoredResult>) -> Vec<ScoredResult> {
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    results
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    VeryHigh,
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Classifies the lead of the best candidate over the runner-up.
    pub fn from_gap(gap: f64) -> Self {
        if gap > 10.0 {
            Confidence::VeryHigh
        } else if gap > 5.0 {
            Confidence::High
        } else if gap > 2.0 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::VeryHigh => "very high",
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low, recommend manual verification",
        }
    }

    pub fn needs_review(&self) -> bool {
        matches!(self, Confidence::Low)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub best: ScoredResult,
    pub gap: f64,
    pub confidence: Confidence,
}

/// Accepts rank 0. Without a runner-up the lead is measured against zero.
pub fn best(ranked: &[ScoredResult]) -> Option<Decision> {
    let first = ranked.first()?;
    let runner_up = ranked.get(1).map(|r| r.score).unwrap_or(0.0);
    let gap = first.score - runner_up;

    Some(Decision {
        best: first.clone(),
        gap,
        confidence: Confidence::from_gap(gap),
    })
}
