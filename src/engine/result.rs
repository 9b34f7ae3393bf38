// Wed Jan 21 2026 - Alex

use crate::language::Language;
use crate::scoring::{Decision, ScoredResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSummary {
    pub language: Language,
    pub stopwords: usize,
}

/// Outcome of one cracking run: every (shift, language) result, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrackReport {
    pub ciphertext_chars: usize,
    pub languages: Vec<LanguageSummary>,
    pub ranked: Vec<ScoredResult>,
    pub decision: Option<Decision>,
}

impl CrackReport {
    pub fn candidates_analyzed(&self) -> usize {
        self.ranked.len()
    }

    pub fn top(&self, n: usize) -> &[ScoredResult] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    pub fn best(&self) -> Option<&ScoredResult> {
        self.decision.as_ref().map(|d| &d.best)
    }

    pub fn plaintext(&self) -> Option<&str> {
        self.best().map(|b| b.plaintext.as_str())
    }

    pub fn find(&self, shift: u8, language: Language) -> Option<(usize, &ScoredResult)> {
        self.ranked
            .iter()
            .enumerate()
            .find(|(_, r)| r.shift == shift && r.language == language)
    }
}
