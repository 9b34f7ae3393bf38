// Wed Jan 21 2026 - Alex

use crate::cipher::{bruteforce, Candidate};
use crate::config::Config;
use crate::engine::result::{CrackReport, LanguageSummary};
use crate::language::{Language, StopwordError, StopwordSet};
use crate::scoring::{best, rank, CompositeScorer, ScoredResult};
use itertools::iproduct;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Stopwords(#[from] StopwordError),
    #[error("No languages configured")]
    NoLanguages,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Runs the whole attack: enumerate every key, score each candidate against
/// every configured language, rank, decide.
pub struct CrackEngine {
    config: Config,
    scorer: CompositeScorer,
    stopwords: Vec<(Language, StopwordSet)>,
    pool: Option<rayon::ThreadPool>,
}

impl CrackEngine {
    /// Loads stopword lists as configured (file path or built-in list).
    pub fn new(config: Config) -> Result<Self, EngineError> {
        let mut stopwords = Vec::with_capacity(config.languages.len());

        for &language in &config.languages {
            let set = match config.stopwords_path(language) {
                Some(path) => StopwordSet::load(path)?,
                None => StopwordSet::builtin(language),
            };
            log::debug!("{} stopwords ready for {}", set.len(), language.name());
            stopwords.push((language, set));
        }

        Self::with_stopwords(config, stopwords)
    }

    /// Uses caller-supplied stopword sets, in evaluation order.
    pub fn with_stopwords(
        config: Config,
        stopwords: Vec<(Language, StopwordSet)>,
    ) -> Result<Self, EngineError> {
        if stopwords.is_empty() {
            return Err(EngineError::NoLanguages);
        }
        config
            .validate()
            .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;

        let pool = if config.parallel && config.threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .build()
                .map_err(|e| EngineError::ThreadPool(e.to_string()))?;
            Some(pool)
        } else {
            None
        };

        Ok(Self {
            scorer: CompositeScorer::with_weights(config.weights.clone()),
            config,
            stopwords,
            pool,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.stopwords.iter().map(|(language, _)| *language)
    }

    pub fn stopwords(&self, language: Language) -> Option<&StopwordSet> {
        self.stopwords
            .iter()
            .find(|(l, _)| *l == language)
            .map(|(_, set)| set)
    }

    /// Scores one plaintext as one language.
    pub fn evaluate(&self, candidate: &Candidate, language: Language, stopwords: &StopwordSet) -> ScoredResult {
        let evaluation = self.scorer.evaluate(&candidate.plaintext, language, stopwords);
        ScoredResult {
            shift: candidate.shift,
            language,
            plaintext: candidate.plaintext.clone(),
            features: evaluation.features,
            score: evaluation.score,
        }
    }

    /// Results come back in enumeration order (shift-major, then language),
    /// whether evaluated sequentially or in parallel.
    pub fn evaluate_all(&self, candidates: &[Candidate]) -> Vec<ScoredResult> {
        let jobs: Vec<(&Candidate, &(Language, StopwordSet))> =
            iproduct!(candidates.iter(), self.stopwords.iter()).collect();

        if !self.config.parallel {
            return jobs
                .into_iter()
                .map(|(c, (language, set))| self.evaluate(c, *language, set))
                .collect();
        }

        let run = || -> Vec<ScoredResult> {
            jobs.par_iter()
                .map(|(c, (language, set))| self.evaluate(c, *language, set))
                .collect()
        };

        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    pub fn run(&self, ciphertext: &str) -> CrackReport {
        let candidates = bruteforce(ciphertext);
        log::debug!("Enumerated {} candidate keys", candidates.len());

        let results = self.evaluate_all(&candidates);
        log::debug!(
            "Scored {} candidates ({})",
            results.len(),
            if self.config.parallel { "parallel" } else { "sequential" }
        );

        let ranked = rank(results);
        let decision = best(&ranked);

        if let Some(d) = &decision {
            log::info!(
                "Best candidate: shift {} [{}] score {:.2}, confidence {}",
                d.best.shift,
                d.best.language,
                d.best.score,
                d.confidence
            );
        }

        CrackReport {
            ciphertext_chars: ciphertext.chars().count(),
            languages: self
                .stopwords
                .iter()
                .map(|(language, set)| LanguageSummary {
                    language: *language,
                    stopwords: set.len(),
                })
                .collect(),
            ranked,
            decision,
        }
    }
}
