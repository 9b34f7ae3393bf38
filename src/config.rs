// Wed Jan 21 2026 - Alex

use crate::language::Language;
use crate::scoring::ScoringWeights;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub top_n: usize,
    pub languages: Vec<Language>,
    /// `None` falls back to the built-in list.
    pub stopwords_fr: Option<PathBuf>,
    pub stopwords_en: Option<PathBuf>,
    pub parallel: bool,
    /// Worker threads for parallel evaluation. 0 lets rayon decide.
    pub threads: usize,
    pub preview_chars: usize,
    pub detail_preview_chars: usize,
    pub show_all: bool,
    pub weights: ScoringWeights,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: 5,
            languages: Language::ALL.to_vec(),
            stopwords_fr: Some(PathBuf::from("data/stopwords_fr.txt")),
            stopwords_en: Some(PathBuf::from("data/stopwords_en.txt")),
            parallel: true,
            threads: 0,
            preview_chars: 150,
            detail_preview_chars: 400,
            show_all: true,
            weights: ScoringWeights::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&contents)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_languages(mut self, languages: Vec<Language>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_stopwords(mut self, language: Language, path: Option<PathBuf>) -> Self {
        match language {
            Language::Fr => self.stopwords_fr = path,
            Language::En => self.stopwords_en = path,
        }
        self
    }

    /// Uses the compiled-in stopword lists for every language.
    pub fn with_builtin_stopwords(self) -> Self {
        self.with_stopwords(Language::Fr, None)
            .with_stopwords(Language::En, None)
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn stopwords_path(&self, language: Language) -> Option<&Path> {
        match language {
            Language::Fr => self.stopwords_fr.as_deref(),
            Language::En => self.stopwords_en.as_deref(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::Invalid("top_n must be greater than 0".to_string()));
        }
        if self.languages.is_empty() {
            return Err(ConfigError::Invalid("at least one language is required".to_string()));
        }
        for (i, language) in self.languages.iter().enumerate() {
            if self.languages[..i].contains(language) {
                return Err(ConfigError::Invalid(format!("language {} listed twice", language)));
            }
        }
        self.weights.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}
