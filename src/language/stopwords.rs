// Mon Jan 19 2026 - Alex

use crate::language::Language;
use ahash::AHashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUILTIN_FR: &str = include_str!("../../data/stopwords_fr.txt");
const BUILTIN_EN: &str = include_str!("../../data/stopwords_en.txt");

#[derive(Error, Debug)]
pub enum StopwordError {
    #[error("Failed to read stopword list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Stopword list is empty: {0}")]
    Empty(PathBuf),
}

/// Lower-cased function words for one language. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: AHashSet<String>,
}

impl StopwordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One word per line. Surrounding whitespace is stripped and blank lines skipped.
    pub fn parse(contents: &str) -> Self {
        contents.lines().collect()
    }

    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut set = Self::new();
        for line in reader.lines() {
            set.insert(&line?);
        }
        Ok(set)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StopwordError> {
        let path = path.as_ref();
        let io_err = |source| StopwordError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let set = Self::from_reader(BufReader::new(file)).map_err(io_err)?;

        if set.is_empty() {
            return Err(StopwordError::Empty(path.to_path_buf()));
        }

        log::debug!("Loaded {} stopwords from {}", set.len(), path.display());
        Ok(set)
    }

    pub fn builtin(language: Language) -> Self {
        match language {
            Language::Fr => Self::parse(BUILTIN_FR),
            Language::En => Self::parse(BUILTIN_EN),
        }
    }

    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for word in iter {
            set.insert(word);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_normalizes() {
        let set = StopwordSet::parse("The\n  and \n\nIS\r\n");
        assert_eq!(set.len(), 3);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(set.contains("is"));
        assert!(!set.contains("The"));
    }

    #[test]
    fn test_builtin_lists() {
        let en = StopwordSet::builtin(Language::En);
        let fr = StopwordSet::builtin(Language::Fr);
        assert!(en.contains("the"));
        assert!(en.contains("and"));
        assert!(fr.contains("le"));
        assert!(fr.contains("est"));
        assert!(!en.is_empty() && !fr.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "le").unwrap();
        writeln!(file, "La").unwrap();
        writeln!(file, "les").unwrap();

        let set = StopwordSet::load(file.path()).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains("la"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = StopwordSet::load("/nonexistent/stopwords.txt").unwrap_err();
        assert!(matches!(err, StopwordError::Io { .. }));
    }

    #[test]
    fn test_load_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = StopwordSet::load(file.path()).unwrap_err();
        assert!(matches!(err, StopwordError::Empty(_)));
    }
}
