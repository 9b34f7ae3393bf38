// Mon Jan 19 2026 - Alex

pub mod profile;
pub mod stopwords;

pub use profile::{Language, LanguageProfile, ENGLISH, FRENCH};
pub use stopwords::{StopwordError, StopwordSet};
