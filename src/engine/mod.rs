// Wed Jan 21 2026 - Alex

pub mod core;
pub mod result;

pub use self::core::{CrackEngine, EngineError};
pub use result::{CrackReport, LanguageSummary};
