// Tue Jan 15 2026 - Alex

pub mod analysis;
pub mod cipher;
pub mod config;
pub mod engine;
pub mod language;
pub mod output;
pub mod scoring;
pub mod ui;

pub use cipher::{bruteforce, decode, encode, Candidate};
pub use config::Config;
pub use engine::{CrackEngine, CrackReport, EngineError};
pub use language::{Language, StopwordSet};
pub use scoring::{CompositeScorer, Confidence, Decision, ScoredResult};
