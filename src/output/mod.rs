// Wed Jan 21 2026 - Alex

pub mod json;
pub mod report;

pub use json::{to_json_file, to_json_string, JsonSerializer};
pub use report::{preview, ReportGenerator};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
