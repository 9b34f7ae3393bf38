// Wed Jan 21 2026 - Alex

use crate::engine::CrackReport;
use crate::output::OutputError;
use serde_json::{json, to_string, to_string_pretty, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct JsonSerializer {
    pretty_print: bool,
    include_metadata: bool,
    limit: Option<usize>,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self {
            pretty_print: true,
            include_metadata: true,
            limit: None,
        }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Keeps only the best `limit` ranked results.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn serialize(&self, report: &CrackReport) -> Result<String, OutputError> {
        let value = self.build_json_value(report)?;

        let text = if self.pretty_print {
            to_string_pretty(&value)?
        } else {
            to_string(&value)?
        };
        Ok(text)
    }

    pub fn serialize_to_file<P: AsRef<Path>>(&self, report: &CrackReport, path: P) -> Result<(), OutputError> {
        let json_str = self.serialize(report)?;
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json_str.as_bytes())?;
        writer.flush()?;
        log::debug!("Wrote JSON report to {}", path.as_ref().display());
        Ok(())
    }

    fn build_json_value(&self, report: &CrackReport) -> Result<Value, OutputError> {
        let mut root = serde_json::Map::new();

        if self.include_metadata {
            root.insert("version".to_string(), json!(env!("CARGO_PKG_VERSION")));
            root.insert("ciphertext_chars".to_string(), json!(report.ciphertext_chars));
            root.insert("languages".to_string(), serde_json::to_value(&report.languages)?);
            root.insert("candidates_analyzed".to_string(), json!(report.candidates_analyzed()));
        }

        let ranked = match self.limit {
            Some(n) => report.top(n),
            None => &report.ranked[..],
        };
        root.insert("ranked".to_string(), serde_json::to_value(ranked)?);
        root.insert("decision".to_string(), serde_json::to_value(&report.decision)?);

        Ok(Value::Object(root))
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn to_json_string(report: &CrackReport) -> Result<String, OutputError> {
    JsonSerializer::new().serialize(report)
}

pub fn to_json_file<P: AsRef<Path>>(report: &CrackReport, path: P) -> Result<(), OutputError> {
    JsonSerializer::new().serialize_to_file(report, path)
}
