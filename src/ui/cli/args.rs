// Wed Jan 21 2026 - Alex

use crate::language::Language;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "caesar-cracker")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Automatic Caesar cipher cryptanalysis for French and English", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print machine-readable JSON on stdout instead of the text report
    #[arg(long, global = true)]
    pub json_output: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Try every key and rank the candidates
    Crack(CrackArgs),
    Encode(ShiftArgs),
    Decode(ShiftArgs),
    /// Guess the language of a plaintext
    Detect(TextSource),
    /// Recover a periodic key, one Caesar shift per segment
    VigenereKey(VigenereArgs),
}

#[derive(clap::Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct TextSource {
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub text: Option<String>,
}

impl TextSource {
    pub fn read(&self) -> anyhow::Result<String> {
        match (&self.input, &self.text) {
            (Some(path), _) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display())),
            (None, Some(text)) => Ok(text.clone()),
            (None, None) => Err(anyhow::anyhow!("Either --input or --text is required")),
        }
    }
}

#[derive(Parser, Debug)]
pub struct CrackArgs {
    #[command(flatten)]
    pub source: TextSource,

    #[arg(short, long)]
    pub top: Option<usize>,

    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub stopwords_fr: Option<PathBuf>,

    #[arg(long)]
    pub stopwords_en: Option<PathBuf>,

    /// Use the stopword lists compiled into the binary
    #[arg(long, conflicts_with_all = ["stopwords_fr", "stopwords_en"])]
    pub builtin_stopwords: bool,

    /// Restrict the attack to these languages (fr, en)
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<Language>,

    /// Also write the JSON report to this file
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Also write the plain text report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    #[arg(long)]
    pub no_parallel: bool,

    #[arg(long)]
    pub threads: Option<usize>,

    /// Skip the full listing of every candidate
    #[arg(long)]
    pub summary: bool,
}

impl CrackArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.top == Some(0) {
            return Err("--top must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct ShiftArgs {
    #[command(flatten)]
    pub source: TextSource,

    #[arg(short, long, allow_hyphen_values = true)]
    pub key: i64,
}

#[derive(Parser, Debug)]
pub struct VigenereArgs {
    #[command(flatten)]
    pub source: TextSource,

    #[arg(short, long)]
    pub key_length: usize,

    #[arg(long, default_value = "en")]
    pub language: Language,
}

impl VigenereArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.key_length == 0 {
            return Err("--key-length must be greater than 0".to_string());
        }
        Ok(())
    }
}
