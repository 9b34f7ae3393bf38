// Wed Jan 21 2026 - Alex

use super::args::{Args, Command, CrackArgs, ShiftArgs, TextSource, VigenereArgs};
use crate::analysis::{guess_language, guess_language_by_stopwords, letter_frequency, recover_key};
use crate::cipher::{decode, encode};
use crate::config::Config;
use crate::engine::{CrackEngine, CrackReport};
use crate::language::{Language, StopwordSet};
use crate::output::{JsonSerializer, ReportGenerator};
use crate::ui::banner::Banner;
use anyhow::Context;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use std::time::Duration;

pub struct CommandHandler {
    quiet: bool,
    json_output: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            quiet: false,
            json_output: false,
        }
    }

    pub fn execute(&mut self, args: Args) -> anyhow::Result<()> {
        self.quiet = args.quiet;
        self.json_output = args.json_output;

        if args.no_color {
            colored::control::set_override(false);
        }

        self.setup_logging(&args)?;

        if !self.quiet && !self.json_output {
            Banner::default_banner().with_color(!args.no_color).print();
        }

        match args.command {
            Command::Crack(crack_args) => self.handle_crack(crack_args),
            Command::Encode(shift_args) => self.handle_shift(shift_args, true),
            Command::Decode(shift_args) => self.handle_shift(shift_args, false),
            Command::Detect(source) => self.handle_detect(source),
            Command::VigenereKey(vigenere_args) => self.handle_vigenere(vigenere_args),
        }
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        };

        if env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()
            .is_err()
        {
            log::debug!("Logger already initialised, keeping the existing one");
        }

        Ok(())
    }

    fn status(&self, message: &str) {
        if !self.quiet && !self.json_output {
            println!("{} {}", "[+]".green(), message);
        }
    }

    pub fn build_config(args: &CrackArgs) -> anyhow::Result<Config> {
        let mut config = match &args.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(top) = args.top {
            config.top_n = top;
        }
        if !args.languages.is_empty() {
            config.languages = args.languages.clone();
        }
        if args.builtin_stopwords {
            config = config.with_builtin_stopwords();
        }
        if let Some(path) = &args.stopwords_fr {
            config.stopwords_fr = Some(path.clone());
        }
        if let Some(path) = &args.stopwords_en {
            config.stopwords_en = Some(path.clone());
        }
        if args.no_parallel {
            config.parallel = false;
        }
        if let Some(threads) = args.threads {
            config.threads = threads;
        }
        if args.summary {
            config.show_all = false;
        }

        config.validate()?;
        Ok(config)
    }

    fn handle_crack(&self, args: CrackArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let config = Self::build_config(&args)?;
        let ciphertext = args.source.read()?;
        self.status(&format!("Ciphertext loaded ({} characters)", ciphertext.chars().count()));

        let engine = CrackEngine::new(config.clone()).context("Failed to prepare the attack")?;
        let sizes: Vec<String> = engine
            .languages()
            .filter_map(|l| engine.stopwords(l).map(|s| format!("{}: {}", l.code().to_uppercase(), s.len())))
            .collect();
        self.status(&format!("Stopwords loaded ({})", sizes.join(", ")));

        let spinner = self.spinner("Running brute force and scoring...");
        let report = engine.run(&ciphertext);
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
        self.status(&format!("{} keys tested (1-25)", report.candidates_analyzed() / config.languages.len()));

        if self.json_output {
            let text = JsonSerializer::new().serialize(&report)?;
            println!("{}", text);
        } else {
            println!("{}", self.report_generator(&config).generate(&report));
        }

        self.write_exports(&args, &config, &report)
    }

    fn report_generator(&self, config: &Config) -> ReportGenerator {
        ReportGenerator::new()
            .with_top_n(config.top_n)
            .with_preview_chars(config.preview_chars, config.detail_preview_chars)
            .with_show_all(config.show_all)
    }

    fn write_exports(&self, args: &CrackArgs, config: &Config, report: &CrackReport) -> anyhow::Result<()> {
        if let Some(path) = &args.json {
            JsonSerializer::new()
                .serialize_to_file(report, path)
                .with_context(|| format!("Failed to write JSON report {}", path.display()))?;
            self.status(&format!("JSON report saved to: {}", path.display()));
        }

        if let Some(path) = &args.report {
            self.report_generator(config)
                .generate_to_file(report, path)
                .with_context(|| format!("Failed to write text report {}", path.display()))?;
            self.status(&format!("Text report saved to: {}", path.display()));
        }

        Ok(())
    }

    fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if self.quiet || self.json_output {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    }

    fn handle_shift(&self, args: ShiftArgs, encrypt: bool) -> anyhow::Result<()> {
        let text = args.source.read()?;
        let output = if encrypt {
            encode(&text, args.key)
        } else {
            decode(&text, args.key)
        };

        if self.json_output {
            println!("{}", json!({ "key": args.key, "output": output }));
        } else {
            println!("{}", output);
        }
        Ok(())
    }

    fn handle_detect(&self, source: TextSource) -> anyhow::Result<()> {
        let text = source.read()?;
        let french = StopwordSet::builtin(Language::Fr);
        let english = StopwordSet::builtin(Language::En);

        let by_frequency = guess_language(&text);
        let (by_stopwords, hits) = guess_language_by_stopwords(&text, &french, &english);
        let dominant = letter_frequency(&text).dominant();

        if self.json_output {
            println!(
                "{}",
                json!({
                    "frequency": by_frequency,
                    "stopwords": by_stopwords,
                    "stopword_hits": hits,
                    "dominant_letter": dominant.map(|c| c.to_string()),
                })
            );
            return Ok(());
        }

        println!("  By letter frequency : {}", by_frequency.name().cyan());
        println!("  By stopwords        : {} ({} hits)", by_stopwords.name().cyan(), hits);
        if let Some(letter) = dominant {
            println!("  Most frequent letter: {}", letter);
        }
        Ok(())
    }

    fn handle_vigenere(&self, args: VigenereArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;
        let text = args.source.read()?;
        let key = recover_key(&text, args.key_length, args.language);

        if self.json_output {
            println!("{}", json!({ "key_length": args.key_length, "language": args.language, "key": key }));
        } else {
            self.status(&format!("Recovered key ({} letters, {}): {}", args.key_length, args.language.name(), key));
            if self.quiet {
                println!("{}", key);
            }
        }
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn crack_args(extra: &[&str]) -> CrackArgs {
        let mut argv = vec!["caesar-cracker", "crack", "--text", "Khoor"];
        argv.extend_from_slice(extra);
        match Args::try_parse_from(argv).unwrap().command {
            Command::Crack(args) => args,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_build_config_overrides() {
        let config = CommandHandler::build_config(&crack_args(&[
            "--top", "2", "--languages", "en", "--builtin-stopwords", "--no-parallel", "--summary",
        ]))
        .unwrap();

        assert_eq!(config.top_n, 2);
        assert_eq!(config.languages, vec![Language::En]);
        assert_eq!(config.stopwords_path(Language::En), None);
        assert!(!config.parallel);
        assert!(!config.show_all);
    }

    #[test]
    fn test_build_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"top_n": 7, "threads": 2}}"#).unwrap();
        let path = file.path().to_string_lossy().to_string();

        let config = CommandHandler::build_config(&crack_args(&["--config", &path])).unwrap();
        assert_eq!(config.top_n, 7);
        assert_eq!(config.threads, 2);

        let overridden = CommandHandler::build_config(&crack_args(&["--config", &path, "--top", "1"])).unwrap();
        assert_eq!(overridden.top_n, 1);
    }

    #[test]
    fn test_crack_writes_exports() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("report.json");
        let text_path = dir.path().join("report.txt");

        let args = Args::try_parse_from([
            "caesar-cracker",
            "--quiet",
            "--no-color",
            "crack",
            "--text",
            "Wkh fdw vdw rq wkh pdw",
            "--builtin-stopwords",
            "--summary",
            "--json",
            json_path.to_str().unwrap(),
            "--report",
            text_path.to_str().unwrap(),
        ])
        .unwrap();

        CommandHandler::new().execute(args).unwrap();

        let json_text = std::fs::read_to_string(&json_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json_text).unwrap();
        assert_eq!(value["decision"]["best"]["shift"], 3);

        let text = std::fs::read_to_string(&text_path).unwrap();
        assert!(text.contains("The cat sat on the mat"));
    }

    #[test]
    fn test_repeated_execution_with_extreme_keys() {
        for key in ["9223372036854775807", "-9223372036854775808"] {
            for command in ["encode", "decode"] {
                let args = Args::try_parse_from([
                    "caesar-cracker", "-q", "-l", "debug", command, "--text", "b", "--key", key,
                ])
                .unwrap();
                assert!(CommandHandler::new().execute(args).is_ok());
            }
        }
    }

    #[test]
    fn test_crack_rejects_zero_top() {
        let args = Args::try_parse_from(["caesar-cracker", "-q", "crack", "--text", "abc", "--top", "0"]).unwrap();
        assert!(CommandHandler::new().execute(args).is_err());
    }

    #[test]
    fn test_crack_missing_input_file() {
        let args = Args::try_parse_from([
            "caesar-cracker", "-q", "crack", "--input", "/nonexistent/cipher.txt", "--builtin-stopwords",
        ])
        .unwrap();
        let err = CommandHandler::new().execute(args).unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }
}
