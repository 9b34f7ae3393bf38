// Wed Jan 21 2026 - Alex

use crate::engine::CrackReport;
use crate::scoring::{Decision, ScoredResult};
use colored::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const RULE_WIDTH: usize = 70;

/// Renders a [`CrackReport`] as the human-readable console report.
pub struct ReportGenerator {
    top_n: usize,
    preview_chars: usize,
    detail_preview_chars: usize,
    show_all: bool,
    use_color: bool,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            top_n: 5,
            preview_chars: 150,
            detail_preview_chars: 400,
            show_all: true,
            use_color: true,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_preview_chars(mut self, list: usize, detail: usize) -> Self {
        self.preview_chars = list;
        self.detail_preview_chars = detail;
        self
    }

    pub fn with_show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn generate(&self, report: &CrackReport) -> String {
        let mut out = String::new();

        if self.show_all {
            out.push_str(&self.text_all_results(report));
            out.push('\n');
        }

        out.push_str(&self.text_top(report));
        out.push('\n');

        if let Some(decision) = &report.decision {
            out.push_str(&self.text_decision(decision));
            out.push('\n');
            out.push_str(&self.text_statistics(report, decision));
        } else {
            out.push_str(&self.paint("[!] No candidates to rank", |s| s.red()));
            out.push('\n');
        }

        out
    }

    pub fn generate_to_file<P: AsRef<Path>>(&self, report: &CrackReport, path: P) -> std::io::Result<()> {
        let plain = ReportGenerator { use_color: false, ..*self };
        let text = plain.generate(report);
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.use_color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, title: &str) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        format!(
            "{}\n{}\n{}\n",
            self.paint(&rule, |s| s.cyan()),
            self.paint(title, |s| s.cyan().bold()),
            self.paint(&rule, |s| s.cyan())
        )
    }

    fn text_all_results(&self, report: &CrackReport) -> String {
        let mut out = self.heading(&format!(
            "ALL RESULTS ({} candidates = 25 keys x {} languages)",
            report.candidates_analyzed(),
            report.languages.len()
        ));

        for r in &report.ranked {
            let f = &r.features;
            out.push_str(&format!(
                "Key: {:2} | {} | Stopwords: {:3}/{:3} ({:5.1}%) | Chi2: {:6.1} | IC: {:.4} | AvgLen: {:.1} | Alpha: {:.0}% | Score: {:5.1}/100\n",
                r.shift,
                r.language.code().to_uppercase(),
                f.stopword_count,
                f.token_count,
                f.stopword_pct,
                f.chi_squared,
                f.index_of_coincidence,
                f.avg_word_length,
                f.alpha_ratio,
                r.score
            ));
            out.push_str(&format!("   {}\n", preview(&r.plaintext, self.preview_chars).replace('\n', " ")));
            out.push_str(&"-".repeat(RULE_WIDTH));
            out.push('\n');
        }

        out
    }

    fn text_top(&self, report: &CrackReport) -> String {
        let mut out = self.heading(&format!("TOP {} RESULTS", self.top_n));

        for (i, r) in report.top(self.top_n).iter().enumerate() {
            out.push_str(&"-".repeat(RULE_WIDTH));
            out.push('\n');
            out.push_str(&self.paint(&format!("RANK #{}", i + 1), |s| s.yellow().bold()));
            out.push('\n');
            out.push_str(&self.text_detail(r));
        }

        out
    }

    fn text_detail(&self, r: &ScoredResult) -> String {
        let f = &r.features;
        let mut out = String::new();
        out.push_str(&format!("  Key        : {}\n", r.shift));
        out.push_str(&format!("  Language   : {}\n", r.language.code().to_uppercase()));
        out.push_str(&format!("  Score      : {:.1}/100\n", r.score));
        out.push_str("  Metrics:\n");
        out.push_str(&format!(
            "    - Stopwords    : {}/{} ({:.1}%)\n",
            f.stopword_count, f.token_count, f.stopword_pct
        ));
        out.push_str(&format!("    - Chi2         : {:.2} (lower is better)\n", f.chi_squared));
        out.push_str(&format!(
            "    - IC           : {:.4} (0.065 = english, 0.074 = french)\n",
            f.index_of_coincidence
        ));
        out.push_str(&format!("    - Avg length   : {:.1} letters/word\n", f.avg_word_length));
        out.push_str(&format!("    - Alpha ratio  : {:.1}%\n", f.alpha_ratio));
        out.push_str("  Preview:\n");
        out.push_str(&preview(&r.plaintext, self.detail_preview_chars));
        out.push('\n');
        out
    }

    fn text_decision(&self, decision: &Decision) -> String {
        let b = &decision.best;
        let mut out = self.heading("AUTOMATIC DECISION");
        out.push_str(&self.paint("[+] Accepted solution", |s| s.green().bold()));
        out.push('\n');
        out.push_str(&format!("    Key      : {}\n", b.shift));
        out.push_str(&format!("    Language : {}\n", b.language.code().to_uppercase()));
        out.push_str(&format!("    Score    : {:.1}/100\n", b.score));
        out.push_str("  Justification:\n");
        out.push_str(&format!(
            "    - {:.0}% recognised stopwords ({} words)\n",
            b.features.stopword_pct, b.features.stopword_count
        ));
        out.push_str(&format!(
            "    - Chi2 of {:.1} against {} letter frequencies\n",
            b.features.chi_squared,
            b.language.name()
        ));
        out.push_str(&format!("    - Index of coincidence {:.4}\n", b.features.index_of_coincidence));
        out.push_str("  Plaintext:\n");
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        out.push_str(&b.plaintext);
        out.push('\n');
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        out
    }

    fn text_statistics(&self, report: &CrackReport, decision: &Decision) -> String {
        let confidence = format!("{}", decision.confidence);
        let confidence = if decision.confidence.needs_review() {
            self.paint(&confidence, |s| s.red().bold())
        } else {
            self.paint(&confidence, |s| s.green().bold())
        };

        let mut out = String::from("Statistics:\n");
        out.push_str(&format!("  - Candidates analysed : {}\n", report.candidates_analyzed()));
        out.push_str(&format!("  - Best score          : {:.1}/100\n", decision.best.score));
        out.push_str(&format!("  - Gap to second       : {:.1} points\n", decision.gap));
        out.push_str(&format!("  - Confidence          : {}\n", confidence));
        out
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// First `max_chars` characters, with an ellipsis when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::engine::CrackEngine;

    fn sample_report() -> CrackReport {
        let engine = CrackEngine::new(Config::new().with_builtin_stopwords()).unwrap();
        engine.run("Wkh fdw vdw rq wkh pdw")
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("hello", 10), "hello");
        assert_eq!(preview("hello world", 5), "hello...");
        assert_eq!(preview("éèêë", 2), "éè...");
        assert_eq!(preview("", 3), "");
    }

    #[test]
    fn test_generate_plain_report() {
        let text = ReportGenerator::new()
            .with_color(false)
            .with_top_n(2)
            .generate(&sample_report());

        assert!(text.contains("ALL RESULTS (50 candidates = 25 keys x 2 languages)"));
        assert!(text.contains("TOP 2 RESULTS"));
        assert!(text.contains("RANK #2"));
        assert!(!text.contains("RANK #3"));
        assert!(text.contains("AUTOMATIC DECISION"));
        assert!(text.contains("The cat sat on the mat"));
        assert!(text.contains("Candidates analysed : 50"));
        assert!(text.contains("Confidence          : very high"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_summary_only() {
        let text = ReportGenerator::new()
            .with_color(false)
            .with_show_all(false)
            .generate(&sample_report());
        assert!(!text.contains("ALL RESULTS"));
        assert!(text.contains("TOP 5 RESULTS"));
    }

    #[test]
    fn test_generate_to_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        ReportGenerator::new()
            .generate_to_file(&sample_report(), file.path())
            .unwrap();
        let written = std::fs::read_to_string(file.path()).unwrap();
        assert!(written.contains("AUTOMATIC DECISION"));
        assert!(!written.contains('\u{1b}'));
    }
}
