//! Feature-prompt generator: join the most frequent labels into one reusable prompt.

use anyhow::{Context, Result};
use log::debug;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::AggregateReport;
use crate::pipeline::parse::{count_words, estimate_tokens};
use crate::utils::Colors;
use crate::utils::config::{PROMPT_SEPARATOR, TOKEN_LIMIT};

/// Selected labels and the prompt built from them.
#[derive(Clone, Debug, PartialEq)]
pub struct FeaturePrompt {
    /// `(label, frequency)` by descending frequency, first-insertion order on ties.
    pub entries: Vec<(String, usize)>,
    /// Labels joined with `", "`.
    pub prompt: String,
    /// Words over the individual labels (separators not counted).
    pub word_count: usize,
    pub estimated_tokens: f64,
    pub min_frequency: usize,
    /// Files the frequency table was built from.
    pub basis_files: usize,
    /// Labels meeting the threshold before the `top_n` cut.
    pub qualifying: usize,
}

impl FeaturePrompt {
    pub fn exceeds_limit(&self) -> bool {
        self.estimated_tokens > TOKEN_LIMIT
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }
}

/// Labels with frequency >= `min_frequency`, at most `top_n` of them.
/// `None` when no label qualifies.
pub fn select_features(
    report: &AggregateReport,
    top_n: usize,
    min_frequency: usize,
) -> Option<FeaturePrompt> {
    let frequent: Vec<(&str, usize)> = report
        .label_frequency
        .most_common(None)
        .into_iter()
        .filter(|(_, n)| *n >= min_frequency)
        .collect();
    if frequent.is_empty() {
        return None;
    }
    let qualifying = frequent.len();
    let entries: Vec<(String, usize)> = frequent
        .into_iter()
        .take(top_n)
        .map(|(l, n)| (l.to_string(), n))
        .collect();
    let labels: Vec<&str> = entries.iter().map(|(l, _)| l.as_str()).collect();
    let word_count = count_words(&labels);
    Some(FeaturePrompt {
        prompt: labels.join(PROMPT_SEPARATOR),
        word_count,
        estimated_tokens: estimate_tokens(word_count),
        min_frequency,
        basis_files: report.file_stats.len(),
        qualifying,
        entries,
    })
}

/// Text written to the feature-prompt file: header, prompt between separators, itemized list.
pub fn render_feature_file(fp: &FeaturePrompt) -> String {
    let sep = "=".repeat(50);
    let mut out = String::new();
    let _ = writeln!(out, "# Generated feature prompt");
    let _ = writeln!(
        out,
        "# Based on label statistics from {} files",
        fp.basis_files
    );
    let _ = writeln!(
        out,
        "# Contains {} feature labels with frequency >= {}",
        fp.entries.len(),
        fp.min_frequency
    );
    let _ = writeln!(out, "# Estimated tokens: {:.1}", fp.estimated_tokens);
    let _ = write!(out, "\n{sep}\n\n{}\n\n{sep}\n", fp.prompt);
    let _ = writeln!(out, "\n# Feature labels:");
    for (i, (label, freq)) in fp.entries.iter().enumerate() {
        let _ = writeln!(out, "{:3}. {} (occurrences: {})", i + 1, label, freq);
    }
    out
}

fn print_feature_prompt(report: &AggregateReport, fp: &FeaturePrompt) {
    let rule = "=".repeat(80);
    println!("\n{rule}");
    println!("{}", Colors::header("FEATURE PROMPT GENERATOR"));
    println!("{rule}");
    println!(
        "Total label occurrences: {}",
        report.label_frequency.total_occurrences()
    );
    println!("Distinct labels: {}", report.label_frequency.len());
    println!(
        "Labels with frequency >= {}: {}",
        fp.min_frequency, fp.qualifying
    );

    println!("\nSelected feature labels (top {}):", fp.entries.len());
    println!("{}", "-".repeat(40));
    for (i, (label, freq)) in fp.entries.iter().enumerate() {
        println!("{:3}. {:<40} (occurrences: {})", i + 1, label, freq);
    }

    println!("\nFeature prompt:");
    println!("{}", "-".repeat(40));
    println!("{}", fp.prompt);
    println!("\nPrompt statistics:");
    println!("  labels: {}", fp.entries.len());
    println!("  characters: {}", fp.prompt.chars().count());
    println!("  words: {}", fp.word_count);
    println!("  estimated tokens: {:.1}", fp.estimated_tokens);
    let over = if fp.exceeds_limit() {
        Colors::colorize(Colors::OVER_LIMIT, "yes")
    } else {
        Colors::colorize(Colors::OK, "no")
    };
    println!("  over {TOKEN_LIMIT}-token limit: {over}");
}

/// Select features, print them, and write the feature-prompt file to `out_path`.
/// Returns `Ok(None)` without writing anything when there are no labels or none qualify.
pub fn generate_feature_prompt(
    report: &AggregateReport,
    top_n: usize,
    min_frequency: usize,
    out_path: &Path,
) -> Result<Option<FeaturePrompt>> {
    if report.label_frequency.is_empty() {
        println!("No labels found!");
        return Ok(None);
    }
    let Some(fp) = select_features(report, top_n, min_frequency) else {
        println!("No labels with frequency >= {min_frequency}");
        return Ok(None);
    };
    print_feature_prompt(report, &fp);

    fs::write(out_path, render_feature_file(&fp))
        .with_context(|| format!("write feature prompt to {}", out_path.display()))?;
    debug!("feature prompt: {} labels", fp.entries.len());
    println!("\nFeature prompt saved to: {}", out_path.display());
    Ok(Some(fp))
}
