//! JSON export of a trimmed report summary, and reading it back.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::report::truncate_chars;
use crate::utils::config::ExportConsts;
use crate::{AggregateReport, LabelFile, LongLabel, TokenHistogram};

/// Per-file record without raw content or label list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportedFile {
    pub filename: String,
    pub label_count: usize,
    pub word_count: usize,
    pub char_count: usize,
    pub estimated_tokens: f64,
    pub has_long_labels: bool,
    /// Cut to 100 characters.
    pub longest_label: String,
}

impl From<&LabelFile> for ExportedFile {
    fn from(f: &LabelFile) -> Self {
        ExportedFile {
            filename: f.filename.clone(),
            label_count: f.label_count,
            word_count: f.word_count,
            char_count: f.char_count,
            estimated_tokens: f.estimated_tokens,
            has_long_labels: f.has_long_labels,
            longest_label: truncate_chars(&f.longest_label, ExportConsts::LONGEST_LABEL_CAP)
                .to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportTotals {
    pub total_files: usize,
    pub total_labels: usize,
    pub token_distribution: TokenHistogram,
    /// Files over the 77-token budget.
    pub problematic_files: usize,
}

/// Layout of `label_analysis.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportSummary {
    pub file_stats: Vec<ExportedFile>,
    pub summary: ExportTotals,
    /// `[label, count]` pairs, most frequent first.
    pub most_common_labels: Vec<(String, usize)>,
    /// First 20 long-label records in scan order.
    pub longest_labels: Vec<LongLabel>,
}

impl ExportSummary {
    pub fn from_report(report: &AggregateReport) -> Self {
        ExportSummary {
            file_stats: report.file_stats.iter().map(ExportedFile::from).collect(),
            summary: ExportTotals {
                total_files: report.file_stats.len(),
                total_labels: report.total_labels(),
                token_distribution: report.token_distribution.clone(),
                problematic_files: report.over_limit_count(),
            },
            most_common_labels: report
                .label_frequency
                .most_common(Some(ExportConsts::TOP_ROWS))
                .into_iter()
                .map(|(l, n)| (l.to_string(), n))
                .collect(),
            longest_labels: report
                .long_labels
                .iter()
                .take(ExportConsts::TOP_ROWS)
                .cloned()
                .collect(),
        }
    }
}

/// Write the summary of `report` to `out_path` as pretty-printed UTF-8 JSON.
pub fn export_report(report: &AggregateReport, out_path: &Path) -> Result<ExportSummary> {
    let summary = ExportSummary::from_report(report);
    let json = serde_json::to_string_pretty(&summary).context("serialize export summary")?;
    fs::write(out_path, json)
        .with_context(|| format!("write export to {}", out_path.display()))?;
    Ok(summary)
}

/// Load a summary previously written by [`export_report`].
pub fn read_export(path: &Path) -> Result<ExportSummary> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{aggregate, parse_label_file};

    #[test]
    fn test_longest_label_capped_at_100_chars() {
        let long = "x".repeat(150);
        let r = aggregate(parse_label_file("a.txt", Path::new("a.txt"), &long));
        let summary = ExportSummary::from_report(&r);
        assert_eq!(summary.file_stats[0].longest_label.chars().count(), 100);
        assert_eq!(summary.longest_labels[0].length, 150);
    }

    #[test]
    fn test_longest_labels_kept_in_scan_order() {
        let r = aggregate([
            parse_label_file("a.txt", Path::new("a.txt"), &"a".repeat(51)),
            parse_label_file("b.txt", Path::new("b.txt"), &"b".repeat(70)),
        ]
        .into_iter()
        .flatten());
        let summary = ExportSummary::from_report(&r);
        let order: Vec<&str> = summary
            .longest_labels
            .iter()
            .map(|l| l.filename.as_str())
            .collect();
        assert_eq!(order, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_longest_labels_first_twenty_encountered() {
        // 25 long labels, growing in length; the longest five come last
        let content = (0..25)
            .map(|i| "x".repeat(51 + i))
            .collect::<Vec<_>>()
            .join(", ");
        let r = aggregate(parse_label_file("a.txt", Path::new("a.txt"), &content));
        let lengths: Vec<usize> = ExportSummary::from_report(&r)
            .longest_labels
            .iter()
            .map(|l| l.length)
            .collect();
        assert_eq!(lengths, (51..71).collect::<Vec<_>>());
    }

    #[test]
    fn test_most_common_serializes_as_pairs() {
        let r = aggregate(parse_label_file("a.txt", Path::new("a.txt"), "cat, cat, dog"));
        let value = serde_json::to_value(ExportSummary::from_report(&r)).unwrap();
        assert_eq!(
            value["most_common_labels"],
            serde_json::json!([["cat", 2], ["dog", 1]])
        );
        assert_eq!(value["summary"]["total_labels"], 3);
        assert!(value["file_stats"][0].get("raw_content").is_none());
    }
}
