//! Ranked console views over an aggregate report.

use std::path::Path;

use crate::report::preview;
use crate::utils::Colors;
use crate::utils::config::{LONG_LABEL_CHARS, ReportConsts, TOKEN_LIMIT};
use crate::{AggregateReport, LabelFile, LongLabel, TokenBucket};

/// One line of the token distribution.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketRow {
    pub bucket: TokenBucket,
    pub count: usize,
    /// Share of files with at least one label, 0..=100.
    pub percentage: f64,
}

/// Files by label count, descending. Stable: equal counts keep scan order.
pub fn top_by_label_count(report: &AggregateReport, n: usize) -> Vec<&LabelFile> {
    let mut files: Vec<&LabelFile> = report.file_stats.iter().collect();
    files.sort_by(|a, b| b.label_count.cmp(&a.label_count));
    files.truncate(n);
    files
}

/// Files by estimated tokens, descending. Stable: equal estimates keep scan order.
pub fn top_by_tokens(report: &AggregateReport, n: usize) -> Vec<&LabelFile> {
    let mut files: Vec<&LabelFile> = report.file_stats.iter().collect();
    files.sort_by(|a, b| b.estimated_tokens.total_cmp(&a.estimated_tokens));
    files.truncate(n);
    files
}

/// All five buckets in numeric order, with percentages of the labeled files.
pub fn bucket_distribution(report: &AggregateReport) -> Vec<BucketRow> {
    let total = report.token_distribution.total();
    report
        .token_distribution
        .iter()
        .map(|(bucket, count)| BucketRow {
            bucket,
            count,
            percentage: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            },
        })
        .collect()
}

/// Long labels by length, descending. Stable: equal lengths keep encounter order.
pub fn longest_labels(report: &AggregateReport, n: usize) -> Vec<&LongLabel> {
    let mut labels: Vec<&LongLabel> = report.long_labels.iter().collect();
    labels.sort_by(|a, b| b.length.cmp(&a.length));
    labels.truncate(n);
    labels
}

/// Files over the token budget, in scan order.
pub fn violations(report: &AggregateReport) -> Vec<&LabelFile> {
    report.files_over_limit().collect()
}

pub fn most_frequent(report: &AggregateReport, n: usize) -> Vec<(&str, usize)> {
    report.label_frequency.most_common(Some(n))
}

fn section(title: &str) {
    println!("\n{}", Colors::header(title));
    println!("{}", "-".repeat(40));
}

fn limit_flag(file: &LabelFile) -> String {
    if file.exceeds_limit() {
        Colors::colorize(Colors::OVER_LIMIT, "may exceed limit")
    } else {
        String::new()
    }
}

/// Print every view. Prints a notice instead when the report holds no files.
pub fn print_leaderboard(report: &AggregateReport) {
    if report.file_stats.is_empty() {
        println!("No label files found!");
        return;
    }

    let rule = "=".repeat(ReportConsts::RULE_WIDTH);
    println!("{rule}");
    println!("{}", Colors::header("LABEL FILE LEADERBOARD"));
    println!("{rule}");

    section("By label count:");
    for (i, f) in top_by_label_count(report, ReportConsts::TOP_FILES)
        .into_iter()
        .enumerate()
    {
        println!(
            "{:2}. {:30} labels: {:3}  tokens: {:5.1} {}",
            i + 1,
            f.filename,
            f.label_count,
            f.estimated_tokens,
            limit_flag(f)
        );
    }

    section("By estimated tokens:");
    for (i, f) in top_by_tokens(report, ReportConsts::TOP_FILES)
        .into_iter()
        .enumerate()
    {
        println!(
            "{:2}. {:30}  tokens: {:5.1}  labels: {:3} {}",
            i + 1,
            f.filename,
            f.estimated_tokens,
            f.label_count,
            limit_flag(f)
        );
    }

    section("Token distribution:");
    for row in bucket_distribution(report) {
        let bar = "*".repeat((row.percentage / 2.0) as usize);
        println!(
            "{:20}: {:3} files {:5.1}% {}",
            row.bucket.label(),
            row.count,
            row.percentage,
            bar
        );
    }

    if !report.long_labels.is_empty() {
        section("Longest labels:");
        for (i, item) in longest_labels(report, ReportConsts::TOP_LONG_LABELS)
            .into_iter()
            .enumerate()
        {
            println!("{:2}. {:20} length: {:3}", i + 1, item.filename, item.length);
            println!(
                "    label: {}",
                preview(&item.label, ReportConsts::LONG_LABEL_PREVIEW)
            );
            println!();
        }
    }

    section(&format!("Potential violations (over {TOKEN_LIMIT} tokens):"));
    let over = violations(report);
    if over.is_empty() {
        println!(
            "{}",
            Colors::colorize(Colors::OK, "No files over the token limit")
        );
    } else {
        for f in over {
            println!("file: {}", Colors::colorize(Colors::OVER_LIMIT, &f.filename));
            println!("  tokens: {:.1}", f.estimated_tokens);
            println!("  labels: {}", f.label_count);
            println!(
                "  longest label: {}",
                preview(&f.longest_label, ReportConsts::VIOLATION_PREVIEW)
            );
            println!();
        }
    }

    section("Most frequent labels:");
    for (i, (label, count)) in most_frequent(report, ReportConsts::TOP_FREQUENT)
        .into_iter()
        .enumerate()
    {
        println!(
            "{:2}. {:43} count: {:3}",
            i + 1,
            preview(label, ReportConsts::FREQUENT_PREVIEW),
            count
        );
    }
}

/// Closing summary for a scan of `root`.
pub fn print_summary(report: &AggregateReport, root: &Path) {
    println!("\n{}", "=".repeat(ReportConsts::RULE_WIDTH));
    println!("{}", Colors::header("SUMMARY"));
    println!("Scanned directory: {}", root.display());
    println!("Files processed: {}", report.file_stats.len());
    println!("Total labels: {}", report.total_labels());
    println!("Distinct labels: {}", report.label_frequency.len());
    println!(
        "Files with labels over {LONG_LABEL_CHARS} chars: {}",
        report.file_stats.iter().filter(|f| f.has_long_labels).count()
    );

    let over = report.over_limit_count();
    if over > 0 {
        println!(
            "{}",
            Colors::colorize(Colors::WARN, &format!("Files that may be too long: {over}"))
        );
        println!(
            "Note: labels in these files may exceed the {TOKEN_LIMIT}-token limit of the text encoder"
        );
    } else {
        println!(
            "{}",
            Colors::colorize(Colors::OK, "All files are within the token limit")
        );
    }
}
