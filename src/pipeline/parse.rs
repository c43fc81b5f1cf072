//! Label parsing and per-file statistics.

use std::path::Path;

use crate::LabelFile;
use crate::utils::config::{DELIMITERS, LONG_LABEL_CHARS, TOKENS_PER_WORD};

/// First delimiter from the priority list that occurs anywhere in `content`.
pub fn select_delimiter(content: &str) -> Option<char> {
    DELIMITERS.into_iter().find(|d| content.contains(*d))
}

/// Split trimmed content into labels.
///
/// Only the selected delimiter is used; pieces are trimmed and empty ones dropped. With no
/// delimiter present the whole content is one label. Delimiter-only content yields no labels.
pub fn split_labels(content: &str) -> Vec<String> {
    let content = content.trim();
    if content.is_empty() {
        return Vec::new();
    }
    match select_delimiter(content) {
        Some(delim) => content
            .split(delim)
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect(),
        None => vec![content.to_string()],
    }
}

/// Whitespace-separated words across all labels.
pub fn count_words<S: AsRef<str>>(labels: &[S]) -> usize {
    labels
        .iter()
        .map(|l| l.as_ref().split_whitespace().count())
        .sum()
}

/// Heuristic token estimate: `words * 1.5`.
pub fn estimate_tokens(word_count: usize) -> f64 {
    word_count as f64 * TOKENS_PER_WORD
}

pub fn char_len(label: &str) -> usize {
    label.chars().count()
}

pub fn is_long_label(label: &str) -> bool {
    char_len(label) > LONG_LABEL_CHARS
}

/// Longest label by character count; the earliest wins on ties.
pub fn longest_label<S: AsRef<str>>(labels: &[S]) -> &str {
    let mut best = "";
    let mut best_len = 0;
    for label in labels {
        let label = label.as_ref();
        let len = char_len(label);
        if len > best_len {
            best = label;
            best_len = len;
        }
    }
    best
}

/// Build a [`LabelFile`] from raw file content. Returns `None` when the trimmed content is empty.
pub fn parse_label_file(filename: &str, path: &Path, content: &str) -> Option<LabelFile> {
    let raw_content = content.trim();
    if raw_content.is_empty() {
        return None;
    }
    let labels = split_labels(raw_content);
    let word_count = count_words(&labels);
    Some(LabelFile {
        filename: filename.to_string(),
        path: path.to_path_buf(),
        raw_content: raw_content.to_string(),
        label_count: labels.len(),
        word_count,
        char_count: labels.iter().map(|l| char_len(l)).sum(),
        estimated_tokens: estimate_tokens(word_count),
        has_long_labels: labels.iter().any(|l| is_long_label(l)),
        longest_label: longest_label(&labels).to_string(),
        labels,
    })
}
