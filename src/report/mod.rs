//! Consumers of an [`AggregateReport`](crate::AggregateReport): console leaderboard,
//! feature-prompt generator, JSON export. None of them mutate the report.

pub mod export;
pub mod feature;
pub mod leaderboard;

pub use export::{ExportSummary, ExportTotals, ExportedFile, export_report, read_export};
pub use feature::{FeaturePrompt, generate_feature_prompt, render_feature_file, select_features};
pub use leaderboard::{
    BucketRow, bucket_distribution, longest_labels, most_frequent, print_leaderboard,
    print_summary, top_by_label_count, top_by_tokens, violations,
};

use std::borrow::Cow;

/// First `max_chars` characters of `text`, with `...` appended when something was cut.
pub fn preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => Cow::Owned(format!("{}...", &text[..byte_idx])),
        None => Cow::Borrowed(text),
    }
}

/// First `max_chars` characters of `text`, no marker.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
