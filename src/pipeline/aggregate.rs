//! Aggregator: fold per-file records into one [`AggregateReport`].

use crate::pipeline::parse::{char_len, is_long_label};
use crate::{AggregateReport, LabelFile, LongLabel, TokenBucket};

impl AggregateReport {
    /// Add one file. Every file lands in `file_stats`; only files with labels touch the
    /// histogram, the frequency table and the long-label list.
    pub fn add_file(&mut self, file: LabelFile) {
        if file.label_count > 0 {
            self.token_distribution
                .increment(TokenBucket::for_tokens(file.estimated_tokens));
            for label in &file.labels {
                self.label_frequency.record(label);
                if is_long_label(label) {
                    self.long_labels.push(LongLabel {
                        filename: file.filename.clone(),
                        label: label.clone(),
                        length: char_len(label),
                    });
                }
            }
        }
        self.file_stats.push(file);
    }
}

/// Fold `files` in order.
pub fn aggregate<I>(files: I) -> AggregateReport
where
    I: IntoIterator<Item = LabelFile>,
{
    let mut report = AggregateReport::default();
    for file in files {
        report.add_file(file);
    }
    report
}
