//! Public types for the labelscan API and pipeline.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::PathBuf;

use crate::utils::config::{
    DEFAULT_EXTENSION, DEFAULT_FEATURE_TOP, DEFAULT_MIN_FREQUENCY, PackagePaths, TOKEN_LIMIT,
};

/// One scanned label file. Built once by the collector and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelFile {
    pub filename: String,
    /// Absolute path of the file.
    pub path: PathBuf,
    /// File content with leading/trailing whitespace removed.
    pub raw_content: String,
    /// Labels in file order.
    pub labels: Vec<String>,
    pub label_count: usize,
    /// Whitespace-separated words summed over all labels.
    pub word_count: usize,
    /// Characters (not bytes) summed over all labels.
    pub char_count: usize,
    /// `word_count * 1.5`.
    pub estimated_tokens: f64,
    /// Any label longer than 50 characters.
    pub has_long_labels: bool,
    /// Longest label; the first one wins on ties. Empty when there are no labels.
    pub longest_label: String,
}

impl LabelFile {
    /// True when the token estimate is above the encoder budget.
    pub fn exceeds_limit(&self) -> bool {
        self.estimated_tokens > TOKEN_LIMIT
    }
}

/// A label longer than the long-label threshold, with the file it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongLabel {
    pub filename: String,
    pub label: String,
    /// Length in characters.
    pub length: usize,
}

/// Fixed, ordered token-range buckets: `[0,20]`, `(20,40]`, `(40,60]`, `(60,77]`, `(77,inf)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenBucket {
    UpTo20,
    UpTo40,
    UpTo60,
    UpTo77,
    Over77,
}

impl TokenBucket {
    /// All buckets in numeric order.
    pub const ALL: [TokenBucket; 5] = [
        TokenBucket::UpTo20,
        TokenBucket::UpTo40,
        TokenBucket::UpTo60,
        TokenBucket::UpTo77,
        TokenBucket::Over77,
    ];

    pub fn for_tokens(tokens: f64) -> Self {
        if tokens <= 20.0 {
            TokenBucket::UpTo20
        } else if tokens <= 40.0 {
            TokenBucket::UpTo40
        } else if tokens <= 60.0 {
            TokenBucket::UpTo60
        } else if tokens <= TOKEN_LIMIT {
            TokenBucket::UpTo77
        } else {
            TokenBucket::Over77
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TokenBucket::UpTo20 => "0-20 tokens",
            TokenBucket::UpTo40 => "21-40 tokens",
            TokenBucket::UpTo60 => "41-60 tokens",
            TokenBucket::UpTo77 => "61-77 tokens",
            TokenBucket::Over77 => "over 77 tokens",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TokenBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Count of files per token bucket. Serialized as a map keyed by bucket label, in bucket order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, usize>")]
pub struct TokenHistogram {
    counts: [usize; 5],
}

impl TokenHistogram {
    pub fn increment(&mut self, bucket: TokenBucket) {
        self.counts[bucket.index()] += 1;
    }

    pub fn get(&self, bucket: TokenBucket) -> usize {
        self.counts[bucket.index()]
    }

    /// Sum over all buckets; equals the number of files with at least one label.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(bucket, count)` pairs in numeric bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenBucket, usize)> + '_ {
        TokenBucket::ALL.into_iter().map(|b| (b, self.get(b)))
    }
}

impl Serialize for TokenHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (bucket, count) in self.iter() {
            map.serialize_entry(bucket.label(), &count)?;
        }
        map.end()
    }
}

impl TryFrom<BTreeMap<String, usize>> for TokenHistogram {
    type Error = String;

    fn try_from(map: BTreeMap<String, usize>) -> Result<Self, Self::Error> {
        let mut hist = TokenHistogram::default();
        for (name, count) in map {
            let bucket = TokenBucket::from_label(&name)
                .ok_or_else(|| format!("unknown token bucket: {name}"))?;
            hist.counts[bucket.index()] = count;
        }
        Ok(hist)
    }
}

/// Occurrences per label across all files. Remembers first-insertion order for tie-breaking.
#[derive(Clone, Debug, Default)]
pub struct LabelFrequency {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl LabelFrequency {
    pub fn record(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), 1));
            }
        }
    }

    pub fn get(&self, label: &str) -> usize {
        self.index.get(label).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all occurrence counts.
    pub fn total_occurrences(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Labels by descending frequency; equal counts keep first-insertion order.
    /// `limit: None` returns every label.
    pub fn most_common(&self, limit: Option<usize>) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> =
            self.entries.iter().map(|(l, n)| (l.as_str(), *n)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(n) = limit {
            ranked.truncate(n);
        }
        ranked
    }
}

impl PartialEq for LabelFrequency {
    /// Same labels with the same counts; insertion order is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.entries.iter().all(|(l, n)| other.get(l) == *n)
    }
}

/// Everything the reporter, exporter and feature-prompt generator read. Built by
/// [`aggregate`](crate::pipeline::aggregate()) and passed by reference afterwards.
#[derive(Clone, Debug, Default)]
pub struct AggregateReport {
    /// One entry per non-empty label file, in scan order.
    pub file_stats: Vec<LabelFile>,
    /// Files with at least one label, per token bucket.
    pub token_distribution: TokenHistogram,
    pub label_frequency: LabelFrequency,
    /// Every label over the long-label threshold, in scan order.
    pub long_labels: Vec<LongLabel>,
}

impl AggregateReport {
    pub fn total_labels(&self) -> usize {
        self.file_stats.iter().map(|f| f.label_count).sum()
    }

    /// Files over the 77-token budget, in scan order.
    pub fn files_over_limit(&self) -> impl Iterator<Item = &LabelFile> {
        self.file_stats.iter().filter(|f| f.exceeds_limit())
    }

    pub fn over_limit_count(&self) -> usize {
        self.files_over_limit().count()
    }
}

/// Options for a scan run (CLI, `.labelscan.toml`, or library callers).
#[derive(Clone, Debug)]
pub struct ScanOpts {
    /// Label-file extension without the dot, matched case-insensitively.
    pub extension: String,
    /// Cap on label files read. 0 means no cap.
    pub limit: usize,
    /// Feature-prompt size.
    pub top: usize,
    /// Feature-prompt minimum frequency.
    pub min_frequency: usize,
    /// Write the JSON summary.
    pub export: bool,
    /// Generate the feature prompt.
    pub feature: bool,
    /// Debug logging (per-file details, skipped paths).
    pub verbose: bool,
    /// Directory receiving the export and feature-prompt files.
    pub output_dir: PathBuf,
}

impl Default for ScanOpts {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            limit: 0,
            top: DEFAULT_FEATURE_TOP,
            min_frequency: DEFAULT_MIN_FREQUENCY,
            export: false,
            feature: false,
            verbose: false,
            output_dir: PathBuf::from("."),
        }
    }
}

impl ScanOpts {
    /// `Some(n)` when a file cap is set.
    pub fn file_cap(&self) -> Option<usize> {
        (self.limit > 0).then_some(self.limit)
    }

    pub fn export_path(&self) -> PathBuf {
        self.output_dir.join(PackagePaths::get().export_filename())
    }

    pub fn feature_path(&self) -> PathBuf {
        self.output_dir.join(PackagePaths::get().feature_filename())
    }
}
