//! Application configuration constants.
//! Thresholds, report sizes and output names in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    config_filename: String,
    export_filename: &'static str,
    feature_filename: &'static str,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                config_filename: format!(".{pkg}.toml"),
                export_filename: "label_analysis.json",
                feature_filename: "feature_prompt.txt",
            }
        })
    }

    /// Per-directory settings file, looked up in the scanned directory.
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }

    pub fn export_filename(&self) -> &str {
        self.export_filename
    }

    pub fn feature_filename(&self) -> &str {
        self.feature_filename
    }

    /// Filenames never treated as label files, even when the extension matches.
    pub fn default_exclude_names(&self) -> Vec<String> {
        vec![
            self.export_filename().to_string(),
            self.feature_filename().to_string(),
            self.config_filename().to_string(),
        ]
    }
}

// ---- Token estimation ----

/// Token budget of the downstream text encoder. Files above this are reported as violations.
pub const TOKEN_LIMIT: f64 = 77.0;

/// Fixed heuristic: estimated tokens = words * TOKENS_PER_WORD. Not a tokenizer.
pub const TOKENS_PER_WORD: f64 = 1.5;

/// Labels with more characters than this are recorded as long labels.
pub const LONG_LABEL_CHARS: usize = 50;

// ---- Parsing ----

/// Delimiters in priority order. The first one present in the content is the only one used.
pub const DELIMITERS: [char; 5] = [',', ';', '|', '\n', '\t'];

/// Default label-file extension (matched case-insensitively, without the dot).
pub const DEFAULT_EXTENSION: &str = "txt";

// ---- Reports ----

/// Row counts and preview widths for the console leaderboard.
pub struct ReportConsts;

impl ReportConsts {
    /// Files shown in the by-label-count and by-token ranking.
    pub const TOP_FILES: usize = 10;
    /// Entries shown in the longest-label ranking.
    pub const TOP_LONG_LABELS: usize = 5;
    /// Entries shown in the most-frequent-label ranking.
    pub const TOP_FREQUENT: usize = 10;
    /// Preview width for long labels.
    pub const LONG_LABEL_PREVIEW: usize = 60;
    /// Preview width for a violating file's longest label.
    pub const VIOLATION_PREVIEW: usize = 50;
    /// Preview width for frequent labels.
    pub const FREQUENT_PREVIEW: usize = 40;
    /// Width of the separator lines.
    pub const RULE_WIDTH: usize = 80;
}

/// Sizes used by the JSON export.
pub struct ExportConsts;

impl ExportConsts {
    /// Frequent labels and long labels kept in the export.
    pub const TOP_ROWS: usize = 20;
    /// Longest label per file is cut to this many characters.
    pub const LONGEST_LABEL_CAP: usize = 100;
}

// ---- Feature prompt ----

pub const DEFAULT_FEATURE_TOP: usize = 20;
pub const DEFAULT_MIN_FREQUENCY: usize = 2;

/// Separator used to join feature labels into one prompt.
pub const PROMPT_SEPARATOR: &str = ", ";
