use clap::Parser;
use std::path::PathBuf;

use crate::ScanOpts;

struct DefaultArgs;

impl DefaultArgs {
    pub const DIR: &'static str = ".";
}

/// Check caption label files against the 77-token encoder budget and build feature prompts.
///
/// Flags left unset fall back to `.labelscan.toml` in DIR, then to built-in defaults.
#[derive(Clone, Debug, Parser)]
#[command(name = "labelscan", version)]
#[command(about = "Check label file lengths and generate a feature prompt.")]
pub struct Cli {
    /// Directory to scan. Default: current directory.
    #[arg(long, short = 'd', value_name = "DIR", default_value = DefaultArgs::DIR)]
    pub dir: PathBuf,

    /// Export a JSON summary (label_analysis.json).
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub export: Option<bool>,

    /// Generate a feature prompt from the most frequent labels (feature_prompt.txt).
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub feature: Option<bool>,

    /// Number of labels in the feature prompt. Default: 20.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub top: Option<usize>,

    /// Minimum frequency for a label to enter the feature prompt. Default: 2.
    #[arg(long = "min-freq", value_parser = clap::value_parser!(usize))]
    pub min_freq: Option<usize>,

    /// Maximum number of label files to read. 0 means no limit.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub limit: Option<usize>,

    /// Label file extension. Default: txt.
    #[arg(long)]
    pub ext: Option<String>,

    /// Directory for output files. Default: current directory.
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Verbose output (per-file details).
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}

/// Overwrite opts field from CLI when the flag was given.
macro_rules! apply_cli_opt {
    ($cli:expr, $opts:expr, $cli_field:ident => $opts_field:ident) => {
        if let Some(v) = $cli.$cli_field.clone() {
            $opts.$opts_field = v;
        }
    };
}

impl Cli {
    /// Apply the flags that were given on top of `opts`.
    pub fn apply_to_opts(&self, opts: &mut ScanOpts) {
        apply_cli_opt!(self, opts, export => export);
        apply_cli_opt!(self, opts, feature => feature);
        apply_cli_opt!(self, opts, top => top);
        apply_cli_opt!(self, opts, min_freq => min_frequency);
        apply_cli_opt!(self, opts, limit => limit);
        apply_cli_opt!(self, opts, ext => extension);
        apply_cli_opt!(self, opts, output_dir => output_dir);
        apply_cli_opt!(self, opts, verbose => verbose);
    }
}
