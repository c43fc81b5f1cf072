use anyhow::Result;
use log::debug;
use std::path::Path;

use crate::engine::tools::validate_root;
use crate::pipeline::{aggregate, check_for_skipped_paths, collect_label_files};
use crate::{AggregateReport, ScanOpts};

/// Main orchestrator: validate `root`, collect its label files and fold them into one report.
/// Collector → Aggregator; nothing is printed besides log output.
pub fn scan_labels(root: &Path, opts: &ScanOpts) -> Result<AggregateReport> {
    let root = validate_root(root)?;
    let collected = collect_label_files(&root, opts);
    debug!(
        "collect done: {} label files, {} empty, {} skipped",
        collected.files.len(),
        collected.empty_files,
        collected.skipped.len()
    );
    check_for_skipped_paths(&collected.skipped, opts.verbose);
    Ok(aggregate(collected.files))
}
