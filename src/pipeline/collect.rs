//! Collector: walk the scan root (non-recursive), read each label file, parse it into a [`LabelFile`].

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::engine::tools::{file_name_string, should_include_in_scan};
use crate::error::ScanError;
use crate::pipeline::parse::parse_label_file;
use crate::utils::config::{PackagePaths, TOKEN_LIMIT};
use crate::{LabelFile, ScanOpts};

/// What the collector produced: parsed files in scan order, plus what it left out.
#[derive(Debug, Default)]
pub struct CollectOutcome {
    pub files: Vec<LabelFile>,
    /// Label files whose trimmed content was empty.
    pub empty_files: usize,
    /// Paths that could not be read or walked, with the cause.
    pub skipped: Vec<(PathBuf, String)>,
}

/// Read a whole label file as UTF-8. The handle is closed before returning.
pub fn read_label_file(path: &Path) -> Result<String, ScanError> {
    fs::read_to_string(path).map_err(|source| ScanError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Collect label files directly under `root`, in file-name order.
pub fn collect_label_files(root: &Path, opts: &ScanOpts) -> CollectOutcome {
    let iter = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();
    let exclude = PackagePaths::get().default_exclude_names();
    run_collect_loop(iter, opts, &exclude)
}

/// Consume `iter`, read and parse every candidate label file, and record failures without stopping.
/// Stops early once `opts.limit` candidate files have been read.
fn run_collect_loop<I>(iter: I, opts: &ScanOpts, exclude_names: &[String]) -> CollectOutcome
where
    I: Iterator<Item = walkdir::Result<DirEntry>>,
{
    let mut outcome = CollectOutcome::default();
    let mut read = 0_usize;
    for walked in iter {
        match walked {
            Ok(entry) => {
                let path = entry.into_path();
                if !path.is_file() || !should_include_in_scan(&path, &opts.extension, exclude_names)
                {
                    continue;
                }
                if let Some(cap) = opts.file_cap()
                    && read >= cap
                {
                    debug!("File limit of {} reached, stopping scan", cap);
                    break;
                }
                read += 1;

                let filename = file_name_string(&path);
                debug!("Processing file: {}", filename);
                let content = match read_label_file(&path) {
                    Ok(c) => c,
                    Err(e) => {
                        warn!("{}", e);
                        outcome.skipped.push((path, e.to_string()));
                        continue;
                    }
                };
                match parse_label_file(&filename, &path, &content) {
                    Some(file) => {
                        log_file_stats(&file);
                        outcome.files.push(file);
                    }
                    None => {
                        debug!("  {}: empty file", filename);
                        outcome.empty_files += 1;
                    }
                }
            }
            Err(err) => {
                let path = err
                    .path()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("<no-path>"));
                warn!("{}: {}", path.display(), err);
                outcome.skipped.push((path, err.to_string()));
            }
        }
    }
    outcome
}

fn log_file_stats(file: &LabelFile) {
    debug!(
        "  labels: {}, words: {}, chars: {}, estimated tokens: {:.1}, may exceed {}: {}",
        file.label_count,
        file.word_count,
        file.char_count,
        file.estimated_tokens,
        TOKEN_LIMIT,
        if file.exceeds_limit() { "yes" } else { "no" }
    );
}
