use std::path::PathBuf;

/// Log the files the collector skipped. Per-file causes are already logged as they happen;
/// this emits the total, and each path again when verbose.
pub fn check_for_skipped_paths(skipped: &[(PathBuf, String)], verbose: bool) {
    if skipped.is_empty() {
        return;
    }
    log::warn!(
        "Skipped {} files due to read errors or access issues",
        skipped.len()
    );
    if verbose {
        for (p, msg) in skipped {
            log::debug!("  skipped: {} ({})", p.display(), msg);
        }
    }
}
