//! Load `.labelscan.toml` from the scanned directory (CLI only). Library callers build [`ScanOpts`] directly.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::ScanOpts;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub struct LabelscanToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsSection {
    extension: Option<String>,
    top: Option<usize>,
    min_freq: Option<usize>,
    limit: Option<usize>,
    export: Option<bool>,
    feature: Option<bool>,
    verbose: Option<bool>,
    output_dir: Option<String>,
}

/// Parse settings from a TOML string.
pub fn parse_labelscan_toml(s: &str) -> Result<LabelscanToml, toml::de::Error> {
    toml::from_str(s)
}

/// Load `.labelscan.toml` from `dir`. `Ok(None)` when the file (or `dir`) does not exist.
/// Nothing is logged here: the caller reports errors once logging is set up.
pub fn load_labelscan_toml(dir: &Path) -> Result<Option<LabelscanToml>> {
    let path = dir.join(PackagePaths::get().config_filename());
    let s = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("read {}", path.display())),
    };
    parse_labelscan_toml(&s)
        .map(Some)
        .with_context(|| format!("parse {}", path.display()))
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($sec:expr, $opts:expr, $sec_field:ident => $opts_field:ident) => {
        if let Some(v) = $sec.$sec_field.clone() {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI flags.
pub fn apply_file_to_opts(file: &LabelscanToml, opts: &mut ScanOpts) {
    let sec = &file.settings;
    apply_file_opt!(sec, opts, extension => extension);
    apply_file_opt!(sec, opts, top => top);
    apply_file_opt!(sec, opts, min_freq => min_frequency);
    apply_file_opt!(sec, opts, limit => limit);
    apply_file_opt!(sec, opts, export => export);
    apply_file_opt!(sec, opts, feature => feature);
    apply_file_opt!(sec, opts, verbose => verbose);
    if let Some(ref p) = sec.output_dir {
        opts.output_dir = PathBuf::from(p);
    }
}
