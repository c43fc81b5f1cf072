//! Path and filter utilities

use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Check if a file should be excluded based on OS-specific hidden files
pub fn is_os_hidden_file(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        match name {
            // macOS
            ".DS_Store" | ".AppleDouble" | ".LSOverride" => true,
            // Windows
            "Thumbs.db" | "ehthumbs.db" | "Desktop.ini" => true,
            // Linux
            ".directory" => true,
            _ => {
                // macOS resource fork files start with ._
                name.starts_with("._")
            }
        }
    } else {
        false
    }
}

/// True when the file name ends in `.{extension}`, ignoring ASCII case.
pub fn has_label_extension(path: &Path, extension: &str) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    name.len() >= suffix.len()
        && name.is_char_boundary(name.len() - suffix.len())
        && name[name.len() - suffix.len()..].eq_ignore_ascii_case(&suffix)
}

/// Returns true if the path is a candidate label file (extension match, not excluded).
pub fn should_include_in_scan(path: &Path, extension: &str, exclude_names: &[String]) -> bool {
    if !has_label_extension(path, extension) || is_os_hidden_file(path) {
        return false;
    }
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => !exclude_names.iter().any(|ex| ex == name),
        None => false,
    }
}

/// Check that `dir` exists and is a directory; return it as an absolute path.
pub fn validate_root(dir: &Path) -> Result<PathBuf, ScanError> {
    if !dir.exists() {
        return Err(ScanError::DirectoryNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }
    Ok(std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf()))
}

/// File name as a display string (lossy for non-UTF-8 names).
pub fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
