//! Labelscan: token-length checks and feature prompts for caption label files

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use error::ScanError;
pub use types::*;

pub use pipeline::scan_labels;

/// Result alias used by public labelscan API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;
