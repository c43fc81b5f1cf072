pub mod config;
pub mod labelscan_toml;
pub mod logger;

pub use config::*;
pub use labelscan_toml::{apply_file_to_opts, load_labelscan_toml};
pub use logger::{Colors, setup_logging};
