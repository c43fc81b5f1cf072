//! Engine module: command line surface and path helpers

pub mod arg_parser;
pub mod cli;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use cli::{handle_run, setup_opts};
pub use tools::{
    file_name_string, has_label_extension, is_os_hidden_file, should_include_in_scan,
    validate_root,
};
