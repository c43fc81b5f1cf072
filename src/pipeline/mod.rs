//! Pipeline components: collect, parse, aggregate, error handling.

pub mod aggregate;
pub mod collect;
pub mod error_handler;
pub mod orchestrator;
pub mod parse;

pub use aggregate::aggregate;
pub use collect::{CollectOutcome, collect_label_files, read_label_file};
pub use error_handler::check_for_skipped_paths;
pub use orchestrator::scan_labels;
pub use parse::{
    count_words, estimate_tokens, longest_label, parse_label_file, select_delimiter, split_labels,
};
