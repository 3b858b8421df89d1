//! Utility modules.

pub mod file;

pub use file::{calculate_checksum, is_text_file, read_file_content};
