//! Core MSBT decoding module.
//!
//! Decoding runs in one forward pass over a borrowed buffer:
//! header, then `section_count` tagged sections, then a validation pass
//! that turns cross-table inconsistencies into [`ParseWarning`]s.

pub mod cursor;
pub mod format;
pub mod iter;
pub mod reader;
pub mod types;
mod utils;

pub use reader::{parse, parse_with_options, read_file, read_file_with_options};
pub use types::error::{MsbtError, ParseWarning, Result};
