//! # msbt-reader
//!
//! A reader for MsgStdBn (`.msbt`) message tables, the binary container
//! used for localized text resources.
//!
//! Decodes label (`LBL1`), attribute (`ATR1`) and text (`TXT2`) sections in
//! either byte order. Style (`TSY1`) sections are recognised and skipped.
//! Writing files is not supported.
pub mod msbt;

// Re-export the main types for convenience
pub use msbt::{
    MsbtError,
    ParseWarning,
    Result,
    iter::{Entries, MessageEntry},
    parse,
    parse_with_options,
    read_file,
    read_file_with_options,
    types::{
        models::{Attributes, ByteOrder, ContainerHeader, Label, MsbtDocument, SectionInfo, SectionTag},
        options::{ParseOptions, UnknownSectionPolicy},
    },
};
