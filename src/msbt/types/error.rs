//! Custom error and warning types for the msbt-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every variant is fatal: a parse either yields a complete
/// [`MsbtDocument`](super::models::MsbtDocument) or one of these.
#[derive(Debug, Error)]
pub enum MsbtError {
    /// An error originating from I/O operations (only raised by `read_file`).
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The file does not start with the `MsgStdBn` magic.
    #[error("Bad magic: expected \"MsgStdBn\", found {found:02x?}")]
    BadMagic { found: Vec<u8> },

    /// The byte-order marker is neither `FE FF` nor `FF FE`.
    #[error("Unknown byte-order marker: {marker:02x?}")]
    UnknownByteOrder { marker: [u8; 2] },

    /// A multi-byte read was attempted before the byte-order marker was read.
    /// Indicates a sequencing bug in the decoder, not bad input.
    #[error("Multi-byte read attempted before byte order was established")]
    UninitializedByteOrder,

    /// A read would run past the end of the input buffer.
    #[error("Read of {requested} bytes at offset {offset:#x} exceeds buffer of {len} bytes")]
    OutOfBounds {
        offset: usize,
        requested: usize,
        len: usize,
    },

    /// The dispatcher met a section tag it has no decoder for.
    #[error("Unknown section tag {tag:?} at offset {offset:#x}")]
    UnknownSectionTag { tag: String, offset: usize },

    /// The attribute table's declared message count differs from the label count.
    /// Only raised when strict attribute counting is enabled.
    #[error("Attribute count mismatch: ATR1 declares {declared} entries, but {labels} labels were found")]
    AttributeCountMismatch { declared: u32, labels: usize },
}

/// Recoverable irregularities found while decoding.
///
/// These never abort a parse; they are collected on the document and logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    /// The attribute table's declared message count differs from the label count.
    #[error("ATR1 declares {declared} entries, but {labels} labels were found")]
    AttributeCountMismatch { declared: u32, labels: usize },

    /// A later `ATR1` section declares a different entry size than the first.
    /// `attribute_size` keeps the first; each entry keeps its own length.
    #[error("ATR1 entry size {found} differs from the first ATR1 entry size {expected}")]
    AttributeSizeMismatch { expected: u32, found: u32 },

    /// A label points past the end of the text table.
    #[error("Label {name:?} points at message {message_index}, but only {messages} messages exist")]
    LabelIndexOutOfRange {
        name: String,
        message_index: u32,
        messages: usize,
    },

    /// An unrecognized section was skipped under the lenient policy.
    #[error("Skipped unknown section {tag:?} ({size} bytes) at offset {offset:#x}")]
    SkippedSection {
        tag: String,
        offset: usize,
        size: u32,
    },
}

/// A convenience `Result` type alias using the crate's `MsbtError` type.
pub type Result<T> = std::result::Result<T, MsbtError>;
