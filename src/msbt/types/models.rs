//! Core data structures for MSBT format components.
//!
//! This module defines the fundamental types used throughout the library:
//! - Byte order and section tag enumerations
//! - The parsed container header and per-section bookkeeping
//! - The decoded document and its label entries

use std::ops::Range;

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};

use super::error::{MsbtError, ParseWarning, Result};
use crate::msbt::iter::Entries;

/// Byte order of every multi-byte field in one MSBT file.
///
/// Selected by the 2-byte marker at offset `0x08`:
/// - `FE FF`: big-endian
/// - `FF FE`: little-endian
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    pub const BIG_ENDIAN_MARKER: [u8; 2] = [0xFE, 0xFF];
    pub const LITTLE_ENDIAN_MARKER: [u8; 2] = [0xFF, 0xFE];

    /// Resolves the byte order from the raw header marker.
    pub fn from_marker(marker: [u8; 2]) -> Result<Self> {
        match marker {
            Self::BIG_ENDIAN_MARKER => Ok(Self::BigEndian),
            Self::LITTLE_ENDIAN_MARKER => Ok(Self::LittleEndian),
            _ => Err(MsbtError::UnknownByteOrder { marker }),
        }
    }

    pub fn marker(&self) -> [u8; 2] {
        match self {
            ByteOrder::BigEndian => Self::BIG_ENDIAN_MARKER,
            ByteOrder::LittleEndian => Self::LITTLE_ENDIAN_MARKER,
        }
    }

    pub(crate) fn read_u16(&self, bytes: &[u8]) -> u16 {
        match self {
            ByteOrder::BigEndian => BigEndian::read_u16(bytes),
            ByteOrder::LittleEndian => LittleEndian::read_u16(bytes),
        }
    }

    pub(crate) fn read_u32(&self, bytes: &[u8]) -> u32 {
        match self {
            ByteOrder::BigEndian => BigEndian::read_u32(bytes),
            ByteOrder::LittleEndian => LittleEndian::read_u32(bytes),
        }
    }

    /// The UTF-16 variant message text is stored in for this byte order.
    pub fn text_encoding(&self) -> &'static Encoding {
        match self {
            ByteOrder::BigEndian => UTF_16BE,
            ByteOrder::LittleEndian => UTF_16LE,
        }
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ByteOrder::BigEndian => write!(f, "big-endian"),
            ByteOrder::LittleEndian => write!(f, "little-endian"),
        }
    }
}

/// Section types the dispatcher knows how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTag {
    /// `LBL1`: hash-bucketed label names.
    Labels,
    /// `ATR1`: fixed-size per-message attribute blobs.
    Attributes,
    /// `TXT2`: UTF-16 message text.
    Text,
    /// `TSY1`: style ids. Recognized but not decoded.
    Styles,
}

impl SectionTag {
    /// Maps a 4-character section tag to its section type.
    /// Returns `None` for tags with no decoder.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "LBL1" => Some(Self::Labels),
            "ATR1" => Some(Self::Attributes),
            "TXT2" => Some(Self::Text),
            "TSY1" => Some(Self::Styles),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionTag::Labels => "LBL1",
            SectionTag::Attributes => "ATR1",
            SectionTag::Text => "TXT2",
            SectionTag::Styles => "TSY1",
        }
    }
}

impl std::fmt::Display for SectionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields extracted from the fixed 32-byte container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub byte_order: ByteOrder,
    pub section_count: u16,
    /// Size the header claims for the whole file. Never used to bound reads.
    pub declared_file_size: u32,
}

/// Bookkeeping for one section visited by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionInfo {
    /// The raw 4-character tag as read from the file.
    pub tag: String,
    /// Absolute offset of the 16-byte section header.
    pub header_offset: usize,
    /// Absolute offset of the section body; table offsets are relative to this.
    pub body_offset: usize,
    /// Declared body size, excluding header and padding.
    pub size: u32,
    /// Whether a decoder ran for this section (false when skipped as unknown).
    pub decoded: bool,
}

/// A label from the `LBL1` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    /// Position of the label's text in [`MsbtDocument::messages`].
    pub message_index: u32,
}

/// Opaque per-message attribute blobs.
///
/// Entries are ranges into one copy of the input region the `ATR1` offset
/// tables cover, so entries that alias the same bytes share storage and
/// the total size never exceeds the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    data: Vec<u8>,
    spans: Vec<Range<usize>>,
}

impl Attributes {
    /// Builds the table from absolute ranges into `source`.
    ///
    /// Only `min(start)..max(end)` of `source` is copied. Ranges that do not
    /// lie inside `source` resolve to no entry.
    pub(crate) fn from_source(source: &[u8], spans: &[Range<usize>]) -> Self {
        let (Some(lo), Some(hi)) = (
            spans.iter().map(|span| span.start).min(),
            spans.iter().map(|span| span.end).max(),
        ) else {
            return Self::default();
        };
        let data = source.get(lo..hi).map(<[u8]>::to_vec).unwrap_or_default();
        let spans = spans
            .iter()
            .map(|span| span.start - lo..span.end - lo)
            .collect();
        Self { data, spans }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        let span = self.spans.get(index)?;
        self.data.get(span.clone())
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.spans
            .iter()
            .map(|span| self.data.get(span.clone()).unwrap_or_default())
    }

    /// Bytes actually held for all entries together.
    pub fn stored_bytes(&self) -> usize {
        self.data.len()
    }
}

/// A fully decoded MSBT file.
///
/// Built once by [`parse`](crate::parse) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsbtDocument {
    pub byte_order: ByteOrder,
    pub section_count: u16,
    pub declared_file_size: u32,
    pub sections: Vec<SectionInfo>,
    /// Labels in hash-slot order, then in-slot order. Not sorted.
    pub labels: Vec<Label>,
    pub messages: Vec<String>,
    /// Per-message attribute size declared by the first `ATR1`; 0 when absent.
    pub attribute_size: u32,
    /// One opaque blob per message.
    pub attributes: Attributes,
    /// Reserved for `TSY1`. Always empty.
    pub style_ids: Vec<u32>,
    pub warnings: Vec<ParseWarning>,
}

impl MsbtDocument {
    /// Finds a label by name.
    pub fn label(&self, name: &str) -> Option<&Label> {
        self.labels.iter().find(|label| label.name == name)
    }

    /// Returns the text of the message a label points at.
    ///
    /// `None` if the label does not exist or its index is out of range.
    pub fn message(&self, name: &str) -> Option<&str> {
        let label = self.label(name)?;
        self.messages
            .get(label.message_index as usize)
            .map(String::as_str)
    }

    /// Returns the raw attribute bytes of a message.
    pub fn attribute(&self, message_index: u32) -> Option<&[u8]> {
        self.attributes.get(message_index as usize)
    }

    /// Iterates over labels joined with their text and attributes.
    pub fn entries(&self) -> Entries<'_> {
        Entries::new(self)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_copy_only_the_covered_region() {
        let source: Vec<u8> = (0..32).collect();
        let spans = [20..24, 8..12, 20..24, 10..14];
        let attributes = Attributes::from_source(&source, &spans);

        assert_eq!(attributes.len(), 4);
        assert_eq!(attributes.stored_bytes(), 16);
        assert_eq!(attributes.get(0), Some(&source[20..24]));
        assert_eq!(attributes.get(1), Some(&source[8..12]));
        assert_eq!(attributes.get(3), Some(&source[10..14]));
        assert_eq!(attributes.get(4), None);
    }

    #[test]
    fn attributes_from_no_spans_are_empty() {
        let attributes = Attributes::from_source(&[1, 2, 3], &[]);
        assert!(attributes.is_empty());
        assert_eq!(attributes.stored_bytes(), 0);
        assert_eq!(attributes.iter().count(), 0);
    }
}
