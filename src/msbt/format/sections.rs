//! Section dispatch.
//!
//! Every section shares a 16-byte header:
//!
//! ```text
//! [4 bytes] Tag (ASCII, e.g. "LBL1")
//! [4 bytes] Body size (u32), excluding this header and padding
//! [8 bytes] Reserved
//! [N bytes] Body
//! [..]      Padding up to the next 16-byte boundary
//! ```
//!
//! The next section always starts at `align16(body_start + size)`, no
//! matter how far the decoder itself moved the cursor.

use std::ops::Range;

use log::{debug, warn};

use super::{attributes, labels, styles, text};
use crate::msbt::cursor::Cursor;
use crate::msbt::types::{
    error::{MsbtError, ParseWarning, Result},
    models::{ContainerHeader, Label, SectionInfo, SectionTag},
    options::{ParseOptions, UnknownSectionPolicy},
};
use crate::msbt::utils;

const TAG_SIZE: usize = 4;
const RESERVED_SIZE: usize = 8;

/// Everything the section decoders produced, before validation.
#[derive(Debug, Default)]
pub struct DecodedSections {
    pub sections: Vec<SectionInfo>,
    pub labels: Vec<Label>,
    pub messages: Vec<String>,
    /// Sum of declared `ATR1` message counts; `None` if no `ATR1` was seen.
    pub attribute_count: Option<u32>,
    /// Entry size of the first `ATR1` with attributes; 0 when none.
    pub attribute_size: u32,
    /// Absolute buffer ranges of every attribute entry, in file order.
    pub attribute_spans: Vec<Range<usize>>,
    pub style_ids: Vec<u32>,
    /// Whether a `TXT2` section was seen.
    pub has_text: bool,
    pub warnings: Vec<ParseWarning>,
}

/// Walks exactly `header.section_count` sections starting at the cursor.
pub fn parse(
    cursor: &mut Cursor<'_>,
    header: &ContainerHeader,
    options: &ParseOptions,
) -> Result<DecodedSections> {
    let mut decoded = DecodedSections::default();

    for index in 0..header.section_count {
        let header_offset = cursor.position();
        let tag = cursor.read_text(TAG_SIZE)?;
        let size = cursor.read_u32()?;
        cursor.skip(RESERVED_SIZE);
        let body_start = cursor.position();
        debug!(
            "Section {}/{}: {:?}, {} bytes at {:#x}",
            index + 1,
            header.section_count,
            tag,
            size,
            body_start
        );

        let padded_end = body_start
            .checked_add(size as usize)
            .and_then(utils::align_section)
            .ok_or(MsbtError::OutOfBounds {
                offset: body_start,
                requested: size as usize,
                len: cursor.len(),
            })?;

        let decoded_here = match SectionTag::from_tag(&tag) {
            Some(kind) => {
                decode_section(cursor, kind, body_start, header, &mut decoded)?;
                true
            }
            None => match options.unknown_sections {
                UnknownSectionPolicy::Reject => {
                    return Err(MsbtError::UnknownSectionTag {
                        tag,
                        offset: header_offset,
                    });
                }
                UnknownSectionPolicy::Skip => {
                    let warning = ParseWarning::SkippedSection {
                        tag: tag.clone(),
                        offset: header_offset,
                        size,
                    };
                    warn!("{}", warning);
                    decoded.warnings.push(warning);
                    false
                }
            },
        };

        decoded.sections.push(SectionInfo {
            tag,
            header_offset,
            body_offset: body_start,
            size,
            decoded: decoded_here,
        });
        cursor.seek(padded_end);
    }

    Ok(decoded)
}

fn decode_section(
    cursor: &mut Cursor<'_>,
    kind: SectionTag,
    body_start: usize,
    header: &ContainerHeader,
    decoded: &mut DecodedSections,
) -> Result<()> {
    match kind {
        SectionTag::Labels => {
            let labels = labels::decode(cursor, body_start)?;
            decoded.labels.extend(labels);
        }
        SectionTag::Attributes => {
            let table = attributes::decode(cursor, body_start)?;
            decoded.attribute_count =
                Some(decoded.attribute_count.unwrap_or(0).saturating_add(table.declared_count));
            if table.entry_size != 0 {
                if decoded.attribute_size == 0 {
                    decoded.attribute_size = table.entry_size;
                } else if decoded.attribute_size != table.entry_size {
                    let warning = ParseWarning::AttributeSizeMismatch {
                        expected: decoded.attribute_size,
                        found: table.entry_size,
                    };
                    warn!("{}", warning);
                    decoded.warnings.push(warning);
                }
            }
            decoded.attribute_spans.extend(table.spans);
        }
        SectionTag::Text => {
            let messages = text::decode(cursor, body_start, header.byte_order)?;
            decoded.messages.extend(messages);
            decoded.has_text = true;
        }
        SectionTag::Styles => {
            let style_ids = styles::decode(cursor, body_start)?;
            decoded.style_ids.extend(style_ids);
        }
    }
    Ok(())
}
