//! Low-level helpers shared by the section decoders.

use super::types::error::{MsbtError, Result};
use super::types::models::ByteOrder;

/// Sections are padded so the next one starts on this boundary.
pub const SECTION_ALIGNMENT: usize = 0x10;

/// Rounds `pos` up to the next multiple of [`SECTION_ALIGNMENT`].
///
/// An already aligned position is returned unchanged.
pub fn align_section(pos: usize) -> Option<usize> {
    pos.checked_next_multiple_of(SECTION_ALIGNMENT)
}

/// Resolves a table offset relative to a section body into an absolute offset.
pub fn resolve_offset(body_start: usize, offset: u32, buffer_len: usize) -> Result<usize> {
    body_start
        .checked_add(offset as usize)
        .ok_or(MsbtError::OutOfBounds {
            offset: body_start,
            requested: offset as usize,
            len: buffer_len,
        })
}

/// Decodes UTF-16 code units stored in `byte_order` into a string.
///
/// BOM sniffing is disabled so a leading `U+FEFF` stays part of the text.
/// Unpaired surrogates decode to `U+FFFD`.
pub fn decode_utf16(bytes: &[u8], byte_order: ByteOrder) -> String {
    let (text, _) = byte_order
        .text_encoding()
        .decode_without_bom_handling(bytes);
    text.into_owned()
}
