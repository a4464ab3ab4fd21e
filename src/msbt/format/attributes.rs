//! `ATR1` attribute table decoding.
//!
//! Attribute bytes are format-version specific and passed through as
//! opaque blobs. The decoder only checks that each blob lies inside the
//! buffer and records where it is; nothing is copied here, since many
//! offsets may point at the same bytes.

use std::ops::Range;

use log::{debug, trace};

use crate::msbt::cursor::Cursor;
use crate::msbt::types::error::Result;
use crate::msbt::utils;

/// Layout of one `ATR1` section.
#[derive(Debug, Default)]
pub struct AttributeTable {
    /// Message count from the section header, kept for cross-checking labels.
    pub declared_count: u32,
    pub entry_size: u32,
    /// Absolute buffer range of each entry, in message order.
    pub spans: Vec<Range<usize>>,
}

/// Decodes the attribute table whose body starts at `body_start`.
///
/// A zero entry size means the table carries no attributes; no offset
/// array follows and `spans` stays empty.
pub fn decode(cursor: &mut Cursor<'_>, body_start: usize) -> Result<AttributeTable> {
    let declared_count = cursor.read_u32()?;
    let entry_size = cursor.read_u32()?;
    debug!("ATR1: {} messages, {} bytes each", declared_count, entry_size);

    let mut table = AttributeTable {
        declared_count,
        entry_size,
        spans: Vec::new(),
    };
    if entry_size == 0 {
        return Ok(table);
    }

    let size = entry_size as usize;
    for index in 0..declared_count {
        let offset = cursor.read_u32()?;
        let target = utils::resolve_offset(body_start, offset, cursor.len())?;
        trace!("ATR1 entry {} at {:#x}", index, target);
        cursor.detour(target, |c| c.read_bytes(size).map(|_| ()))?;
        table.spans.push(target..target + size);
    }

    Ok(table)
}
