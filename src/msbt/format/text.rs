//! `TXT2` message text decoding.
//!
//! Each message is a run of UTF-16 code units in the file's byte order,
//! terminated by a `0x0000` unit. The terminator is only recognised on a
//! code-unit boundary: a zero byte inside a unit (e.g. the high byte of
//! `'A'`) never ends the string.
//!
//! Inline control codes used for markup are returned verbatim.

use log::{debug, trace};

use crate::msbt::cursor::Cursor;
use crate::msbt::types::{
    error::{MsbtError, Result},
    models::ByteOrder,
};
use crate::msbt::utils;

const UNIT_WIDTH: usize = 2;

/// Decodes the text table whose body starts at `body_start`.
pub fn decode(
    cursor: &mut Cursor<'_>,
    body_start: usize,
    byte_order: ByteOrder,
) -> Result<Vec<String>> {
    let message_count = cursor.read_u32()?;
    debug!("TXT2: {} messages", message_count);

    let mut messages = Vec::with_capacity(message_count.min(1024) as usize);
    for index in 0..message_count {
        let offset = cursor.read_u32()?;
        let target = utils::resolve_offset(body_start, offset, cursor.len())?;
        let units = cursor.detour(target, read_terminated_units)?;
        let text = utils::decode_utf16(units, byte_order);
        trace!("TXT2 message {} at {:#x}: {:?}", index, target, text);
        messages.push(text);
    }

    Ok(messages)
}

/// Returns the bytes before the next aligned `00 00` unit and advances past it.
fn read_terminated_units<'a>(cursor: &mut Cursor<'a>) -> Result<&'a [u8]> {
    let start = cursor.position();
    let available = cursor.peek_bytes(cursor.remaining())?;

    let end = available
        .chunks_exact(UNIT_WIDTH)
        .position(|unit| unit == [0, 0])
        .map(|unit_index| unit_index * UNIT_WIDTH)
        .ok_or(MsbtError::OutOfBounds {
            offset: start,
            requested: available.len() + UNIT_WIDTH,
            len: cursor.len(),
        })?;

    let units = cursor.read_bytes(end)?;
    cursor.skip(UNIT_WIDTH);
    Ok(units)
}
