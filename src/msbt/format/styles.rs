//! `TSY1` style table.
//!
//! The tag is recognised so it does not trip the unknown-section policy,
//! but its layout is not decoded. The dispatcher's padding logic moves the
//! cursor past the declared body.

use log::debug;

use crate::msbt::cursor::Cursor;
use crate::msbt::types::error::Result;

pub fn decode(_cursor: &mut Cursor<'_>, body_start: usize) -> Result<Vec<u32>> {
    debug!("TSY1 at {:#x}: not decoded", body_start);
    Ok(Vec::new())
}
