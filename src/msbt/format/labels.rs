//! `LBL1` label table decoding.
//!
//! Labels are stored in a hash table. The slot array is read front to
//! back; each slot points at an out-of-line run of entries. Bucketing is
//! a storage detail and is not exposed.
//!
//! ```text
//! [u32]                 slot count
//! [u32, u32] * slots    (labels in slot, offset of first label)
//! ...
//! per label: [u8 len][len bytes name][u32 message index]
//! ```

use log::{debug, trace};

use crate::msbt::cursor::Cursor;
use crate::msbt::types::{error::Result, models::Label};
use crate::msbt::utils;

/// Decodes the label table whose body starts at `body_start`.
pub fn decode(cursor: &mut Cursor<'_>, body_start: usize) -> Result<Vec<Label>> {
    let slot_count = cursor.read_u32()?;
    debug!("LBL1: {} hash slots", slot_count);

    let mut labels = Vec::new();
    for slot in 0..slot_count {
        let label_count = cursor.read_u32()?;
        let label_offset = cursor.read_u32()?;
        if label_count == 0 {
            continue;
        }

        let target = utils::resolve_offset(body_start, label_offset, cursor.len())?;
        trace!("LBL1 slot {}: {} labels at {:#x}", slot, label_count, target);
        cursor.detour(target, |c| {
            for _ in 0..label_count {
                labels.push(read_label(c)?);
            }
            Ok(())
        })?;
    }

    debug!("LBL1: {} labels decoded", labels.len());
    Ok(labels)
}

fn read_label(cursor: &mut Cursor<'_>) -> Result<Label> {
    let len = cursor.read_u8()?;
    let name = cursor.read_text(len as usize)?;
    let message_index = cursor.read_u32()?;
    trace!("Label {:?} -> message {}", name, message_index);
    Ok(Label {
        name,
        message_index,
    })
}
