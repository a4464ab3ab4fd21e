//! MSBT container header parsing.
//!
//! The header is a fixed 32-byte block. Only the magic and the byte-order
//! marker are validated; reserved fields are skipped whatever they contain.

use log::{debug, info, trace};

use crate::msbt::cursor::Cursor;
use crate::msbt::types::{
    error::{MsbtError, Result},
    models::{ByteOrder, ContainerHeader},
};

pub const MAGIC: &[u8; 8] = b"MsgStdBn";
pub const HEADER_SIZE: usize = 0x20;

/// Parses the container header and establishes the cursor's byte order.
///
/// # Header Structure
/// ```text
/// 0x00 [8 bytes]  Magic "MsgStdBn"
/// 0x08 [2 bytes]  Byte-order marker (FE FF = BE, FF FE = LE)
/// 0x0A [2 bytes]  Reserved
/// 0x0C [2 bytes]  Reserved
/// 0x0E [2 bytes]  Section count (u16)
/// 0x10 [2 bytes]  Reserved
/// 0x12 [4 bytes]  Declared file size (u32)
/// 0x16 [10 bytes] Reserved
/// ```
///
/// On return the cursor sits at `0x20`, the first section header.
pub fn parse(cursor: &mut Cursor<'_>) -> Result<ContainerHeader> {
    info!("Parsing MSBT header");

    let magic = cursor.read_bytes(MAGIC.len())?;
    if magic != MAGIC {
        return Err(MsbtError::BadMagic {
            found: magic.to_vec(),
        });
    }

    let marker = cursor.read_bytes(2)?;
    let byte_order = ByteOrder::from_marker([marker[0], marker[1]])?;
    cursor.set_byte_order(byte_order);
    trace!("Byte-order marker {:02x?} -> {}", marker, byte_order);

    cursor.skip(2);
    cursor.skip(2);
    let section_count = cursor.read_u16()?;
    cursor.skip(2);
    let declared_file_size = cursor.read_u32()?;
    cursor.skip(10);

    if declared_file_size as usize != cursor.len() {
        debug!(
            "Declared file size {} differs from buffer length {}",
            declared_file_size,
            cursor.len()
        );
    }

    info!(
        "Header parsed: byte_order={}, sections={}, declared_size={} bytes",
        byte_order, section_count, declared_file_size
    );

    Ok(ContainerHeader {
        byte_order,
        section_count,
        declared_file_size,
    })
}
