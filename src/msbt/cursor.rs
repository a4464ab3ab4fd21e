//! Bounds-checked byte cursor over an in-memory MSBT buffer.
//!
//! All multi-byte reads honour the file's byte order, which is unknown
//! until the header's marker has been read. Reading a `u16`/`u32` before
//! [`Cursor::set_byte_order`] is a sequencing bug and fails with
//! [`MsbtError::UninitializedByteOrder`].

use log::trace;

use super::types::error::{MsbtError, Result};
use super::types::models::ByteOrder;

/// A linear reader over a borrowed byte buffer.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    byte_order: Option<ByteOrder>,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            byte_order: None,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes left between the current position and the end of the buffer.
    /// Zero when the cursor has been seeked past the end.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn byte_order(&self) -> Option<ByteOrder> {
        self.byte_order
    }

    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = Some(byte_order);
    }

    /// Moves to an absolute offset. Validity is checked by the next read.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn skip(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n);
    }

    /// Returns the next `n` bytes and advances past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(n)?;
        self.pos += n;
        Ok(bytes)
    }

    /// Returns the next `n` bytes without advancing.
    pub fn peek_bytes(&self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(MsbtError::OutOfBounds {
                offset: self.pos,
                requested: n,
                len: self.data.len(),
            })?;
        Ok(&self.data[self.pos..end])
    }

    /// Reads `n` bytes as single-byte-per-character text.
    ///
    /// Only used for section tags and label names, never for message text.
    pub fn read_text(&mut self, n: usize) -> Result<String> {
        let bytes = self.read_bytes(n)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let order = self.require_byte_order()?;
        Ok(order.read_u16(self.read_bytes(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let order = self.require_byte_order()?;
        Ok(order.read_u32(self.read_bytes(4)?))
    }

    /// Runs `f` with the cursor moved to `target`, then restores the
    /// previous position whether or not `f` succeeded.
    ///
    /// This is how offset tables are followed: the table itself is read
    /// sequentially, each entry's payload is read out of line.
    pub fn detour<T>(
        &mut self,
        target: usize,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let saved = self.pos;
        trace!("Detour {:#x} -> {:#x}", saved, target);
        self.seek(target);
        let result = f(self);
        self.seek(saved);
        result
    }

    fn require_byte_order(&self) -> Result<ByteOrder> {
        self.byte_order.ok_or(MsbtError::UninitializedByteOrder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_byte_reads_need_byte_order() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut cursor = Cursor::new(&data);
        assert!(matches!(cursor.read_u16(), Err(MsbtError::UninitializedByteOrder)));
        assert!(matches!(cursor.read_u32(), Err(MsbtError::UninitializedByteOrder)));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_u8().unwrap(), 0x01);
    }

    #[test]
    fn reads_follow_byte_order() {
        let data = [0x12, 0x34, 0x56, 0x78];

        let mut be = Cursor::new(&data);
        be.set_byte_order(ByteOrder::BigEndian);
        assert_eq!(be.read_u32().unwrap(), 0x1234_5678);

        let mut le = Cursor::new(&data);
        le.set_byte_order(ByteOrder::LittleEndian);
        assert_eq!(le.read_u16().unwrap(), 0x3412);
        assert_eq!(le.read_u16().unwrap(), 0x7856);
    }

    #[test]
    fn read_past_end_is_out_of_bounds() {
        let data = [0u8; 3];
        let mut cursor = Cursor::new(&data);
        cursor.set_byte_order(ByteOrder::LittleEndian);
        match cursor.read_u32() {
            Err(MsbtError::OutOfBounds { offset, requested, len }) => {
                assert_eq!((offset, requested, len), (0, 4, 3));
            }
            other => panic!("expected OutOfBounds, got {:?}", other),
        }

        cursor.seek(10);
        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.read_u8().is_err());
    }

    #[test]
    fn detour_restores_position() {
        let data = [0xAA, 0xBB, 0xCC, 0xDD];
        let mut cursor = Cursor::new(&data);
        cursor.skip(1);

        let byte = cursor.detour(3, |c| c.read_u8()).unwrap();
        assert_eq!(byte, 0xDD);
        assert_eq!(cursor.position(), 1);

        let failed = cursor.detour(100, |c| c.read_u8());
        assert!(failed.is_err());
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn read_text_is_byte_per_char() {
        let mut cursor = Cursor::new(b"LBL1rest");
        assert_eq!(cursor.read_text(4).unwrap(), "LBL1");
        assert_eq!(cursor.position(), 4);
    }
}
