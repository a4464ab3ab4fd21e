//! Builders for synthetic MSBT buffers used by the integration tests.
#![allow(dead_code)]

use msbt_reader::ByteOrder;

/// Appends `u16`/`u32` values in a chosen byte order.
pub struct Writer {
    pub order: ByteOrder,
    pub buf: Vec<u8>,
}

impl Writer {
    pub fn new(order: ByteOrder) -> Self {
        Self { order, buf: Vec::new() }
    }

    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    pub fn u16(&mut self, v: u16) -> &mut Self {
        match self.order {
            ByteOrder::BigEndian => self.buf.extend_from_slice(&v.to_be_bytes()),
            ByteOrder::LittleEndian => self.buf.extend_from_slice(&v.to_le_bytes()),
        }
        self
    }

    pub fn u32(&mut self, v: u32) -> &mut Self {
        match self.order {
            ByteOrder::BigEndian => self.buf.extend_from_slice(&v.to_be_bytes()),
            ByteOrder::LittleEndian => self.buf.extend_from_slice(&v.to_le_bytes()),
        }
        self
    }

    pub fn bytes(&mut self, b: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(b);
        self
    }

    /// Pads with zeros up to absolute length `len`.
    pub fn pad_to(&mut self, len: usize) -> &mut Self {
        assert!(self.buf.len() <= len, "already past {}", len);
        self.buf.resize(len, 0);
        self
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// Encodes `text` as UTF-16 units in `order`, without terminator.
pub fn utf16(text: &str, order: ByteOrder) -> Vec<u8> {
    text.encode_utf16()
        .flat_map(|unit| match order {
            ByteOrder::BigEndian => unit.to_be_bytes(),
            ByteOrder::LittleEndian => unit.to_le_bytes(),
        })
        .collect()
}

/// Builds a whole MSBT file from raw section bodies.
pub struct MsbtBuilder {
    order: ByteOrder,
    sections: Vec<([u8; 4], Vec<u8>)>,
    section_count: Option<u16>,
    declared_size: Option<u32>,
    reserved_fill: u8,
}

impl MsbtBuilder {
    pub fn new(order: ByteOrder) -> Self {
        Self {
            order,
            sections: Vec::new(),
            section_count: None,
            declared_size: None,
            reserved_fill: 0,
        }
    }

    pub fn section(mut self, tag: &[u8; 4], body: Vec<u8>) -> Self {
        self.sections.push((*tag, body));
        self
    }

    pub fn section_count(mut self, count: u16) -> Self {
        self.section_count = Some(count);
        self
    }

    pub fn declared_size(mut self, size: u32) -> Self {
        self.declared_size = Some(size);
        self
    }

    /// Fills every reserved header byte with `fill` instead of zero.
    pub fn reserved_fill(mut self, fill: u8) -> Self {
        self.reserved_fill = fill;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut body = Writer::new(self.order);
        for (tag, data) in &self.sections {
            body.bytes(tag).u32(data.len() as u32).bytes(&[self.reserved_fill; 8]);
            body.bytes(data);
            let aligned = body.buf.len().next_multiple_of(16);
            body.buf.resize(aligned, 0xAB);
        }

        let total = 0x20 + body.buf.len();
        let mut w = Writer::new(self.order);
        w.bytes(b"MsgStdBn")
            .bytes(&self.order.marker())
            .bytes(&[self.reserved_fill; 2])
            .bytes(&[self.reserved_fill; 2])
            .u16(self.section_count.unwrap_or(self.sections.len() as u16))
            .bytes(&[self.reserved_fill; 2])
            .u32(self.declared_size.unwrap_or(total as u32))
            .bytes(&[self.reserved_fill; 10]);
        w.bytes(&body.buf);
        w.finish()
    }
}

/// `LBL1` body with labels laid out back to back after the slot array.
pub fn label_body(order: ByteOrder, slots: &[&[(&str, u32)]]) -> Vec<u8> {
    let table_len = 4 + slots.len() * 8;
    let mut entries = Writer::new(order);
    let mut w = Writer::new(order);
    w.u32(slots.len() as u32);
    for slot in slots {
        w.u32(slot.len() as u32).u32((table_len + entries.buf.len()) as u32);
        for (name, index) in *slot {
            entries.u8(name.len() as u8).bytes(name.as_bytes()).u32(*index);
        }
    }
    w.bytes(&entries.buf);
    w.finish()
}

/// `TXT2` body with NUL-terminated UTF-16 messages after the offset array.
pub fn text_body(order: ByteOrder, messages: &[&str]) -> Vec<u8> {
    let raw: Vec<Vec<u8>> = messages.iter().map(|m| utf16(m, order)).collect();
    text_body_raw(order, &raw)
}

/// `TXT2` body from already encoded units; a `00 00` terminator is appended.
pub fn text_body_raw(order: ByteOrder, messages: &[Vec<u8>]) -> Vec<u8> {
    let table_len = 4 + messages.len() * 4;
    let mut payload = Vec::new();
    let mut w = Writer::new(order);
    w.u32(messages.len() as u32);
    for message in messages {
        w.u32((table_len + payload.len()) as u32);
        payload.extend_from_slice(message);
        payload.extend_from_slice(&[0, 0]);
    }
    w.bytes(&payload);
    w.finish()
}

/// `ATR1` body; when `size` is zero no offset table is written.
pub fn attribute_body(order: ByteOrder, size: u32, blobs: &[Vec<u8>]) -> Vec<u8> {
    let mut w = Writer::new(order);
    w.u32(blobs.len() as u32).u32(size);
    if size == 0 {
        return w.finish();
    }
    let table_len = 8 + blobs.len() * 4;
    for i in 0..blobs.len() {
        w.u32((table_len + i * size as usize) as u32);
    }
    for blob in blobs {
        assert_eq!(blob.len(), size as usize);
        w.bytes(blob);
    }
    w.finish()
}
