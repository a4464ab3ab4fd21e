//! File format parsing layer for MSBT message tables.
//!
//! # Module Organization
//!
//! - [`header`]: Parses the fixed 32-byte container header
//! - [`sections`]: Walks section headers and dispatches on their tag
//! - [`labels`], [`attributes`], [`text`], [`styles`]: One decoder per section type
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌─────────────────┐
//! │  Header (0x20)  │ ← header::parse()
//! ├─────────────────┤
//! │  LBL1           │ ← labels::decode()      ┐
//! ├─────────────────┤                         │
//! │  ATR1           │ ← attributes::decode()  │ sections::parse()
//! ├─────────────────┤                         │
//! │  TXT2           │ ← text::decode()        │
//! ├─────────────────┤                         │
//! │  TSY1           │ ← styles::decode()      ┘
//! └─────────────────┘
//! ```

pub mod attributes;
pub mod header;
pub mod labels;
pub mod sections;
pub mod styles;
pub mod text;
