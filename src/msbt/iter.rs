//! Iteration over labels joined with their message text and attributes.
//!
//! # Example
//! ```no_run
//! # let data = std::fs::read("strings.msbt").unwrap();
//! let document = msbt_reader::parse(&data).unwrap();
//! for entry in document.entries() {
//!     println!("{}: {}", entry.name, entry.text.unwrap_or("<missing>"));
//! }
//! ```

use std::slice::Iter;

use super::types::models::{Label, MsbtDocument};

/// One label with everything it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageEntry<'a> {
    pub name: &'a str,
    pub message_index: u32,
    /// `None` when the index points past the text table.
    pub text: Option<&'a str>,
    /// `None` when the file has no attributes for this message.
    pub attributes: Option<&'a [u8]>,
}

/// Iterator over [`MessageEntry`] values in label order.
///
/// Created by [`MsbtDocument::entries()`].
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    document: &'a MsbtDocument,
    labels: Iter<'a, Label>,
}

impl<'a> Entries<'a> {
    pub(crate) fn new(document: &'a MsbtDocument) -> Self {
        Self {
            document,
            labels: document.labels.iter(),
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = MessageEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let label = self.labels.next()?;
        let index = label.message_index as usize;
        Some(MessageEntry {
            name: &label.name,
            message_index: label.message_index,
            text: self.document.messages.get(index).map(String::as_str),
            attributes: self.document.attributes.get(index),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.labels.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}
