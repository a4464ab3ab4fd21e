use std::fs;
use std::path::Path;

use log::{info, warn};

use super::cursor::Cursor;
use super::format::{self, sections::DecodedSections};
use super::types::error::{MsbtError, ParseWarning, Result};
use super::types::models::{Attributes, MsbtDocument};
use super::types::options::ParseOptions;

/// Decodes an MSBT file held in memory, using the default options.
///
/// Unknown section tags are rejected and an attribute count mismatch is
/// reported as a warning on the returned document.
///
/// # Errors
/// Returns an error if:
/// - The buffer does not start with the `MsgStdBn` magic
/// - The byte-order marker is not recognised
/// - A section tag has no decoder
/// - Any header, table or payload read runs past the end of the buffer
pub fn parse(data: &[u8]) -> Result<MsbtDocument> {
    parse_with_options(data, &ParseOptions::default())
}

/// Decodes an MSBT file held in memory.
pub fn parse_with_options(data: &[u8], options: &ParseOptions) -> Result<MsbtDocument> {
    info!("Parsing MSBT buffer ({} bytes)", data.len());
    let mut cursor = Cursor::new(data);

    let header = format::header::parse(&mut cursor)?;
    let decoded = format::sections::parse(&mut cursor, &header, options)?;
    let warnings = validate(&decoded, options)?;

    info!(
        "MSBT parsed: {} labels, {} messages, {} attributes, {} warnings",
        decoded.labels.len(),
        decoded.messages.len(),
        decoded.attribute_spans.len(),
        decoded.warnings.len() + warnings.len()
    );

    let DecodedSections {
        sections,
        labels,
        messages,
        attribute_size,
        attribute_spans,
        style_ids,
        warnings: mut all_warnings,
        ..
    } = decoded;
    all_warnings.extend(warnings);

    Ok(MsbtDocument {
        byte_order: header.byte_order,
        section_count: header.section_count,
        declared_file_size: header.declared_file_size,
        sections,
        labels,
        messages,
        attribute_size,
        attributes: Attributes::from_source(data, &attribute_spans),
        style_ids,
        warnings: all_warnings,
    })
}

/// Reads a whole file and decodes it with the default options.
pub fn read_file(path: impl AsRef<Path>) -> Result<MsbtDocument> {
    read_file_with_options(path, &ParseOptions::default())
}

/// Reads a whole file and decodes it.
///
/// # Errors
/// Returns [`MsbtError::Io`] if the file cannot be read, otherwise the same
/// errors as [`parse_with_options`].
pub fn read_file_with_options(
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<MsbtDocument> {
    let path = path.as_ref();
    info!("Opening MSBT file: {}", path.display());
    let data = fs::read(path)?;
    parse_with_options(&data, options)
}

/// Cross-checks the decoded tables once every section has been read.
fn validate(decoded: &DecodedSections, options: &ParseOptions) -> Result<Vec<ParseWarning>> {
    let mut warnings = Vec::new();

    if let Some(declared) = decoded.attribute_count
        && declared as usize != decoded.labels.len()
    {
        if options.strict_attribute_count {
            return Err(MsbtError::AttributeCountMismatch {
                declared,
                labels: decoded.labels.len(),
            });
        }
        warnings.push(ParseWarning::AttributeCountMismatch {
            declared,
            labels: decoded.labels.len(),
        });
    }

    if decoded.has_text {
        let messages = decoded.messages.len();
        warnings.extend(
            decoded
                .labels
                .iter()
                .filter(|label| label.message_index as usize >= messages)
                .map(|label| ParseWarning::LabelIndexOutOfRange {
                    name: label.name.clone(),
                    message_index: label.message_index,
                    messages,
                }),
        );
    }

    for warning in &warnings {
        warn!("{}", warning);
    }
    Ok(warnings)
}
