//! Line-oriented parser populating the document model.
//!
//! The parser makes a single forward pass with no lookahead. Comment and
//! blank lines accumulate verbatim (original whitespace and terminators
//! included) until the next section header or key assignment claims them;
//! whatever is left at end of input becomes the document's trailing comment.

use log::debug;

use crate::ini::types::models::{Document, EntryState, ROOT_SECTION};
use crate::ini::utils;

/// Parses a sequence of decoded text lines into `doc`.
///
/// Lines are expected without their terminators. The document is updated in
/// place: parsing over a non-empty document merges, with file content
/// overwriting matching entries (callers clear first for a full reload).
///
/// Malformed lines (non-empty, not a comment, no `=`, not a header) are
/// skipped silently. Parsing itself cannot fail; I/O faults are the
/// caller's concern.
pub fn parse_into<I>(doc: &mut Document, lines: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut current_section = ROOT_SECTION.to_owned();
    let mut pending = String::new();

    for raw in lines {
        let raw = raw.as_ref();
        let line = utils::trim(raw);

        if line.is_empty() {
            // Blank line, keep it verbatim for the next declaration.
            pending.push_str(raw);
            pending.push('\n');
            continue;
        }

        if line.starts_with(';') || line.starts_with('#') {
            pending.push_str(raw);
            pending.push('\n');
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            current_section = line[1..line.len() - 1].to_owned();
            let section = doc.section_mut(&current_section);
            section.registered = true;
            section.comment = std::mem::take(&mut pending);
            // Duplicate headers produce duplicate order entries; the section
            // object itself is shared. A deleted section is not revived here.
            doc.push_section_order(current_section.clone());
            continue;
        }

        if let Some((name, value)) = line.split_once('=') {
            let name = utils::trim(name);
            let value = utils::trim_value(value);
            let section = doc.section_mut(&current_section);
            let key = section.key_mut(name);
            key.value = value.to_owned();
            key.state = EntryState::Active;
            key.registered = true;
            key.comment = std::mem::take(&mut pending);
            section.push_key_order(name);
            continue;
        }

        debug!("Skipping malformed line: {:?}", raw);
    }

    doc.trailing_comment = pending;
}
