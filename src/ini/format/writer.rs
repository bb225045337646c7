//! Serializer reconstructing text from the document model.

use crate::ini::types::models::Document;

/// Renders `doc` back into its full text form.
///
/// Sections are emitted in declaration order, keys in declaration order
/// within each section, with every stored comment reproduced verbatim ahead
/// of its declaration. Deleted sections and keys contribute their comment
/// text but suppress their header/assignment line, so a deleted key's
/// preceding comment still survives unless the owning section was deleted
/// (which already dropped its key table).
///
/// Parsing the rendered text yields an equivalent document, and rendering
/// that document again reproduces the text byte for byte.
pub fn render(doc: &Document) -> String {
    let mut out = String::new();

    for name in doc.section_order() {
        let Some(section) = doc.section(name) else {
            continue;
        };
        out.push_str(&section.comment);
        if !section.state.is_active() {
            continue;
        }
        out.push('[');
        out.push_str(name);
        out.push_str("]\n");
        for key_name in section.key_order() {
            let Some(key) = section.key(key_name) else {
                continue;
            };
            out.push_str(&key.comment);
            if key.state.is_active() {
                out.push_str(key_name);
                out.push('=');
                out.push_str(&key.value);
                out.push('\n');
            }
        }
    }

    out.push_str(&doc.trailing_comment);
    out
}
