//! Core data structures for the INI document model.
//!
//! This module defines the fundamental types used throughout the library:
//! - [`Document`]: the whole-file model, owning sections and their order
//! - [`Section`]: a named group of keys with declaration order
//! - [`Key`]: a single name/value pair with its attached comment
//! - [`EntryState`]: liveness marker implementing deferred deletion

use std::collections::HashMap;

/// Reserved name of the implicit section holding keys declared before any
/// `[name]` header. A literal `[]` header in a file maps to the same section.
pub const ROOT_SECTION: &str = "";

/// Liveness of a section or key entry.
///
/// Deletion is deferred: a `Deleted` entry keeps its slot in the mapping and
/// the order sequence so its comment and position survive, but the serializer
/// suppresses its header/assignment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryState {
    #[default]
    Active,
    Deleted,
}

impl EntryState {
    pub fn is_active(self) -> bool {
        matches!(self, EntryState::Active)
    }
}

/// A single name/value pair within a section.
#[derive(Debug, Default)]
pub struct Key {
    pub value: String,
    /// Verbatim comment/blank-line text preceding the assignment, original
    /// line terminators included.
    pub comment: String,
    pub state: EntryState,
    /// Whether this key has been explicitly declared. Distinguishes "never
    /// existed" from "exists with empty value" after an upsert created the
    /// entry as a side effect.
    pub registered: bool,
}

/// A named group of keys with separately tracked declaration order.
///
/// The order sequence may contain duplicate names if a key is redeclared;
/// the key mapping is shared, so the last write wins for value and comment
/// while the original position is preserved.
#[derive(Debug, Default)]
pub struct Section {
    keys: HashMap<String, Key>,
    key_order: Vec<String>,
    /// Verbatim comment text preceding the section header.
    pub comment: String,
    pub state: EntryState,
    pub registered: bool,
}

impl Section {
    pub fn key(&self, name: &str) -> Option<&Key> {
        self.keys.get(name)
    }

    pub fn key_mut_existing(&mut self, name: &str) -> Option<&mut Key> {
        self.keys.get_mut(name)
    }

    /// Upsert: returns a mutable handle to the named key, creating an
    /// unregistered `Active` entry if absent.
    pub fn key_mut(&mut self, name: &str) -> &mut Key {
        self.keys.entry(name.to_owned()).or_default()
    }

    /// Appends a name to the declaration order. Callers decide whether the
    /// append is unconditional (parser) or once-per-key (writes, guarded by
    /// [`Key::registered`]).
    pub fn push_key_order(&mut self, name: impl Into<String>) {
        self.key_order.push(name.into());
    }

    pub fn key_order(&self) -> &[String] {
        &self.key_order
    }

    pub fn key_count(&self) -> usize {
        self.key_order.len()
    }

    /// Marks the section deleted and drops its entire key table and key
    /// order immediately. Key-level comments are lost; the section's own
    /// comment is retained.
    pub fn mark_deleted(&mut self) {
        self.state = EntryState::Deleted;
        self.keys.clear();
        self.key_order.clear();
    }
}

/// The in-memory model of one configuration file.
///
/// Sections are owned exclusively by the document; the order sequence tracks
/// declaration order and may contain duplicates for redeclared sections.
/// Every order entry has a corresponding mapping entry (entries are only ever
/// tombstoned, never removed).
#[derive(Debug, Default)]
pub struct Document {
    sections: HashMap<String, Section>,
    section_order: Vec<String>,
    /// Comment/blank text after the last declaration in the file.
    pub trailing_comment: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_mut_existing(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// Upsert: returns a mutable handle to the named section, creating an
    /// unregistered `Active` entry if absent.
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_owned()).or_default()
    }

    /// Appends a name to the declaration order. Same contract as
    /// [`Section::push_key_order`].
    pub fn push_section_order(&mut self, name: impl Into<String>) {
        self.section_order.push(name.into());
    }

    pub fn section_order(&self) -> &[String] {
        &self.section_order
    }

    pub fn section_count(&self) -> usize {
        self.section_order.len()
    }

    /// Drops all sections, ordering, and the trailing comment.
    pub fn clear(&mut self) {
        self.sections.clear();
        self.section_order.clear();
        self.trailing_comment.clear();
    }
}
