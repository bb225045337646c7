use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use encoding_rs::UTF_8;
use log::{debug, info, warn};
use tempfile::NamedTempFile;

use super::codec::binary;
use super::format::{parser, writer};
use super::types::error::{IniError, Result};
use super::types::models::{Document, EntryState};

/// The facade over one live [`Document`] bound to a file path.
///
/// All reads and writes operate on the in-memory document; nothing touches
/// the disk until [`load`](IniFile::load), [`reload`](IniFile::reload), or
/// [`flush`](IniFile::flush) is called. The document is owned exclusively by
/// this instance and replaced wholesale on load.
///
/// Read accessors never fail: an absent or deleted entry collapses to the
/// supplied default, indistinguishable from one another. Delete accessors
/// report their outcome as a boolean. Only load/reload/flush (and the binary
/// accessors, which carry a codec) surface hard errors.
#[derive(Debug)]
pub struct IniFile {
    path: PathBuf,
    doc: Document,
}

impl IniFile {
    /// Binds an empty document to `path` without touching the disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            doc: Document::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Points the facade at a different file. The in-memory document is kept;
    /// the next flush writes it to the new path.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    /// Read-only view of the underlying document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Clears the document and parses it afresh from the configured path.
    ///
    /// An empty file is valid and yields an empty document; only an I/O
    /// fault is an error.
    pub fn load(&mut self) -> Result<()> {
        self.doc.clear();
        self.parse_from_disk()
    }

    /// Parses the configured path over the current document without clearing.
    ///
    /// File content overwrites matching in-memory entries; in-memory-only
    /// additions not yet flushed survive untouched.
    pub fn reload(&mut self) -> Result<()> {
        self.parse_from_disk()
    }

    fn parse_from_disk(&mut self) -> Result<()> {
        info!("Loading {}", self.path.display());
        let lines = read_lines(&self.path)?;
        parser::parse_into(&mut self.doc, &lines);
        debug!(
            "Parsed {} lines into {} section declarations",
            lines.len(),
            self.doc.section_count()
        );
        Ok(())
    }

    /// Serializes the document and atomically replaces the configured path,
    /// rotating the previous content to `<path>.old`.
    pub fn flush(&self) -> Result<()> {
        info!("Flushing {}", self.path.display());
        let contents = writer::render(&self.doc);
        replace_file(&self.path, &contents)
    }

    /// Returns the stored value if the key exists and is not deleted,
    /// otherwise `default`. Never fails.
    pub fn read_string(&self, section: &str, key: &str, default: &str) -> String {
        self.get(section, key)
            .map_or_else(|| default.to_owned(), str::to_owned)
    }

    fn get(&self, section: &str, key: &str) -> Option<&str> {
        let key = self.doc.section(section)?.key(key)?;
        key.state.is_active().then_some(key.value.as_str())
    }

    /// Integer variant of [`read_string`](IniFile::read_string): the default
    /// is formatted to decimal, looked up, and the result parsed back.
    ///
    /// A stored value that is not a well-formed integer is an error, unlike
    /// the string accessor which never fails.
    pub fn read_int(&self, section: &str, key: &str, default: i64) -> Result<i64> {
        Ok(self
            .read_string(section, key, &default.to_string())
            .parse()?)
    }

    /// Idempotent upsert: creates the section and/or key if absent, appending
    /// each to its declaration order exactly once, revives both from
    /// deletion, and sets the value.
    pub fn write_string(&mut self, section: &str, key: &str, value: &str) {
        let section_entry = self.doc.section_mut(section);
        let register_section = !section_entry.registered;
        section_entry.registered = true;
        section_entry.state = EntryState::Active;

        let key_entry = section_entry.key_mut(key);
        key_entry.value = value.to_owned();
        key_entry.state = EntryState::Active;
        let register_key = !key_entry.registered;
        key_entry.registered = true;

        if register_key {
            section_entry.push_key_order(key);
        }
        if register_section {
            self.doc.push_section_order(section);
        }
    }

    pub fn write_int(&mut self, section: &str, key: &str, value: i64) {
        self.write_string(section, key, &value.to_string());
    }

    /// Marks the key deleted, keeping its slot and comment for a possible
    /// re-registration. Returns false if the section or key does not exist.
    pub fn delete_key(&mut self, section: &str, key: &str) -> bool {
        let Some(section) = self.doc.section_mut_existing(section) else {
            return false;
        };
        let Some(key) = section.key_mut_existing(key) else {
            return false;
        };
        key.state = EntryState::Deleted;
        true
    }

    /// Marks the section deleted and drops all its keys immediately.
    /// Returns false if the section does not exist.
    pub fn delete_section(&mut self, section: &str) -> bool {
        match self.doc.section_mut_existing(section) {
            Some(section) => {
                section.mark_deleted();
                true
            }
            None => false,
        }
    }

    /// Attaches comment text to be emitted ahead of a declaration.
    ///
    /// An empty `key` attaches the text to the key named `""` inside
    /// `section`; any other `key` attaches it to the section header itself.
    /// Entries are created as needed but not registered in declaration
    /// order, so a comment alone does not make a section or key flushable.
    ///
    /// Every line of `text` should start with `;` or `#` (or be blank) and
    /// end with a newline; the text is reproduced verbatim on flush.
    pub fn set_comment(&mut self, section: &str, key: &str, text: &str) {
        let section_entry = self.doc.section_mut(section);
        if key.is_empty() {
            section_entry.key_mut(key).comment = text.to_owned();
        } else {
            section_entry.comment = text.to_owned();
        }
    }

    /// Number of section declarations, deleted and redeclared ones included.
    pub fn section_count(&self) -> usize {
        self.doc.section_count()
    }

    /// Number of key declarations in the section, deleted and redeclared
    /// ones included; 0 if the section is absent.
    pub fn key_count(&self, section: &str) -> usize {
        self.doc.section(section).map_or(0, |s| s.key_count())
    }

    /// Encodes `data` as a hex-with-checksum string value under the key.
    pub fn write_binary(&mut self, section: &str, key: &str, data: &[u8]) -> Result<()> {
        let encoded = binary::encode(data)?;
        self.write_string(section, key, &encoded);
        Ok(())
    }

    /// Decodes a buffer of `len` bytes previously stored with
    /// [`write_binary`](IniFile::write_binary).
    ///
    /// An absent, deleted, or empty value is [`IniError::ReadError`]; a
    /// value of the wrong encoded length is [`IniError::InvalidDataSize`];
    /// a corrupted value under `verify_checksum` is
    /// [`IniError::BadChecksum`].
    pub fn read_binary(
        &self,
        section: &str,
        key: &str,
        len: usize,
        verify_checksum: bool,
    ) -> Result<Vec<u8>> {
        let stored = self.read_string(section, key, "");
        if stored.is_empty() {
            return Err(IniError::ReadError);
        }
        binary::decode(&stored, len, verify_checksum)
    }
}

/// Reads the file and decodes it into terminator-free lines.
///
/// Bytes are decoded as UTF-8 with malformed sequences replaced rather than
/// aborting the read, so a file with stray bytes still loads.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let mut file = fs::File::open(path).map_err(|source| IniError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| IniError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let (text, _, had_errors) = UTF_8.decode(&bytes);
    if had_errors {
        warn!(
            "Malformed UTF-8 in {}, offending sequences replaced",
            path.display()
        );
    }
    Ok(text.lines().map(str::to_owned).collect())
}

/// Writes `contents` to a temporary file next to `path`, rotates the current
/// file to `<path>.old`, and moves the temporary into place.
///
/// The final move is an atomic rename where the platform supports one. The
/// rotation step is best-effort: if the rename to the backup fails, the
/// current file is removed instead so the final move can land. Between those
/// two steps a crash can lose both the original and the backup; callers that
/// cannot tolerate this should keep their own copies.
fn replace_file(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| IniError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tmp.write_all(contents.as_bytes())
        .map_err(|source| IniError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    if path.exists() {
        let backup = backup_path(path);
        // A stale backup from the previous flush gets overwritten.
        let _ = fs::remove_file(&backup);
        if let Err(e) = fs::rename(path, &backup) {
            warn!(
                "Backup rotation for {} failed ({}), dropping the old file",
                path.display(),
                e
            );
            let _ = fs::remove_file(path);
        }
    }

    tmp.persist(path).map_err(|e| IniError::Replace {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

/// `<path>.old`, the rotation target for the previous file content.
fn backup_path(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_owned();
    raw.push(".old");
    PathBuf::from(raw)
}
