//! # inidoc
//!
//! An in-memory model and round-trip serializer for sectioned key/value
//! configuration files in the classic `[section]` / `key=value` text format.
//!
//! Parsing preserves interstitial comments, blank lines, and declaration
//! order; serializing reconstructs the file from the model. Deletion is
//! deferred (mark-then-flush), so deleted entries keep their position and
//! comments until the file is rewritten. Raw byte buffers can be stored as
//! values through a hex-with-checksum codec.
pub mod ini;

// Re-export the main types for convenience
pub use ini::{Document, EntryState, IniError, IniFile, Result, ROOT_SECTION};
