//! Core INI document module.

pub mod codec;
pub mod file;
pub mod format;
pub mod types;
mod utils;

pub use file::IniFile;
pub use types::error::{IniError, Result};
pub use types::models::{Document, EntryState, Key, Section, ROOT_SECTION};
