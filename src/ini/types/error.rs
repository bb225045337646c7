//! Custom error types for the inidoc crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum IniError {
    /// The configured file could not be opened for reading.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file stream went bad while reading.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The serialized output could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The backup rotation or final rename of the output file failed.
    /// The pre-existing file is preserved on a best-effort basis.
    #[error("failed to replace {}: {source}", path.display())]
    Replace {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A stored value could not be parsed as an integer.
    #[error("invalid integer value: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    /// A binary buffer length would overflow the encoded-size arithmetic.
    #[error("binary buffer length out of range")]
    InvalidArgument,

    /// A stored binary string does not have the expected encoded length.
    #[error("invalid encoded size: expected {expected} characters, found {found}")]
    InvalidDataSize { expected: usize, found: usize },

    /// A checksum validation failed, indicating a corrupted stored value.
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    BadChecksum { expected: u8, actual: u8 },

    /// A binary read found no stored value under the requested key.
    #[error("no stored value to decode")]
    ReadError,
}

/// A convenience `Result` type alias using the crate's `IniError` type.
pub type Result<T> = std::result::Result<T, IniError>;
