//! Codec layer for storing raw byte buffers as configuration values.
//!
//! # Submodules
//!
//! - [`binary`][]: hex-with-checksum encoding between byte buffers and
//!   ordinary string values

pub mod binary;
