//! Text format layer for INI documents.
//!
//! This module bridges between raw line sequences and the in-memory
//! [`Document`](crate::ini::types::models::Document) model.
//!
//! # Module Organization
//!
//! - [`parser`]: consumes text lines and populates a document
//! - [`writer`]: renders a document back into text
//!
//! Both halves are pure: file I/O and byte-level transcoding live in
//! [`file`](crate::ini::file), which feeds decoded lines in and writes
//! rendered text out.

pub mod parser;
pub mod writer;
