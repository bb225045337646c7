//! Hex-with-checksum encoding for binary configuration values.
//!
//! A buffer of `N` bytes is stored as `2*N + 2` hex characters: each byte as
//! two uppercase hex digits (high nibble first) in buffer order, followed by
//! one more two-digit pair holding the wrapping 8-bit sum of all data bytes.
//!
//! Decoding maps `'0'..='9'` to 0–9 and any other character through
//! `(10 + c - 'A') & 0xF` with no further validation: out-of-range characters
//! silently produce a wrapped nibble value rather than an error. Existing
//! stored values depend on this mapping, so it is kept as-is.

use log::trace;

use crate::ini::types::error::{IniError, Result};

/// Encodes a byte buffer into its stored string form.
///
/// Output length is exactly `2 * data.len() + 2` characters. Fails with
/// [`IniError::InvalidArgument`] if the buffer is large enough that the
/// encoded length arithmetic would overflow `usize`.
pub fn encode(data: &[u8]) -> Result<String> {
    // Encoded length plus a trailing terminator slot must fit in usize.
    data.len()
        .checked_mul(2)
        .and_then(|n| n.checked_add(3))
        .ok_or(IniError::InvalidArgument)?;

    let mut encoded = hex::encode_upper(data);
    let checksum = data.iter().fold(0u8, |sum, byte| sum.wrapping_add(*byte));
    encoded.push_str(&hex::encode_upper([checksum]));

    trace!("Encoded {} bytes, checksum {:#04x}", data.len(), checksum);
    Ok(encoded)
}

/// Decodes a stored string back into a buffer of `len` bytes.
///
/// The string must be exactly `2 * len + 2` characters long, otherwise
/// [`IniError::InvalidDataSize`] is returned. The trailing pair is decoded as
/// the expected checksum; if `verify_checksum` is set and the running sum of
/// the data bytes differs, [`IniError::BadChecksum`] is returned.
pub fn decode(text: &str, len: usize, verify_checksum: bool) -> Result<Vec<u8>> {
    let expected = encoded_len(len)?;
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != expected {
        return Err(IniError::InvalidDataSize {
            expected,
            found: chars.len(),
        });
    }

    let mut data = Vec::with_capacity(len);
    let mut sum = 0u8;
    for pair in chars[..2 * len].chunks_exact(2) {
        let byte = (char_to_nibble(pair[0]) << 4) | char_to_nibble(pair[1]);
        sum = sum.wrapping_add(byte);
        data.push(byte);
    }

    let stored = (char_to_nibble(chars[2 * len]) << 4) | char_to_nibble(chars[2 * len + 1]);
    trace!("Decoded {} bytes, checksum stored={:#04x}, computed={:#04x}", len, stored, sum);
    if verify_checksum && sum != stored {
        return Err(IniError::BadChecksum {
            expected: stored,
            actual: sum,
        });
    }

    Ok(data)
}

/// Encoded string length for a buffer of `len` bytes, guarding the
/// arithmetic against overflow.
fn encoded_len(len: usize) -> Result<usize> {
    len.checked_mul(2)
        .and_then(|n| n.checked_add(2))
        .ok_or(IniError::InvalidArgument)
}

/// Maps one character to its nibble value, wrapping out-of-range input.
fn char_to_nibble(c: char) -> u8 {
    if c.is_ascii_digit() {
        c as u8 - b'0'
    } else {
        (10u32.wrapping_add(c as u32).wrapping_sub('A' as u32) & 0xF) as u8
    }
}
