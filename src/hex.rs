//! Hexadecimal text to byte conversion with typed errors.
//! Uses the hex crate for the nibble work and maps its failures into
//! the library error type.

use crate::error::{Error, Result};

/// Decode an even-length string of `[0-9a-fA-F]` into bytes, high nibble
/// first. Odd length or a non-hex character is `InvalidEncoding`.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(::hex::decode(text)?)
}

/// Encode bytes as lowercase hex, two digits per byte.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Decode exactly 32 bytes of key material from a 64-character hex string.
pub fn decode_key(text: &str) -> Result<[u8; 32]> {
    let bytes = decode(text)?;
    let len = bytes.len();
    bytes.try_into().map_err(|_| {
        Error::InvalidEncoding(format!("expected 32 bytes (64 hex chars), got {len} bytes"))
    })
}
