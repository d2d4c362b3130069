//! Utility functions for payload decoding and string conversion.

use crate::error::{RegistryError, Result};
use encoding_rs::UTF_16LE;

/// Decodes a `hex:`-style payload into raw bytes.
///
/// The payload is a comma-separated list of two-digit hex bytes; Wine also
/// inserts spaces and line-wrap indentation around the commas. Commas and all
/// whitespace are stripped before the digits are paired.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidHexData`] if the remaining digits are not
/// valid hexadecimal or their count is odd.
pub fn decode_hex_bytes(body: &str, line: usize) -> Result<Vec<u8>> {
    let digits: String = body
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    hex::decode(&digits).map_err(|_| RegistryError::invalid_hex_data(line, body))
}

/// Decodes UTF-16LE bytes into a string, stripping all NUL characters.
///
/// Wine stores `hex(2)`/`hex(7)` payloads as NUL-terminated UTF-16LE. NULs
/// are stripped globally, so MULTI_SZ sub-string boundaries are lost and the
/// decoded text is the concatenation of the sub-strings.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidUtf16`] if the byte count is odd (UTF-16
/// requires 2-byte units) or the data contains invalid UTF-16 sequences.
pub fn decode_utf16le(data: &[u8], line: usize) -> Result<String> {
    if data.is_empty() {
        return Ok(String::new());
    }

    if data.len() % 2 != 0 {
        return Err(RegistryError::InvalidUtf16 { line });
    }

    let (decoded, _encoding, had_errors) = UTF_16LE.decode(data);

    if had_errors {
        return Err(RegistryError::InvalidUtf16 { line });
    }

    Ok(decoded.replace('\0', ""))
}

/// Undoes registry string escapes in a quoted value body.
///
/// Substitutions are applied in a fixed order: `\"`, `\\`, then the
/// control-character escapes `\n`, `\r`, `\t`. Each pass rewrites the result
/// of the previous one, matching how Wine-generated files round-trip in
/// practice.
pub fn unescape_string(s: &str) -> String {
    s.replace("\\\"", "\"")
        .replace("\\\\", "\\")
        .replace("\\n", "\n")
        .replace("\\r", "\r")
        .replace("\\t", "\t")
}
