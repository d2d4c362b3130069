//! Registry value representation and the value-line grammar.

use crate::error::{RegistryError, Result};
use crate::utils::{decode_hex_bytes, decode_utf16le, unescape_string};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Registry value data types recognized by the text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueType {
    /// String (`"..."` or bare text).
    Sz,

    /// String with environment variables (`hex(2):`).
    ExpandSz,

    /// Multiple strings (`hex(7):`).
    MultiSz,

    /// 32-bit integer (`dword:`).
    Dword,

    /// 64-bit integer (`qword:`).
    Qword,

    /// Binary data (`hex:`).
    Binary,
}

impl ValueType {
    /// Returns the `REG_*` name of this value type.
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Sz => "REG_SZ",
            ValueType::ExpandSz => "REG_EXPAND_SZ",
            ValueType::MultiSz => "REG_MULTI_SZ",
            ValueType::Dword => "REG_DWORD",
            ValueType::Qword => "REG_QWORD",
            ValueType::Binary => "REG_BINARY",
        }
    }
}

/// Parsed registry value data.
///
/// The variant fixes the value type, so a type tag can never disagree with
/// the shape of the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueData {
    /// String value.
    String(String),

    /// Expandable string value.
    ExpandString(String),

    /// Multi-string value, decoded as one string with the NUL separators
    /// stripped. The original sub-string segmentation is not preserved.
    MultiString(String),

    /// 32-bit integer.
    Dword(u32),

    /// 64-bit integer.
    Qword(u64),

    /// Binary data.
    Binary(Vec<u8>),
}

impl ValueData {
    /// Returns the type tag for this payload.
    pub fn value_type(&self) -> ValueType {
        match self {
            ValueData::String(_) => ValueType::Sz,
            ValueData::ExpandString(_) => ValueType::ExpandSz,
            ValueData::MultiString(_) => ValueType::MultiSz,
            ValueData::Dword(_) => ValueType::Dword,
            ValueData::Qword(_) => ValueType::Qword,
            ValueData::Binary(_) => ValueType::Binary,
        }
    }

    /// Returns the payload as a string slice for the three string kinds.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ValueData::String(s) | ValueData::ExpandString(s) | ValueData::MultiString(s) => {
                Some(s)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ValueData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueData::String(s) | ValueData::ExpandString(s) | ValueData::MultiString(s) => {
                f.write_str(s)
            }
            ValueData::Dword(d) => write!(f, "{} (0x{:08X})", d, d),
            ValueData::Qword(q) => write!(f, "{} (0x{:016X})", q, q),
            ValueData::Binary(b) => write!(f, "{:02X?}", b),
        }
    }
}

/// A named registry value attached to a key.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegistryValue {
    /// Value name. Empty for a key's default (`@`) value.
    pub name: String,

    /// Typed payload.
    pub data: ValueData,
}

impl RegistryValue {
    /// Returns the value data type.
    pub fn value_type(&self) -> ValueType {
        self.data.value_type()
    }
}

/// Strips one pair of surrounding double quotes, if present.
fn strip_quotes(s: &str) -> Option<&str> {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        Some(&s[1..s.len() - 1])
    } else {
        None
    }
}

/// Parses a single `name=value` line.
///
/// Returns `Ok(None)` when the line contains no `=`. Payload decode failures
/// are reported per value so the caller can either skip the value (lenient
/// mode) or abort the parse (strict mode).
pub(crate) fn parse_value_line(line: &str, line_no: usize) -> Result<Option<RegistryValue>> {
    let Some((raw_name, raw_body)) = line.split_once('=') else {
        return Ok(None);
    };

    let name = raw_name.trim();
    let name = strip_quotes(name).unwrap_or(name);
    let body = raw_body.trim();

    // The default value (`@`) is only recognized with a quoted string body;
    // other encodings fall through to generic parsing under the literal name.
    if name == "@" {
        if let Some(inner) = strip_quotes(body) {
            return Ok(Some(RegistryValue {
                name: String::new(),
                data: ValueData::String(unescape_string(inner)),
            }));
        }
    }

    let data = if let Some(digits) = body.strip_prefix("dword:") {
        let raw = u32::from_str_radix(digits, 16)
            .map_err(|_| RegistryError::invalid_integer(line_no, digits))?;
        ValueData::Dword(raw)
    } else if let Some(digits) = body.strip_prefix("qword:") {
        let raw = u64::from_str_radix(digits, 16)
            .map_err(|_| RegistryError::invalid_integer(line_no, digits))?;
        ValueData::Qword(raw)
    } else if let Some(payload) = body.strip_prefix("hex:") {
        ValueData::Binary(decode_hex_bytes(payload, line_no)?)
    } else if let Some(payload) = body.strip_prefix("hex(2):") {
        let bytes = decode_hex_bytes(payload, line_no)?;
        ValueData::ExpandString(decode_utf16le(&bytes, line_no)?)
    } else if let Some(payload) = body.strip_prefix("hex(7):") {
        let bytes = decode_hex_bytes(payload, line_no)?;
        ValueData::MultiString(decode_utf16le(&bytes, line_no)?)
    } else if let Some(inner) = strip_quotes(body) {
        ValueData::String(unescape_string(inner))
    } else {
        // Fallback for unquoted or unrecognized forms
        ValueData::String(body.to_string())
    };

    Ok(Some(RegistryValue {
        name: name.to_string(),
        data,
    }))
}
