//! Error types for registry parsing operations.
//!
//! Lenient parsing never surfaces these errors; they are reported by
//! [`parse_strict`](crate::parse_strict) and by the file-reading entry point
//! [`parse_file`](crate::parse_file).

use std::io;
use thiserror::Error;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur while reading or parsing a registry file.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// I/O error occurred while reading the registry file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A `dword:`/`qword:` body contained invalid hexadecimal digits.
    #[error("invalid integer body {body:?} on line {line}")]
    InvalidInteger {
        /// 1-based line number of the value line.
        line: usize,
        /// The hex digits that failed to parse.
        body: String,
    },

    /// A `hex:`-style payload contained invalid digits or an odd digit count.
    #[error("invalid hex payload {body:?} on line {line}")]
    InvalidHexData {
        /// 1-based line number of the value line.
        line: usize,
        /// The payload that failed to decode.
        body: String,
    },

    /// A `hex(2):`/`hex(7):` payload was not valid UTF-16LE.
    #[error("invalid UTF-16 payload on line {line}")]
    InvalidUtf16 {
        /// 1-based line number of the value line.
        line: usize,
    },
}

impl RegistryError {
    /// Creates an invalid integer error for a `dword:`/`qword:` body.
    ///
    /// # Arguments
    ///
    /// * `line` - 1-based line number of the offending value line
    /// * `body` - The hex digits that failed to parse
    pub fn invalid_integer(line: usize, body: &str) -> Self {
        Self::InvalidInteger {
            line,
            body: body.to_string(),
        }
    }

    /// Creates an invalid hex payload error.
    ///
    /// # Arguments
    ///
    /// * `line` - 1-based line number of the offending value line
    /// * `body` - The payload that failed to decode
    pub fn invalid_hex_data(line: usize, body: &str) -> Self {
        Self::InvalidHexData {
            line,
            body: body.to_string(),
        }
    }
}
