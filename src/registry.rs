//! Registry file parsing and path-based lookup.

use crate::error::Result;
use crate::key::RegistryKey;
use crate::value::{parse_value_line, RegistryValue};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Format banner prefixes that carry no data.
const BANNERS: [&str; 3] = ["Windows Registry Editor", "REGEDIT4", "WINE REGISTRY"];

/// The parse result for one registry file.
///
/// Owns the whole key tree. Each parse produces a fresh, independent root
/// with no shared state, so lookups on one root never observe another parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegistryRoot {
    keys: HashMap<String, RegistryKey>,
}

impl RegistryRoot {
    /// Looks up a key by backslash-separated path, e.g.
    /// `Software\KONAMI\GITADORA`.
    ///
    /// Every segment must match exactly; `None` is returned as soon as any
    /// segment is absent.
    pub fn find_key(&self, key_path: &str) -> Option<&RegistryKey> {
        let mut segments = key_path.split('\\');
        let mut current = self.keys.get(segments.next()?)?;

        for segment in segments {
            current = current.subkey(segment)?;
        }

        Some(current)
    }

    /// Looks up a value by key path and value name.
    ///
    /// Returns `None` if the key or the value is absent. The empty value name
    /// addresses the key's default (`@`) value.
    pub fn find_value(&self, key_path: &str, value_name: &str) -> Option<&RegistryValue> {
        self.find_key(key_path)?.value(value_name)
    }

    /// Looks up a top-level root key (hive) by name.
    pub fn key(&self, name: &str) -> Option<&RegistryKey> {
        self.keys.get(name)
    }

    /// Returns the top-level root keys, in map order.
    pub fn keys(&self) -> Vec<&RegistryKey> {
        self.keys.values().collect()
    }

    /// Returns the number of top-level root keys.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns the key for a header path, creating the full ancestor chain
    /// as needed.
    ///
    /// Header paths are double-escaped in the source text: segments are
    /// separated by a literal two-character `\\` sequence. Stored key paths
    /// use single backslashes.
    fn key_or_create(&mut self, header_path: &str) -> &mut RegistryKey {
        let mut segments = header_path.split("\\\\");
        // split() always yields at least one item
        let root_name = segments.next().unwrap_or_default();

        let mut current = self
            .keys
            .entry(root_name.to_string())
            .or_insert_with(|| RegistryKey::new(root_name.to_string()));

        for segment in segments {
            current = current.subkey_or_create(segment);
        }

        current
    }
}

/// Extracts the key path from a `[path]` header line.
///
/// Wine appends a modification timestamp after the closing bracket; anything
/// past the first `]` is ignored. An empty path is not a header.
fn key_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    let end = rest.find(']')?;
    if end == 0 {
        return None;
    }
    Some(&rest[..end])
}

/// Parses registry-file text into a tree, skipping lines it cannot interpret.
///
/// This is the lenient mode suited to real Wine prefixes: blank lines,
/// comments, format banners, and malformed or unrecognized lines are skipped,
/// and the parse itself never fails. Within a key, a later value with the
/// same name overwrites an earlier one.
///
/// # Examples
///
/// ```
/// use winereg::{parse, ValueData};
///
/// let text = r#"
/// [Software\\Vendor\\App]
/// "Count"=dword:0000002a
/// "#;
///
/// let root = parse(text);
/// let value = root.find_value(r"Software\Vendor\App", "Count").unwrap();
/// assert_eq!(value.data, ValueData::Dword(42));
/// ```
pub fn parse(content: &str) -> RegistryRoot {
    // Lenient mode handles every per-value error inline, so the shared pass
    // can only fail under strict mode.
    parse_lines(content, false).unwrap_or_default()
}

/// Parses registry-file text, failing on the first value whose payload
/// cannot be decoded.
///
/// Structurally unrecognized lines are still skipped exactly as in [`parse`];
/// only invalid `dword:`/`qword:` digits, malformed hex payloads, and invalid
/// UTF-16LE data are promoted to errors.
///
/// # Errors
///
/// Returns the error for the first undecodable value, including its line
/// number.
pub fn parse_strict(content: &str) -> Result<RegistryRoot> {
    parse_lines(content, true)
}

/// Reads a registry file and parses it leniently.
///
/// This is the only operation in the crate that performs I/O. Wine writes
/// `system.reg`/`user.reg` as UTF-8; stray bytes from other platform
/// encodings are replaced rather than rejected.
///
/// # Errors
///
/// Returns [`RegistryError::Io`](crate::RegistryError::Io) if the file cannot
/// be read.
///
/// # Examples
///
/// ```no_run
/// use winereg::parse_file;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let root = parse_file("/home/user/.wine/system.reg")?;
///
/// if let Some(value) = root.find_value(r"Software\KONAMI\GITADORA", "InstallDir") {
///     println!("install dir: {}", value.data);
/// }
/// # Ok(())
/// # }
/// ```
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<RegistryRoot> {
    info!("reading registry file");
    let bytes = fs::read(&path)?;
    let content = String::from_utf8_lossy(&bytes);

    let root = parse(&content);
    debug!(root_keys = root.key_count(), "parsed registry file");

    Ok(root)
}

/// Single linear pass over the lines, maintaining one current-key cursor.
fn parse_lines(content: &str, strict: bool) -> Result<RegistryRoot> {
    let mut root = RegistryRoot::default();
    let mut current_path: Option<&str> = None;

    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        let line_no = idx + 1;

        // Blank lines and comments
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        // Format banners
        if BANNERS.iter().any(|banner| line.starts_with(banner)) {
            continue;
        }

        if let Some(header) = key_header(line) {
            root.key_or_create(header);
            current_path = Some(header);
            continue;
        }

        if let Some(path) = current_path {
            if line.contains('=') {
                match parse_value_line(line, line_no) {
                    Ok(Some(value)) => {
                        root.key_or_create(path).insert_value(value);
                    }
                    Ok(None) => {}
                    Err(err) if strict => return Err(err),
                    Err(err) => {
                        debug!(line = line_no, error = %err, "skipping malformed value line");
                    }
                }
                continue;
            }
        }

        // Anything else: a value line before any key header, or an unknown
        // construct. Skipped for forward compatibility.
        debug!(line = line_no, "skipping unrecognized line");
    }

    Ok(root)
}
