//! # Wine Registry File Parser
//!
//! A parser for Wine-style Windows registry text files (`system.reg`,
//! `user.reg`, and regedit `.reg` exports) into an owned, queryable tree.
//!
//! ## Features
//!
//! - **Tolerant parsing**: banners, comments, and malformed lines are skipped
//!   the way Wine-generated files require; the lenient parse never fails
//! - **Type-safe values**: every value is a tagged [`ValueData`] variant, so
//!   a type tag can never disagree with its payload
//! - **Path lookups**: `find_key`/`find_value` resolve backslash-separated
//!   paths over the parse result
//! - **Strict mode**: opt-in failure on undecodable value payloads
//! - **No I/O in the core**: [`parse`] is a pure function of its input text;
//!   [`parse_file`] is a thin convenience wrapper
//!
//! ## File format
//!
//! Registry files are line-oriented:
//!
//! ```text
//! WINE REGISTRY Version 2
//! ;; All keys relative to \\Machine
//!
//! #arch=win64
//!
//! [Software\\KONAMI\\GITADORA] 1680000000
//! "InstallDir"="C:\\Games\\GITADORA"
//! "ResolutionWidth"=dword:00000780
//! "Blob"=hex:01,02,ff
//! @="default value"
//! ```
//!
//! Key headers are double-escaped (`\\` between segments); lookups use single
//! backslashes. Typed values use the `dword:`, `qword:`, `hex:`, `hex(2):`
//! (REG_EXPAND_SZ as UTF-16LE), and `hex(7):` (REG_MULTI_SZ) encodings.
//!
//! ## Examples
//!
//! ```
//! use winereg::{parse, ValueData, ValueType};
//!
//! let text = r#"
//! [Software\\Classes\\konaste.gitadora\\DefaultIcon]
//! @="C:\\Games\\GITADORA\\launcher.exe,0"
//! "#;
//!
//! let root = parse(text);
//!
//! // The empty name addresses the default (@) value
//! let icon = root
//!     .find_value(r"Software\Classes\konaste.gitadora\DefaultIcon", "")
//!     .unwrap();
//! assert_eq!(icon.value_type(), ValueType::Sz);
//! assert_eq!(icon.data, ValueData::String(r"C:\Games\GITADORA\launcher.exe,0".into()));
//! ```
//!
//! Reading straight from a Wine prefix:
//!
//! ```no_run
//! use winereg::parse_file;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let root = parse_file("/home/user/.wine/system.reg")?;
//!
//! for key in root.keys() {
//!     println!("{} ({} subkeys)", key.path(), key.subkey_count());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod registry;
pub mod utils;
pub mod value;

// Re-export main types for convenience
pub use error::{RegistryError, Result};
pub use key::RegistryKey;
pub use registry::{parse, parse_file, parse_strict, RegistryRoot};
pub use value::{RegistryValue, ValueData, ValueType};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
