//! Registry key nodes and tree navigation.

use crate::value::RegistryValue;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node in the parsed registry tree.
///
/// Each key exclusively owns its values and subkeys. Queries always walk from
/// the root toward a leaf, so no parent links are kept. Keys are created
/// lazily by the parser, including intermediate ancestors that never had an
/// explicit header line of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegistryKey {
    path: String,
    values: HashMap<String, RegistryValue>,
    subkeys: HashMap<String, RegistryKey>,
}

impl RegistryKey {
    pub(crate) fn new(path: String) -> Self {
        Self {
            path,
            values: HashMap::new(),
            subkeys: HashMap::new(),
        }
    }

    /// Returns the fully qualified key path, segments joined with single
    /// backslashes, case-preserving as written in the source.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the final path segment.
    pub fn name(&self) -> &str {
        self.path.rsplit('\\').next().unwrap_or(&self.path)
    }

    /// Looks up an immediate subkey by its path segment. Exact match,
    /// case-sensitive.
    pub fn subkey(&self, name: &str) -> Option<&RegistryKey> {
        self.subkeys.get(name)
    }

    /// Looks up a value by name. The empty string addresses the key's
    /// default (`@`) value.
    pub fn value(&self, name: &str) -> Option<&RegistryValue> {
        self.values.get(name)
    }

    /// Returns all immediate subkeys, in map order.
    pub fn subkeys(&self) -> Vec<&RegistryKey> {
        self.subkeys.values().collect()
    }

    /// Returns all values of this key, in map order.
    pub fn values(&self) -> Vec<&RegistryValue> {
        self.values.values().collect()
    }

    /// Returns the number of immediate subkeys.
    pub fn subkey_count(&self) -> usize {
        self.subkeys.len()
    }

    /// Returns the number of values.
    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// Inserts a value, replacing any earlier value with the same name.
    pub(crate) fn insert_value(&mut self, value: RegistryValue) {
        self.values.insert(value.name.clone(), value);
    }

    /// Returns the subkey for `segment`, creating it with this key's path
    /// extended by the segment if absent.
    pub(crate) fn subkey_or_create(&mut self, segment: &str) -> &mut RegistryKey {
        self.subkeys
            .entry(segment.to_string())
            .or_insert_with(|| RegistryKey::new(format!("{}\\{}", self.path, segment)))
    }
}
