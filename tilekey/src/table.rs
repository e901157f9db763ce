use std::collections::btree_map::{BTreeMap, Entry};

use crate::key::SolidityKey;

/// Lookup table from solidity key to tile index (0-based column in the sheet).
///
/// Iteration, and therefore the serialized form, runs in ascending order of
/// key value. Consumers should only rely on lookup by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileIndexTable {
    entries: BTreeMap<SolidityKey, usize>,
}

impl TileIndexTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `tile` under `key` unless the key is already present.
    ///
    /// On collision the table is left unchanged and the stored index is
    /// returned.
    pub fn insert_first(&mut self, key: SolidityKey, tile: usize) -> Option<usize> {
        match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(tile);
                None
            }
            Entry::Occupied(slot) => Some(*slot.get()),
        }
    }

    pub fn get(&self, key: SolidityKey) -> Option<usize> {
        self.entries.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (SolidityKey, usize)> + '_ {
        self.entries.iter().map(|(&k, &v)| (k, v))
    }
}

#[cfg(feature = "serde")]
mod json {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Serialize};
    use serde_json::ser::{PrettyFormatter, Serializer};

    use super::TileIndexTable;
    use crate::error::TableError;
    use crate::key::SolidityKey;

    const INDENT: &[u8] = b"    ";

    impl Serialize for TileIndexTable {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_map(&self.entries)
        }
    }

    impl<'de> Deserialize<'de> for TileIndexTable {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let entries = BTreeMap::<SolidityKey, usize>::deserialize(deserializer)?;
            Ok(Self { entries })
        }
    }

    impl TileIndexTable {
        /// Render as a JSON object indented by four spaces, keys ascending.
        pub fn to_json(&self) -> Result<String, TableError> {
            let mut out = Vec::new();
            let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
            self.serialize(&mut ser)?;
            // serde_json only ever emits valid UTF-8
            Ok(String::from_utf8_lossy(&out).into_owned())
        }

        /// Parse a table previously written by [`TileIndexTable::to_json`].
        pub fn from_json(text: &str) -> Result<Self, TableError> {
            Ok(serde_json::from_str(text)?)
        }
    }
}
