//! The persisted jump document
//!
//! ```json
//! {
//!     "datetime": "2024-05-01 09:30:00",
//!     "lastPath": "/home/me/src/api",
//!     "prevPath": "/home/me",
//!     "namedPaths": { "api": "/home/me/src/api" },
//!     "histories": { "<blake3 of path>": "/home/me/src/api" }
//! }
//! ```
//!
//! `histories` keeps insertion order, which matters for matching. It is
//! written as an id-keyed object and read back in document order; a plain
//! array of paths is accepted as well.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::path::identify;

/// A user-assigned alias for a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedPath {
    pub name: String,
    pub path: String,
}

/// A directory the user has navigated into
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub id: String,
    pub path: String,
}

impl HistoryEntry {
    /// Creates an entry keyed by the identifier of `path`
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            id: identify(&path),
            path,
        }
    }
}

/// Ordered history entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histories(Vec<HistoryEntry>);

impl Histories {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Paths in insertion order, without ids
    pub fn paths(&self) -> Vec<String> {
        self.0.iter().map(|e| e.path.clone()).collect()
    }

    pub fn into_entries(self) -> Vec<HistoryEntry> {
        self.0
    }
}

impl Serialize for Histories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.id, &entry.path)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Histories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(HistoriesVisitor)
    }
}

struct HistoriesVisitor;

impl<'de> Visitor<'de> for HistoriesVisitor {
    type Value = Histories;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object of history ids to paths, or an array of paths")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((id, path)) = access.next_entry::<String, String>()? {
            entries.push(HistoryEntry { id, path });
        }
        Ok(Histories(entries))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(path) = access.next_element::<String>()? {
            entries.push(HistoryEntry::new(path));
        }
        Ok(Histories(entries))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Histories::default())
    }
}

/// Accepts an object of name to path, `null`, or an empty array.
///
/// Older data files written by other tools encode an empty map as `[]`.
fn named_paths<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct NamedVisitor;

    impl<'de> Visitor<'de> for NamedVisitor {
        type Value = BTreeMap<String, String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object of names to paths")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut named = BTreeMap::new();
            while let Some((name, path)) = access.next_entry::<String, String>()? {
                named.insert(name, path);
            }
            Ok(named)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            if access.next_element::<de::IgnoredAny>()?.is_some() {
                return Err(de::Error::invalid_type(de::Unexpected::Seq, &self));
            }
            Ok(BTreeMap::new())
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(BTreeMap::new())
        }
    }

    deserializer.deserialize_any(NamedVisitor)
}

/// Full persisted state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageDocument {
    /// Informational write time, `YYYY-MM-DD HH:MM:SS`
    pub datetime: String,
    pub last_path: String,
    pub prev_path: String,
    #[serde(deserialize_with = "named_paths")]
    pub named_paths: BTreeMap<String, String>,
    pub histories: Histories,
}

impl StorageDocument {
    /// Converts to the flat form where `histories` is a plain ordered list
    pub fn into_list(self) -> ListDocument {
        ListDocument {
            datetime: self.datetime,
            last_path: self.last_path,
            prev_path: self.prev_path,
            named_paths: self.named_paths,
            histories: self.histories.paths(),
        }
    }
}

/// [`StorageDocument`] with history ids dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocument {
    pub datetime: String,
    pub last_path: String,
    pub prev_path: String,
    pub named_paths: BTreeMap<String, String>,
    pub histories: Vec<String>,
}

/// Document as read from disk, where absent pointers stay `None`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct IncomingDocument {
    pub last_path: Option<String>,
    pub prev_path: Option<String>,
    #[serde(deserialize_with = "named_paths")]
    pub named_paths: BTreeMap<String, String>,
    pub histories: Histories,
}
