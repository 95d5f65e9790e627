//! In-memory jump store
//!
//! Holds named paths, visit history and the last/previous path pair, and
//! tracks whether anything changed since the last write. Nothing here writes
//! to disk on its own; see [`super::QuickJump::dump`].

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;

use super::datafile;
use crate::domain::path::{absolutize, identify, is_dir};
use crate::domain::{
    HistoryEntry, Histories, IncomingDocument, MatchScope, NamedPath, ResetScope, StorageDocument,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Data file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to decode {input}: {source}")]
    Decode {
        input: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode jump data: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why an entry was left out while merging a loaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptyName,
    NameTaken,
    NotADirectory,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyName => write!(f, "empty name"),
            SkipReason::NameTaken => write!(f, "name already set"),
            SkipReason::NotADirectory => write!(f, "not an existing directory"),
        }
    }
}

/// An entry skipped during a merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Alias name, or `None` for history entries
    pub name: Option<String>,
    pub path: String,
    pub reason: SkipReason,
}

/// Outcome of merging a document into the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub named_added: usize,
    pub history_added: usize,
    pub skipped: Vec<SkippedEntry>,
}

impl LoadReport {
    /// Logs each skipped entry at `info` level
    pub fn log_skipped(&self, origin: &str) {
        for entry in &self.skipped {
            match &entry.name {
                Some(name) => tracing::info!(
                    origin,
                    name = %name,
                    path = %entry.path,
                    reason = %entry.reason,
                    "skipped named path"
                ),
                None => tracing::info!(
                    origin,
                    path = %entry.path,
                    reason = %entry.reason,
                    "skipped history entry"
                ),
            }
        }
    }
}

/// A keyword search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Alias name for named-path hits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub path: String,
}

impl Match {
    fn named(name: &str, path: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            path: path.to_string(),
        }
    }

    fn history(path: &str) -> Self {
        Self {
            name: None,
            path: path.to_string(),
        }
    }
}

/// Named paths and visit history, with a dirty flag
#[derive(Debug, Default)]
pub struct JumpStore {
    named: BTreeMap<String, String>,
    histories: Vec<HistoryEntry>,
    history_ids: HashSet<String>,
    last_path: String,
    prev_path: String,
    dirty: bool,
    /// Fixed working directory; the process one is used when unset
    cwd: Option<PathBuf>,
}

impl JumpStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that resolves relative paths against `cwd`
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
            ..Self::default()
        }
    }

    /// Returns the working directory used for relative paths and `.`
    pub fn current_dir(&self) -> PathBuf {
        self.cwd
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_default()
    }

    fn resolve(&self, path: &str) -> String {
        absolutize(path, &self.current_dir())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears the dirty flag after a load or a successful write
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn last_path(&self) -> &str {
        &self.last_path
    }

    pub fn prev_path(&self) -> &str {
        &self.prev_path
    }

    pub fn named_path(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }

    pub fn named_paths(&self) -> impl Iterator<Item = NamedPath> + '_ {
        self.named.iter().map(|(name, path)| NamedPath {
            name: name.clone(),
            path: path.clone(),
        })
    }

    pub fn histories(&self) -> &[HistoryEntry] {
        &self.histories
    }

    /// Parses a JSON document and merges it into the store.
    ///
    /// Nothing is changed when the document does not decode. Entries that
    /// fail validation are skipped and listed in the returned report.
    pub fn load(&mut self, bytes: &[u8], input: &str) -> Result<LoadReport, StoreError> {
        let doc: IncomingDocument =
            serde_json::from_slice(bytes).map_err(|source| StoreError::Decode {
                input: input.to_string(),
                source,
            })?;

        let mut report = self.merge_named(doc.named_paths, false);

        for entry in doc.histories.into_entries() {
            match self.try_add_history(&entry.path) {
                Ok(true) => report.history_added += 1,
                Ok(false) => {}
                Err(reason) => report.skipped.push(SkippedEntry {
                    name: None,
                    path: entry.path,
                    reason,
                }),
            }
        }

        if let Some(last) = doc.last_path {
            self.last_path = last;
        }
        if let Some(prev) = doc.prev_path {
            self.prev_path = prev;
        }

        tracing::debug!(
            input,
            named = report.named_added,
            history = report.history_added,
            skipped = report.skipped.len(),
            "merged jump document"
        );

        Ok(report)
    }

    /// Reads and merges the document at `path`.
    ///
    /// A missing file is fine when `ignore_missing` is set. The dirty flag is
    /// left as the merge set it; callers doing a fresh load clear it.
    pub fn load_file(
        &mut self,
        path: &Path,
        ignore_missing: bool,
    ) -> Result<LoadReport, StoreError> {
        match datafile::read(path)? {
            Some(bytes) => self.load(&bytes, &path.display().to_string()),
            None if ignore_missing => {
                tracing::debug!(path = %path.display(), "no data file yet");
                Ok(LoadReport::default())
            }
            None => Err(StoreError::NotFound(path.to_path_buf())),
        }
    }

    /// Merges name to path pairs through [`Self::add_named`]
    pub fn merge_named<I>(&mut self, entries: I, overwrite: bool) -> LoadReport
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut report = LoadReport::default();
        for (name, path) in entries {
            match self.try_add_named(&name, &path, overwrite) {
                Ok(()) => report.named_added += 1,
                Err(reason) => report.skipped.push(SkippedEntry {
                    name: Some(name),
                    path,
                    reason,
                }),
            }
        }
        report
    }

    /// Adds or replaces a named path.
    ///
    /// Returns false when the name is taken and `overwrite` is not set, or when
    /// the path is not an existing directory.
    pub fn add_named(&mut self, name: &str, path: &str, overwrite: bool) -> bool {
        self.try_add_named(name, path, overwrite).is_ok()
    }

    fn try_add_named(&mut self, name: &str, path: &str, overwrite: bool) -> Result<(), SkipReason> {
        if name.is_empty() {
            return Err(SkipReason::EmptyName);
        }
        if !overwrite && self.named.contains_key(name) {
            return Err(SkipReason::NameTaken);
        }

        let path = self.resolve(path);
        if !is_dir(&path) {
            return Err(SkipReason::NotADirectory);
        }

        self.named.insert(name.to_string(), path);
        self.dirty = true;
        Ok(())
    }

    /// Records a visit to `path`.
    ///
    /// Rotates last/previous when the path differs from the last one and
    /// appends a history entry when the path is new. Returns true if either
    /// happened.
    pub fn add_history(&mut self, path: &str) -> bool {
        self.try_add_history(path).unwrap_or(false)
    }

    fn try_add_history(&mut self, path: &str) -> Result<bool, SkipReason> {
        let path = self.resolve(path);
        if !is_dir(&path) {
            return Err(SkipReason::NotADirectory);
        }

        let mut changed = false;

        if path != self.last_path {
            self.prev_path = std::mem::replace(&mut self.last_path, path.clone());
            changed = true;
        }

        let id = identify(&path);
        if self.history_ids.insert(id.clone()) {
            self.histories.push(HistoryEntry { id, path });
            changed = true;
        }

        if changed {
            self.dirty = true;
        }
        Ok(changed)
    }

    /// Resolves a keyword to a single directory, or an empty string.
    ///
    /// Tried in order: `""`/`.` (working directory), `-` (previous path), an
    /// existing directory, a named path, then the first history path that
    /// contains the keyword.
    pub fn match_one(&self, keyword: &str) -> String {
        if keyword.is_empty() || keyword == "." {
            return self.resolve(".");
        }
        if keyword == "-" {
            return self.prev_path.clone();
        }
        if is_dir(&self.resolve(keyword)) {
            return keyword.to_string();
        }
        if let Some(path) = self.named.get(keyword) {
            return path.clone();
        }

        self.histories
            .iter()
            .find(|entry| entry.path.contains(keyword))
            .map(|entry| entry.path.clone())
            .unwrap_or_default()
    }

    /// Returns every entry matching `keyword` (case-insensitive), named first.
    ///
    /// An empty keyword lists everything regardless of scope.
    pub fn match_all(&self, keyword: &str, scope: MatchScope) -> Vec<Match> {
        if keyword.is_empty() {
            return self
                .named
                .iter()
                .map(|(name, path)| Match::named(name, path))
                .chain(self.histories.iter().map(|e| Match::history(&e.path)))
                .collect();
        }

        let needle = keyword.to_lowercase();
        let mut matches = Vec::new();

        if scope.includes_named() {
            matches.extend(
                self.named
                    .iter()
                    .filter(|(name, path)| {
                        name.to_lowercase().contains(&needle)
                            || path.to_lowercase().contains(&needle)
                    })
                    .map(|(name, path)| Match::named(name, path)),
            );
        }

        if scope.includes_history() {
            matches.extend(
                self.histories
                    .iter()
                    .filter(|e| e.path.to_lowercase().contains(&needle))
                    .map(|e| Match::history(&e.path)),
            );
        }

        matches
    }

    /// Clears named paths, history, or both. Always marks the store dirty.
    pub fn reset(&mut self, scope: ResetScope) {
        if scope.clears_named() {
            self.named.clear();
        }
        if scope.clears_history() {
            self.histories.clear();
            self.history_ids.clear();
        }
        self.dirty = true;
        tracing::debug!(flag = scope.flag(), "store reset");
    }

    /// Snapshot of the current state, stamped with the local time
    pub fn to_document(&self) -> StorageDocument {
        StorageDocument {
            datetime: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            last_path: self.last_path.clone(),
            prev_path: self.prev_path.clone(),
            named_paths: self.named.clone(),
            histories: Histories::new(self.histories.clone()),
        }
    }

    /// Encodes the current state as pretty-printed JSON
    pub fn serialize(&self) -> Result<Vec<u8>, StoreError> {
        to_pretty_json(&self.to_document())
    }
}

/// Pretty JSON with four-space indentation
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer).map_err(StoreError::Encode)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    fn dir_str(dir: &Path) -> String {
        crate::domain::path::normalize(&dir.to_string_lossy())
    }

    fn mkdir(root: &TempDir, name: &str) -> String {
        let path = root.path().join(name);
        fs::create_dir_all(&path).unwrap();
        dir_str(&path)
    }

    fn strip_datetime(bytes: &[u8]) -> serde_json::Value {
        let mut value: serde_json::Value = serde_json::from_slice(bytes).unwrap();
        value.as_object_mut().unwrap().remove("datetime");
        value
    }

    #[test]
    fn new_store_is_empty_and_clean() {
        let store = JumpStore::new();

        assert!(!store.is_dirty());
        assert_eq!(store.last_path(), "");
        assert_eq!(store.prev_path(), "");
        assert!(store.histories().is_empty());
    }

    #[test]
    fn history_dedup() {
        let root = TempDir::new().unwrap();
        let a = mkdir(&root, "a");
        let mut store = JumpStore::new();

        assert!(store.add_history(&a));
        store.mark_clean();
        assert!(!store.add_history(&a));

        assert_eq!(store.histories().len(), 1);
        assert_eq!(store.last_path(), a);
        assert_eq!(store.prev_path(), "");
        assert!(!store.is_dirty());
    }

    #[test]
    fn last_prev_rotation() {
        let root = TempDir::new().unwrap();
        let a = mkdir(&root, "a");
        let b = mkdir(&root, "b");
        let mut store = JumpStore::new();

        store.add_history(&a);
        store.add_history(&b);

        assert_eq!(store.last_path(), b);
        assert_eq!(store.prev_path(), a);
    }

    #[test]
    fn revisit_rotates_without_new_entry() {
        let root = TempDir::new().unwrap();
        let a = mkdir(&root, "a");
        let b = mkdir(&root, "b");
        let mut store = JumpStore::new();

        store.add_history(&a);
        store.add_history(&b);
        store.mark_clean();

        assert!(store.add_history(&a));
        assert!(store.is_dirty());
        assert_eq!(store.histories().len(), 2);
        assert_eq!(store.last_path(), a);
        assert_eq!(store.prev_path(), b);
    }

    #[test]
    fn history_resolves_relative_paths() {
        let root = TempDir::new().unwrap();
        let sub = mkdir(&root, "sub");
        let mut store = JumpStore::with_cwd(root.path());

        assert!(store.add_history("sub"));
        assert_eq!(store.last_path(), sub);
    }

    #[test]
    fn named_override_guard() {
        let root = TempDir::new().unwrap();
        let a = mkdir(&root, "a");
        let b = mkdir(&root, "b");
        let mut store = JumpStore::new();

        assert!(store.add_named("x", &a, false));
        assert!(!store.add_named("x", &b, false));
        assert_eq!(store.named_path("x"), Some(a.as_str()));

        assert!(store.add_named("x", &b, true));
        assert_eq!(store.named_path("x"), Some(b.as_str()));
    }

    #[test]
    fn invalid_directory_rejected() {
        let mut store = JumpStore::new();

        assert!(!store.add_named("y", "/path/does/not/exist", false));
        assert!(!store.add_history("/path/does/not/exist"));
        assert!(store.named_path("y").is_none());
        assert!(store.histories().is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn empty_name_rejected() {
        let root = TempDir::new().unwrap();
        let a = mkdir(&root, "a");
        let mut store = JumpStore::new();

        assert!(!store.add_named("", &a, true));
        assert!(!store.is_dirty());
    }

    #[test]
    fn match_one_priority() {
        let root = TempDir::new().unwrap();
        let work = mkdir(&root, "work");
        let work2 = mkdir(&root, "work2");
        let other = mkdir(&root, "other");
        let mut store = JumpStore::with_cwd(&other);

        store.add_named("work", &work, false);
        store.add_history(&work2);
        store.add_history(&other);

        assert_eq!(store.match_one("-"), work2);
        assert_eq!(store.match_one("work"), work);
        assert_eq!(store.match_one("rk2"), work2);
        assert_eq!(store.match_one("nothing-like-this"), "");
    }

    #[test]
    fn match_one_dot_and_empty_are_cwd() {
        let root = TempDir::new().unwrap();
        let here = mkdir(&root, "here");
        let store = JumpStore::with_cwd(&here);

        assert_eq!(store.match_one(""), here);
        assert_eq!(store.match_one("."), here);
    }

    #[test]
    fn match_one_existing_directory_returned_unchanged() {
        let root = TempDir::new().unwrap();
        mkdir(&root, "child");
        let mut store = JumpStore::with_cwd(root.path());
        let elsewhere = mkdir(&root, "elsewhere-child");
        store.add_history(&elsewhere);

        assert_eq!(store.match_one("child"), "child");
    }

    #[test]
    fn match_one_history_uses_insertion_order() {
        let root = TempDir::new().unwrap();
        let first = mkdir(&root, "proj-one");
        let second = mkdir(&root, "proj-two");
        let mut store = JumpStore::with_cwd(root.path());

        store.add_history(&second);
        store.add_history(&first);

        assert_eq!(store.match_one("proj-"), second);
    }

    #[test]
    fn match_all_named_first_case_insensitive() {
        let root = TempDir::new().unwrap();
        let api = mkdir(&root, "Api");
        let api_docs = mkdir(&root, "api-docs");
        let web = mkdir(&root, "web");
        let mut store = JumpStore::new();

        store.add_named("backend", &api, false);
        store.add_named("site", &web, false);
        store.add_history(&web);
        store.add_history(&api_docs);

        let hits = store.match_all("API", MatchScope::BOTH);
        assert_eq!(
            hits,
            vec![Match::named("backend", &api), Match::history(&api_docs)]
        );

        let named_only = store.match_all("site", MatchScope::NAMED);
        assert_eq!(named_only, vec![Match::named("site", &web)]);

        let history_only = store.match_all("web", MatchScope::HISTORY);
        assert_eq!(history_only, vec![Match::history(&web)]);
    }

    #[test]
    fn match_all_empty_keyword_lists_everything() {
        let root = TempDir::new().unwrap();
        let a = mkdir(&root, "a");
        let b = mkdir(&root, "b");
        let mut store = JumpStore::new();

        store.add_named("a", &a, false);
        store.add_history(&b);
        store.add_history(&a);

        let all = store.match_all("", MatchScope::NAMED);
        assert_eq!(
            all,
            vec![Match::named("a", &a), Match::history(&b), Match::history(&a)]
        );
    }

    #[test]
    fn reset_scopes() {
        let root = TempDir::new().unwrap();
        let a = mkdir(&root, "a");

        let mut store = JumpStore::new();
        store.add_named("a", &a, false);
        store.add_history(&a);
        store.mark_clean();
        store.reset(ResetScope::Named);
        assert!(store.named_path("a").is_none());
        assert_eq!(store.histories().len(), 1);
        assert!(store.is_dirty());

        store.add_named("a", &a, false);
        store.reset(ResetScope::History);
        assert!(store.named_path("a").is_some());
        assert!(store.histories().is_empty());

        store.add_history(&a);
        store.reset(ResetScope::All);
        assert!(store.named_path("a").is_none());
        assert!(store.histories().is_empty());
    }

    #[test]
    fn reset_history_allows_re_adding() {
        let root = TempDir::new().unwrap();
        let a = mkdir(&root, "a");
        let mut store = JumpStore::new();

        store.add_history(&a);
        store.reset(ResetScope::History);

        assert!(store.add_history(&a));
        assert_eq!(store.histories().len(), 1);
    }

    #[test]
    fn round_trip() {
        let root = TempDir::new().unwrap();
        let a = mkdir(&root, "a");
        let b = mkdir(&root, "b");
        let mut store = JumpStore::new();
        store.add_named("bee", &b, false);
        store.add_history(&b);
        store.add_history(&a);

        let first = store.serialize().unwrap();
        let mut reloaded = JumpStore::new();
        reloaded.load(&first, "memory").unwrap();
        let second = reloaded.serialize().unwrap();

        assert_eq!(strip_datetime(&first), strip_datetime(&second));
    }

    #[test]
    fn round_trip_keeps_revisited_last_path_after_reset() {
        let root = TempDir::new().unwrap();
        let a = mkdir(&root, "a");
        let b = mkdir(&root, "b");
        let mut store = JumpStore::new();
        store.add_history(&a);
        store.add_history(&b);
        store.add_history(&a);
        store.reset(ResetScope::History);
        store.add_history(&b);

        let first = store.serialize().unwrap();
        let mut reloaded = JumpStore::new();
        reloaded.load(&first, "memory").unwrap();

        assert_eq!(reloaded.last_path(), b);
        assert_eq!(reloaded.prev_path(), a);
        assert_eq!(strip_datetime(&first), strip_datetime(&reloaded.serialize().unwrap()));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Visit(usize),
        Name(usize, usize, bool),
        Reset(u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0..4usize).prop_map(Op::Visit),
            2 => (0..3usize, 0..4usize, any::<bool>())
                .prop_map(|(name, dir, overwrite)| Op::Name(name, dir, overwrite)),
            1 => (0..4u8).prop_map(Op::Reset),
        ]
    }

    proptest! {
        #[test]
        fn round_trip_after_any_operations(ops in prop::collection::vec(op(), 0..20)) {
            let root = TempDir::new().unwrap();
            let dirs: Vec<String> = ["a", "b", "c", "d"]
                .iter()
                .map(|name| mkdir(&root, name))
                .collect();
            let names = ["api", "docs", "web"];

            let mut store = JumpStore::new();
            for op in &ops {
                match *op {
                    Op::Visit(dir) => {
                        store.add_history(&dirs[dir]);
                    }
                    Op::Name(name, dir, overwrite) => {
                        store.add_named(names[name], &dirs[dir], overwrite);
                    }
                    Op::Reset(flag) => store.reset(ResetScope::from_flag(flag)),
                }
            }

            let first = store.serialize().unwrap();
            let mut reloaded = JumpStore::new();
            reloaded.load(&first, "memory").unwrap();
            let second = reloaded.serialize().unwrap();

            prop_assert_eq!(reloaded.last_path(), store.last_path());
            prop_assert_eq!(reloaded.prev_path(), store.prev_path());
            prop_assert_eq!(strip_datetime(&first), strip_datetime(&second));
        }
    }

    #[test]
    fn serialize_shape() {
        let root = TempDir::new().unwrap();
        let a = mkdir(&root, "a");
        let mut store = JumpStore::new();
        store.add_history(&a);

        let bytes = store.serialize().unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert!(text.contains("\n    \"lastPath\""));
        assert!(!text.contains("\\/"));
        assert_eq!(value["lastPath"], serde_json::json!(a));
        assert_eq!(value["histories"][identify(&a)], serde_json::json!(a));
        assert_eq!(value["datetime"].as_str().unwrap().len(), 19);
    }

    #[test]
    fn load_skips_invalid_entries() {
        let root = TempDir::new().unwrap();
        let a = mkdir(&root, "a");
        let json = serde_json::json!({
            "lastPath": a,
            "prevPath": "",
            "namedPaths": { "good": a, "gone": "/no/such/dir/anywhere" },
            "histories": { "x": "/no/such/dir/anywhere", "y": a }
        });

        let mut store = JumpStore::new();
        let report = store.load(json.to_string().as_bytes(), "test").unwrap();

        assert_eq!(report.named_added, 1);
        assert_eq!(report.history_added, 1);
        assert_eq!(report.skipped.len(), 2);
        assert!(report
            .skipped
            .iter()
            .all(|s| s.reason == SkipReason::NotADirectory));
        assert_eq!(store.named_path("good"), Some(a.as_str()));
        assert_eq!(store.histories()[0].id, identify(&a));
    }

    #[test]
    fn load_sets_pointers_when_present() {
        let root = TempDir::new().unwrap();
        let a = mkdir(&root, "a");
        let b = mkdir(&root, "b");
        let json = serde_json::json!({
            "lastPath": a,
            "prevPath": b,
            "histories": [a, b]
        });

        let mut store = JumpStore::new();
        store.load(json.to_string().as_bytes(), "test").unwrap();

        assert_eq!(store.last_path(), a);
        assert_eq!(store.prev_path(), b);
    }

    #[test]
    fn load_decode_failure_leaves_state() {
        let root = TempDir::new().unwrap();
        let a = mkdir(&root, "a");
        let mut store = JumpStore::new();
        store.add_named("a", &a, false);
        store.mark_clean();

        let err = store.load(b"{ not json", "broken.json").unwrap_err();

        assert!(matches!(err, StoreError::Decode { .. }));
        assert!(err.to_string().contains("broken.json"));
        assert_eq!(store.named_path("a"), Some(a.as_str()));
        assert!(!store.is_dirty());
    }

    #[test]
    fn load_wrong_shape_is_decode_error() {
        let mut store = JumpStore::new();
        let err = store.load(br#"{"histories": 42}"#, "shape").unwrap_err();

        assert!(matches!(err, StoreError::Decode { .. }));
    }

    #[test]
    fn load_file_missing() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("missing.json");
        let mut store = JumpStore::new();

        assert!(store.load_file(&path, true).is_ok());
        assert!(matches!(
            store.load_file(&path, false),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn merge_named_reports_taken_names() {
        let root = TempDir::new().unwrap();
        let a = mkdir(&root, "a");
        let b = mkdir(&root, "b");
        let mut store = JumpStore::new();
        store.add_named("x", &a, false);

        let report = store.merge_named(vec![("x".to_string(), b.clone())], false);

        assert_eq!(report.named_added, 0);
        assert_eq!(report.skipped[0].reason, SkipReason::NameTaken);
        assert_eq!(store.named_path("x"), Some(a.as_str()));
    }
}
