//! The jump engine
//!
//! [`QuickJump`] binds a [`JumpStore`] to a data file and a set of static
//! aliases. One engine is built per process, initialized once, used for a
//! single operation and dumped at most once.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::datafile;
use super::store::{JumpStore, LoadReport, Match, SkipReason, StoreError};
use crate::domain::{MatchScope, ResetScope, StorageDocument};

pub struct QuickJump {
    data_file: PathBuf,
    aliases: BTreeMap<String, String>,
    store: JumpStore,
    initialized: bool,
}

impl QuickJump {
    /// Creates an engine; nothing is read until [`Self::init`]
    pub fn new(data_file: impl Into<PathBuf>, aliases: BTreeMap<String, String>) -> Self {
        Self::with_store(data_file, aliases, JumpStore::new())
    }

    /// Creates an engine around an existing (usually empty) store
    pub fn with_store(
        data_file: impl Into<PathBuf>,
        aliases: BTreeMap<String, String>,
        store: JumpStore,
    ) -> Self {
        Self {
            data_file: data_file.into(),
            aliases,
            store,
            initialized: false,
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn store(&self) -> &JumpStore {
        &self.store
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Loads the data file, merges the static aliases and persists the result.
    ///
    /// Persisted named paths win over aliases of the same name. The write only
    /// happens when an alias was actually added. Calling this again is a no-op.
    pub fn init(&mut self) -> Result<LoadReport, StoreError> {
        if self.initialized {
            return Ok(LoadReport::default());
        }

        let loaded = self.store.load_file(&self.data_file, true)?;
        loaded.log_skipped("data file");
        self.store.mark_clean();

        let merged = self.store.merge_named(self.aliases.clone(), false);
        for skipped in &merged.skipped {
            // Persisted names shadow aliases of the same name
            if skipped.reason != SkipReason::NameTaken {
                tracing::info!(
                    name = skipped.name.as_deref().unwrap_or_default(),
                    path = %skipped.path,
                    reason = %skipped.reason,
                    "skipped configured alias"
                );
            }
        }

        self.initialized = true;
        self.dump(false)?;

        Ok(LoadReport {
            named_added: loaded.named_added + merged.named_added,
            history_added: loaded.history_added,
            skipped: loaded.skipped.into_iter().chain(merged.skipped).collect(),
        })
    }

    pub fn match_one(&self, keyword: &str) -> String {
        self.store.match_one(keyword)
    }

    pub fn match_all(&self, keyword: &str, scope: MatchScope) -> Vec<Match> {
        self.store.match_all(keyword, scope)
    }

    pub fn add_named(&mut self, name: &str, path: &str, overwrite: bool) -> bool {
        self.store.add_named(name, path, overwrite)
    }

    pub fn add_history(&mut self, path: &str) -> bool {
        self.store.add_history(path)
    }

    pub fn reset(&mut self, scope: ResetScope) {
        self.store.reset(scope)
    }

    pub fn document(&self) -> StorageDocument {
        self.store.to_document()
    }

    /// Writes the store to the data file.
    ///
    /// Does nothing unless the store is dirty or `force` is set. Returns
    /// whether a write happened.
    pub fn dump(&mut self, force: bool) -> Result<bool, StoreError> {
        if !force && !self.store.is_dirty() {
            tracing::debug!("store unchanged, skipping write");
            return Ok(false);
        }

        let bytes = self.store.serialize()?;
        datafile::write(&self.data_file, &bytes)?;
        self.store.mark_clean();
        Ok(true)
    }
}
