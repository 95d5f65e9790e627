//! # Storage Layer
//!
//! Persistence and the engine that ties it together.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Named paths + history | Pretty JSON | `<data dir>/quickjump.json` |
//! | Config | TOML | `<config dir>/config.toml` |
//!
//! ## Write Policy
//!
//! - [`JumpStore`] tracks a dirty flag; [`QuickJump::dump`] skips the write
//!   when nothing changed, so no-op invocations leave the file untouched
//! - Writes go to a temp file that is renamed over the data file
//! - An `fs2` advisory lock on `<file>.lock` serializes readers and writers,
//!   but two processes updating at once still lose one update
//!
//! ## Key Types
//!
//! - [`QuickJump`] - Engine bound to a data file and static aliases
//! - [`JumpStore`] - In-memory named paths, history and last/previous path
//! - [`Config`] - User configuration

mod config;
pub mod datafile;
mod engine;
mod store;

pub use config::{
    expand_home, is_valid_function_name, Config, ConfigError, DATA_FILE_NAME, DEFAULT_BIND_FUNC,
};
pub use engine::QuickJump;
pub use store::{
    to_pretty_json, JumpStore, LoadReport, Match, SkipReason, SkippedEntry, StoreError,
};
