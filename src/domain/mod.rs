//! Domain models for quickjump
//!
//! Contains the document model, path handling and match scopes without any
//! I/O concerns.

pub mod path;
mod scope;
mod document;

pub use document::{HistoryEntry, Histories, ListDocument, NamedPath, StorageDocument};
pub(crate) use document::IncomingDocument;
pub use scope::{MatchScope, ResetScope};
