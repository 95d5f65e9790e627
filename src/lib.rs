//! quickjump - jump to named and recently visited directories
//!
//! quickjump remembers directories you `cd` into and directories you give
//! short names, and resolves keywords back to paths so a shell function can
//! jump there. The engine lives in [`storage`]; [`shell`] supplies the
//! scripts that hook it into bash and zsh.

pub mod domain;
pub mod storage;
pub mod shell;
pub mod cli;

pub use domain::{MatchScope, ResetScope, StorageDocument};
pub use storage::{Config, JumpStore, QuickJump, StoreError};
