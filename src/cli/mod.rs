//! # Command-Line Interface
//!
//! User-facing commands. Most are called by the shell integration rather
//! than typed by hand.
//!
//! | Command | Purpose | Called by |
//! |---------|---------|-----------|
//! | `get` | Resolve a keyword to one directory | the bound `jump` function |
//! | `hint` | List completion candidates | tab completion |
//! | `chdir` | Record a visited directory | prompt / `chpwd` hook |
//! | `set` | Name a directory | user |
//! | `list` | Show stored data | user |
//! | `reset` | Clear named paths and/or history | user |
//! | `shell` | Print the integration script | shell rc file |
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug logs on stderr:
//! ```bash
//! qj --verbose get proj
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod list;
mod logging;
mod manage;
mod navigate;
mod output;
mod shell_cmd;

pub use app::{run, Cli, Commands};
pub use list::ListKey;
pub use output::{Output, OutputFormat};
