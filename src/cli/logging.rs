//! Diagnostic logging to stderr
//!
//! stdout carries command results (`qj get` is captured by `$(...)`), so all
//! logs go to stderr. The level defaults to `warn`, `--verbose` raises it to
//! `debug` for this crate, and `QUICKJUMP_LOG` takes an `EnvFilter` directive
//! that overrides both.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "QUICKJUMP_LOG";

pub fn init(verbose: bool) {
    let default = if verbose { "quickjump=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
