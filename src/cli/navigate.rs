//! Navigation commands: `get`, `hint` and `chdir`
//!
//! These run from the shell integration on every prompt or keypress, so
//! they print only what the shell consumes.

use anyhow::{bail, Result};

use super::output::Output;
use crate::domain::path::{absolutize, is_dir};
use crate::domain::MatchScope;
use crate::storage::QuickJump;

/// Prints the best match for `keyword` with no trailing newline
pub fn get(output: &Output, jumper: &QuickJump, keyword: &str) -> Result<()> {
    let path = jumper.match_one(keyword);
    tracing::debug!(keyword, path = %path, "resolved keyword");

    if output.is_json() {
        output.data(&serde_json::json!({
            "keyword": keyword,
            "path": path,
            "found": !path.is_empty(),
        }));
    } else {
        output.raw(&path)?;
    }

    Ok(())
}

/// Prints every candidate for `keyword`, one per line, named matches first
pub fn hint(
    output: &Output,
    jumper: &QuickJump,
    keyword: &str,
    scope: MatchScope,
    with_names: bool,
) -> Result<()> {
    let matches = jumper.match_all(keyword, scope);
    tracing::debug!(keyword, scope = %scope, count = matches.len(), "hint candidates");

    if output.is_json() {
        output.data(&matches);
        return Ok(());
    }

    for m in &matches {
        match &m.name {
            Some(name) if with_names => println!("{}:{}", name, m.path),
            _ => println!("{}", m.path),
        }
    }

    Ok(())
}

/// Records a visit to `dir`, or to the working directory
pub fn chdir(
    output: &Output,
    jumper: &mut QuickJump,
    dir: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let target = dir.unwrap_or(".");
    let resolved = absolutize(target, &jumper.store().current_dir());

    if !is_dir(&resolved) {
        if quiet {
            tracing::debug!(path = %resolved, "ignoring visit to missing directory");
            return Ok(());
        }
        bail!("Not a directory: {}", resolved);
    }

    let changed = jumper.add_history(&resolved);
    if quiet {
        return Ok(());
    }

    if output.is_json() {
        output.data(&serde_json::json!({
            "path": resolved,
            "changed": changed,
        }));
    } else if changed {
        output.success(&format!("Recorded {}", resolved));
    } else {
        output.success(&format!("Already recorded {}", resolved));
    }

    Ok(())
}
