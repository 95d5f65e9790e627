//! Commands that edit named paths: `set` and `reset`

use anyhow::{bail, Result};

use super::output::Output;
use crate::domain::path::absolutize;
use crate::domain::{MatchScope, ResetScope};
use crate::storage::QuickJump;

pub fn set(
    output: &Output,
    jumper: &mut QuickJump,
    name: &str,
    path: Option<&str>,
    overwrite: bool,
) -> Result<()> {
    if name.is_empty() {
        bail!("Name must not be empty");
    }

    let resolved = absolutize(path.unwrap_or("."), &jumper.store().current_dir());

    if !overwrite {
        if let Some(existing) = jumper.store().named_path(name) {
            bail!(
                "'{}' already points to {} (use --override to replace it)",
                name,
                existing
            );
        }
    }

    if !jumper.add_named(name, &resolved, overwrite) {
        bail!("Not a directory: {}", resolved);
    }

    if output.is_json() {
        output.data(&serde_json::json!({
            "success": true,
            "name": name,
            "path": resolved,
        }));
    } else {
        output.success(&format!("Set {} -> {}", name, resolved));
    }

    Ok(())
}

pub fn reset(output: &Output, jumper: &mut QuickJump, scope: MatchScope) -> Result<()> {
    let scope = ResetScope::from(scope);
    jumper.reset(scope);

    let what = match scope {
        ResetScope::All => "named paths and history",
        ResetScope::Named => "named paths",
        ResetScope::History => "history",
    };
    output.success(&format!("Cleared {}", what));

    Ok(())
}
