//! Shell command: prints the integration script for `eval`

use anyhow::{bail, Result};

use super::output::Output;
use crate::domain::path::normalize;
use crate::shell::ShellScripts;
use crate::storage::{is_valid_function_name, Config};

pub fn run(output: &Output, config: &Config, name: &str, bind: Option<&str>) -> Result<()> {
    let shell = ShellScripts::assert_supported(name)?;

    let bind_func = bind.unwrap_or_else(|| config.bind_func());
    if !is_valid_function_name(bind_func) {
        bail!("'{}' is not a valid shell function name", bind_func);
    }

    let scripts = ShellScripts::from_overrides(config.expanded_shell_templates());
    let script = scripts.render(shell, bind_func, &current_binary());

    if output.is_json() {
        output.data(&serde_json::json!({
            "shell": shell.name(),
            "bindFunc": bind_func,
            "script": script,
        }));
    } else {
        output.raw(&script)?;
    }

    Ok(())
}

/// Path of the running executable, so the script calls this same binary
fn current_binary() -> String {
    std::env::current_exe()
        .map(|exe| normalize(&exe.to_string_lossy()))
        .unwrap_or_else(|_| "qj".to_string())
}
