//! # Shell Integration
//!
//! Supplies the script a user `eval`s in their shell rc file. The script
//! records every directory change with `chdir --quiet` and defines a bound
//! function (default `jump`) that resolves a keyword with `get` and `cd`s
//! into the result.
//!
//! Templates carry `{{bindFunc}}` and `{{binary}}` placeholders, filled in by
//! [`template::render`]. A per-shell override file replaces the built-in
//! template when it can be read.

pub mod template;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const BASH_SCRIPT: &str = include_str!("scripts/bash.sh");
const ZSH_SCRIPT: &str = include_str!("scripts/zsh.sh");

#[derive(Debug, Error, PartialEq)]
pub enum ShellError {
    #[error("Unsupported shell '{name}' (supported: {supported})")]
    Unsupported { name: String, supported: String },
}

/// A shell with built-in integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shell {
    Bash,
    Zsh,
}

impl Shell {
    pub fn name(&self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
        }
    }

    /// All supported shells
    pub fn all() -> &'static [Shell] {
        &[Shell::Bash, Shell::Zsh]
    }

    fn default_script(&self) -> &'static str {
        match self {
            Shell::Bash => BASH_SCRIPT,
            Shell::Zsh => ZSH_SCRIPT,
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shell {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Shell::all()
            .iter()
            .copied()
            .find(|shell| shell.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ShellError::Unsupported {
                name: wanted.to_string(),
                supported: supported_list(),
            })
    }
}

fn supported_list() -> String {
    Shell::all()
        .iter()
        .map(Shell::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Source of shell integration scripts
#[derive(Debug, Clone, Default)]
pub struct ShellScripts {
    overrides: BTreeMap<Shell, PathBuf>,
}

impl ShellScripts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a provider from shell-name to template-path pairs.
    ///
    /// Entries naming an unsupported shell are ignored with a warning.
    pub fn from_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, PathBuf)>,
    {
        let mut scripts = Self::new();
        for (name, path) in overrides {
            match name.parse::<Shell>() {
                Ok(shell) => scripts = scripts.with_override(shell, path),
                Err(e) => tracing::warn!(error = %e, "ignoring shell template override"),
            }
        }
        scripts
    }

    /// Uses the template at `path` for `shell` when it is readable
    pub fn with_override(mut self, shell: Shell, path: impl Into<PathBuf>) -> Self {
        self.overrides.insert(shell, path.into());
        self
    }

    /// Supported shells
    pub fn supported() -> &'static [Shell] {
        Shell::all()
    }

    /// Fails with [`ShellError::Unsupported`] unless `name` is a supported shell
    pub fn assert_supported(name: &str) -> Result<Shell, ShellError> {
        name.parse()
    }

    /// Returns the unrendered template for `shell`.
    ///
    /// A configured override that is missing or unreadable falls back to the
    /// built-in template.
    pub fn script_for(&self, shell: Shell) -> Cow<'static, str> {
        if let Some(path) = self.overrides.get(&shell) {
            match fs::read_to_string(path) {
                Ok(content) => {
                    tracing::debug!(
                        shell = %shell,
                        path = %path.display(),
                        "using template override"
                    );
                    return Cow::Owned(content);
                }
                Err(e) => tracing::debug!(
                    shell = %shell,
                    path = %path.display(),
                    error = %e,
                    "template override unreadable, using built-in"
                ),
            }
        }

        Cow::Borrowed(shell.default_script())
    }

    /// Returns the script for `shell` with placeholders filled in
    pub fn render(&self, shell: Shell, bind_func: &str, binary: &str) -> String {
        template::render(
            &self.script_for(shell),
            &[("bindFunc", bind_func), ("binary", binary)],
        )
    }
}
