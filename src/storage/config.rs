//! Configuration handling for quickjump
//!
//! Configuration is stored in `~/.config/quickjump/config.toml` (or the
//! platform equivalent), overridable with `--config` / `$QUICKJUMP_CONFIG`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shell function name used when nothing else is configured
pub const DEFAULT_BIND_FUNC: &str = "jump";

/// File name of the data file inside the data directory
pub const DATA_FILE_NAME: &str = "quickjump.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Where jump data is kept (defaults to the per-user data directory)
    pub data_file: Option<PathBuf>,

    /// Name of the shell function that jumps (defaults to `jump`)
    pub bind_func: Option<String>,

    /// Static aliases merged into the named paths at startup
    pub aliases: BTreeMap<String, String>,

    /// Per-shell template files replacing the built-in scripts
    pub shell_templates: BTreeMap<String, PathBuf>,
}

impl Config {
    /// Loads configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !config_path.exists() {
            if explicit {
                anyhow::bail!("Config file not found: {}", config_path.display());
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;

        tracing::debug!(
            path = %config_path.display(),
            aliases = config.aliases.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Parses and validates a TOML document
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(func) = &self.bind_func {
            if !is_valid_function_name(func) {
                return Err(ConfigError::Invalid(format!(
                    "bind_func '{}' is not a valid shell function name",
                    func
                )));
            }
        }

        if let Some(name) = self.aliases.keys().find(|name| name.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "alias names must not be empty (got '{}')",
                name
            )));
        }

        Ok(())
    }

    /// Returns the per-user config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the default data file path
    pub fn default_data_file() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().join(DATA_FILE_NAME))
    }

    /// Returns the configured data file, falling back to the default location
    pub fn data_file_path(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(expand_home(&path.to_string_lossy()).into()),
            None => Self::default_data_file()
                .ok_or_else(|| anyhow::anyhow!("Could not determine data directory")),
        }
    }

    /// Returns the shell function name to bind
    pub fn bind_func(&self) -> &str {
        self.bind_func.as_deref().unwrap_or(DEFAULT_BIND_FUNC)
    }

    /// Aliases with a leading `~` expanded to the home directory
    pub fn expanded_aliases(&self) -> BTreeMap<String, String> {
        self.aliases
            .iter()
            .map(|(name, path)| (name.clone(), expand_home(path)))
            .collect()
    }

    /// Template override paths with a leading `~` expanded
    pub fn expanded_shell_templates(&self) -> BTreeMap<String, PathBuf> {
        self.shell_templates
            .iter()
            .map(|(shell, path)| (shell.clone(), expand_home(&path.to_string_lossy()).into()))
            .collect()
    }
}

/// Returns true if `name` can be used as a shell function name
pub fn is_valid_function_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit() || c == '-')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "quickjump", "quickjump")
}

/// Expands a leading `~` or `~/` to the user's home directory
pub fn expand_home(path: &str) -> String {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => rest,
        _ => return path.to_string(),
    };

    match UserDirs::new() {
        Some(dirs) => format!("{}{}", dirs.home_dir().display(), rest),
        None => path.to_string(),
    }
}
