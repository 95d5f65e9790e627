//! Main CLI application structure

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::list::ListKey;
use super::output::{Output, OutputFormat};
use super::{list, logging, manage, navigate, shell_cmd};
use crate::domain::MatchScope;
use crate::storage::{Config, QuickJump};

#[derive(Parser)]
#[command(name = "qj")]
#[command(author, version, about = "Jump to named and recently visited directories")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Config file (defaults to the per-user config directory)
    #[arg(long, global = true, env = "QUICKJUMP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Data file (overrides `data_file` from the config)
    #[arg(long, global = true, env = "QUICKJUMP_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show stored jump data
    List {
        /// Only show one part of the data
        key: Option<ListKey>,

        /// Keep history ids instead of a flat list
        #[arg(long)]
        with_id: bool,
    },

    /// Print the shell integration script
    Shell {
        /// Shell name (bash, zsh)
        name: String,

        /// Name of the jump function to define
        #[arg(long)]
        bind: Option<String>,
    },

    /// List candidate paths for completion
    Hint {
        /// Keywords (joined with spaces)
        keywords: Vec<String>,

        /// Where to search (named, history, both)
        #[arg(long, default_value = "both")]
        only: MatchScope,

        /// Prefix named matches with `name:`
        #[arg(long)]
        name: bool,
    },

    /// Print the best matching path, without a trailing newline
    Get {
        /// Keyword: a name, `-`, a directory, or part of a visited path
        keywords: Vec<String>,
    },

    /// Give a directory a short name
    Set {
        /// Name to assign
        name: String,

        /// Directory (defaults to the current directory)
        path: Option<String>,

        /// Replace an existing name
        #[arg(long = "override", short = 'o')]
        overwrite: bool,
    },

    /// Record a directory visit
    Chdir {
        /// Directory (defaults to the current directory)
        dir: Option<String>,

        /// Print nothing, and ignore directories that do not exist
        #[arg(long, short)]
        quiet: bool,
    },

    /// Clear named paths, history, or both
    Reset {
        /// What to clear (named, history, both)
        #[arg(long, default_value = "both")]
        only: MatchScope,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let Cli {
        format,
        verbose,
        config,
        data_file,
        command,
    } = Cli::parse();

    logging::init(verbose);
    let output = Output::new(format);
    let config = Config::load(config.as_deref())?;

    let data_file = data_file.as_deref();

    match command {
        Commands::Shell { name, bind } => {
            shell_cmd::run(&output, &config, &name, bind.as_deref())?
        }
        Commands::List { key, with_id } => with_engine(&config, data_file, |jumper| {
            list::run(&output, jumper, key, with_id)
        })?,
        Commands::Hint { keywords, only, name } => with_engine(&config, data_file, |jumper| {
            navigate::hint(&output, jumper, &keywords.join(" "), only, name)
        })?,
        Commands::Get { keywords } => with_engine(&config, data_file, |jumper| {
            navigate::get(&output, jumper, &keywords.join(" "))
        })?,
        Commands::Set {
            name,
            path,
            overwrite,
        } => with_engine(&config, data_file, |jumper| {
            manage::set(&output, jumper, &name, path.as_deref(), overwrite)
        })?,
        Commands::Chdir { dir, quiet } => with_engine(&config, data_file, |jumper| {
            navigate::chdir(&output, jumper, dir.as_deref(), quiet)
        })?,
        Commands::Reset { only } => with_engine(&config, data_file, |jumper| {
            manage::reset(&output, jumper, only)
        })?,
    }

    tracing::debug!("command completed");
    Ok(())
}

/// Opens the engine, runs one operation and saves any change
fn with_engine<F>(config: &Config, data_file: Option<&Path>, operation: F) -> Result<()>
where
    F: FnOnce(&mut QuickJump) -> Result<()>,
{
    let mut jumper = open_engine(config, data_file)?;
    operation(&mut jumper)?;

    jumper
        .dump(false)
        .with_context(|| format!("Failed to save {}", jumper.data_file().display()))?;
    Ok(())
}

/// Builds the engine from config and loads the data file
fn open_engine(config: &Config, data_file: Option<&Path>) -> Result<QuickJump> {
    let data_file = match data_file {
        Some(path) => path.to_path_buf(),
        None => config.data_file_path()?,
    };
    tracing::debug!(path = %data_file.display(), "opening jump data");

    let mut jumper = QuickJump::new(data_file, config.expanded_aliases());
    jumper
        .init()
        .with_context(|| format!("Failed to load {}", jumper.data_file().display()))?;

    Ok(jumper)
}
