//! Configuration management for the cheatsheet tool.
//!
//! Handles:
//! - Command-line argument parsing
//! - Project (`.cheatsheet.toml`) and user config files
//! - Category directory resolution

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::store::LoadPolicy;

/// Name of the per-project config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".cheatsheet.toml";

/// Environment variable overriding the category directory
pub const DOCS_DIR_ENV: &str = "CHEATSHEET_DIR";

pub const DEFAULT_DOCS_DIR: &str = "docs";
pub const DEFAULT_EXTENSION: &str = "txt";
pub const DEFAULT_PREVIEW_LINES: usize = 10;

/// Command-line arguments for the cheatsheet tool
#[derive(Debug, Parser)]
#[command(name = "cheatsheet")]
#[command(about = "Browse and edit categorized command cheat-sheets")]
#[command(version)]
pub struct Args {
    /// Directory holding one text file per category
    #[arg(long, help = "Directory containing category files")]
    pub docs_dir: Option<PathBuf>,

    /// Extension of category files
    #[arg(long, help = "Category file extension (default: txt)")]
    pub extension: Option<String>,

    /// Body lines shown inline before an entry is cut off
    #[arg(long, help = "Number of body lines shown in previews")]
    pub preview_lines: Option<usize>,

    /// Leave out unreadable category files instead of failing
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Log level
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Front end operations
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// List categories and entries, optionally filtered
    List {
        /// Case-insensitive text to search titles and bodies for
        query: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the full body of one entry
    Show { category: String, title: String },
    /// Create a new, empty category
    Add { name: String },
    /// Print the raw text of a category
    Cat { name: String },
    /// Replace a category's content, optionally renaming it
    Edit {
        name: String,
        /// New name for the category
        #[arg(long)]
        rename: Option<String>,
        /// Read the new content from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List categories and re-list whenever a category file changes
    Watch { query: Option<String> },
}

/// Settings readable from a config file; every key is optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub docs_dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub preview_lines: Option<usize>,
    pub skip_unreadable: Option<bool>,
}

impl FileConfig {
    /// Parse a config file, returning `None` when it does not exist
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(Some(config))
    }

    /// Fill keys missing here from `lower`
    fn or(self, lower: FileConfig) -> FileConfig {
        FileConfig {
            docs_dir: self.docs_dir.or(lower.docs_dir),
            extension: self.extension.or(lower.extension),
            preview_lines: self.preview_lines.or(lower.preview_lines),
            skip_unreadable: self.skip_unreadable.or(lower.skip_unreadable),
        }
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Category directory
    pub docs_dir: PathBuf,
    /// Category file extension, without the dot
    pub extension: String,
    /// Body lines shown inline
    pub preview_lines: usize,
    pub skip_unreadable: bool,
    /// Log level
    pub log_level: String,
    /// Project config file, if one was found
    pub project_config_path: Option<PathBuf>,
    /// Operation to run
    pub command: Command,
}

impl Config {
    /// Create configuration from command-line arguments, environment and config files
    pub fn from_args_and_env() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get working directory")?;
        let user_config = dirs::config_dir().map(|dir| dir.join("cheatsheet").join("config.toml"));
        Self::resolve(
            Args::parse(),
            std::env::var_os(DOCS_DIR_ENV).map(PathBuf::from),
            &cwd,
            user_config.as_deref(),
        )
    }

    /// Merge every source, highest precedence first:
    /// CLI, environment, project file, user file, defaults
    pub fn resolve(
        args: Args,
        env_docs_dir: Option<PathBuf>,
        project_dir: &Path,
        user_config: Option<&Path>,
    ) -> Result<Self> {
        let project_path = project_dir.join(PROJECT_CONFIG_FILE);
        let project = FileConfig::load(&project_path)?;
        let project_config_path = project.as_ref().map(|_| project_path);

        let user = match user_config {
            Some(path) => FileConfig::load(path)?.unwrap_or_default(),
            None => FileConfig::default(),
        };
        let files = project.unwrap_or_default().or(user);

        let docs_dir = args
            .docs_dir
            .or(env_docs_dir)
            .or(files.docs_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCS_DIR));

        let extension = args
            .extension
            .or(files.extension)
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        let extension = extension.trim_start_matches('.').to_string();
        if extension.is_empty() {
            anyhow::bail!("Category file extension must not be empty");
        }

        Ok(Config {
            docs_dir,
            extension,
            preview_lines: args
                .preview_lines
                .or(files.preview_lines)
                .unwrap_or(DEFAULT_PREVIEW_LINES),
            skip_unreadable: args.skip_unreadable || files.skip_unreadable.unwrap_or(false),
            log_level: args.log_level,
            project_config_path,
            command: args.command.unwrap_or(Command::List {
                query: None,
                json: false,
            }),
        })
    }

    pub fn has_project_config(&self) -> bool {
        self.project_config_path.is_some()
    }

    /// How unreadable category files are handled on load
    pub fn load_policy(&self) -> LoadPolicy {
        if self.skip_unreadable {
            LoadPolicy::SkipUnreadable
        } else {
            LoadPolicy::Strict
        }
    }
}
