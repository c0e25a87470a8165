//! Global CLI options shared across all commands

use std::path::{Path, PathBuf};

use skyquote::config::Config;
use skyquote::error::Result;
use skyquote::frontend::SqliteStore;

use crate::cli::{Cli, OutputFormat};

/// Global flags, captured once in `main` and handed to every handler.
///
/// Precedence is CLI flag > environment variable > config file > default;
/// this struct holds the first two layers.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.skyquote/config.yaml)
    pub config: Option<String>,

    /// Custom local storage directory
    pub data_dir: Option<PathBuf>,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            data_dir: cli.data_dir.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_at(self.config_ref())
    }

    /// Directory holding the local storage database
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(SqliteStore::data_dir()?),
        }
    }

    /// Open local storage (creating it if needed)
    pub fn open_store(&self) -> Result<SqliteStore> {
        let dir = self.data_dir()?;
        Ok(SqliteStore::open_at(Path::new(&dir))?)
    }
}
