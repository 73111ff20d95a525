//! Command-line surface: argument parsing and command execution.

mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, ConfigError};
use crate::creators::CreatorId;

pub use commands::{execute, CommandError};

#[derive(Parser, Debug)]
#[command(name = "creatorctl")]
#[command(author, version, about = "Browse and edit the content creator catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the config file (default: <config dir>/creator-catalog/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the store base URL
    #[arg(long, global = true)]
    pub store_url: Option<String>,

    /// Override the store access key
    #[arg(long, global = true)]
    pub store_key: Option<String>,

    /// Print records and acknowledgements as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every creator
    List,
    /// Show one creator
    Show {
        /// Creator id
        id: CreatorId,
    },
    /// Add a new creator
    Add(AddArgs),
    /// Edit an existing creator
    Edit(EditArgs),
    /// Delete a creator
    Delete {
        /// Creator id
        id: CreatorId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Replace every creator with the sample set
    Seed {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub url: String,
    #[arg(long)]
    pub description: String,
    /// Image URL; leave empty for none
    #[arg(long, default_value = "")]
    pub image_url: String,
}

/// Fields left out keep their stored value.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct EditArgs {
    /// Creator id
    pub id: CreatorId,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Image URL; pass an empty string to clear it
    #[arg(long)]
    pub image_url: Option<String>,
}

impl Cli {
    /// Resolve configuration: file, then environment, then flags.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        config.apply_env(|name| std::env::var(name).ok());

        if let Some(url) = &self.store_url {
            config.store.base_url = Some(url.clone());
        }
        if let Some(key) = &self.store_key {
            config.store.api_key = Some(key.clone());
        }
        config.normalize();
        config.validate()?;
        Ok(config)
    }
}
