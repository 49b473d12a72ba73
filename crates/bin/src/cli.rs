//! CLI argument definitions for the Prodcat binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use prodcat::{CatalogConfig, DuplicateIdPolicy};

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned columns
    Human,
    /// One JSON array
    Json,
}

/// Prodcat product catalog
#[derive(Parser, Debug)]
#[command(name = "prodcat")]
#[command(about = "Prodcat: product catalog with search, ranking and undo")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and run the interactive menu (default)
    Shell,
    /// Print the catalog without logging in
    List(ListArgs),
}

/// Catalog settings shared by every command
#[derive(clap::Args, Debug)]
pub struct CatalogArgs {
    /// JSON configuration file; flags below override its values
    #[arg(short, long, global = true, env = "PRODCAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog file to load at startup and save on exit
    #[arg(short = 'f', long, global = true, env = "PRODCAT_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Accept products whose id is already in use
    #[arg(long, global = true, env = "PRODCAT_ALLOW_DUPLICATE_IDS")]
    pub allow_duplicate_ids: bool,

    /// Maximum number of operations kept for undo
    #[arg(long, global = true, env = "PRODCAT_UNDO_DEPTH")]
    pub undo_depth: Option<usize>,

    /// Do not install the built-in admin accounts
    #[arg(long, global = true)]
    pub no_builtin_users: bool,
}

impl CatalogArgs {
    /// Builds the service configuration from the config file and flags.
    pub fn to_config(&self) -> prodcat::Result<CatalogConfig> {
        let mut config = match &self.config {
            Some(path) => CatalogConfig::load_json(path)?,
            None => CatalogConfig::default(),
        };
        if let Some(path) = &self.data_file {
            config = config.with_data_file(path);
        }
        if self.allow_duplicate_ids {
            config = config.with_duplicate_ids(DuplicateIdPolicy::Allow);
        }
        if self.undo_depth.is_some() {
            config = config.with_undo_depth(self.undo_depth);
        }
        if self.no_builtin_users {
            config = config.with_builtin_users(false);
        }
        Ok(config)
    }
}

/// Arguments for the list command
#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Only products in this category (exact match)
    #[arg(long, conflicts_with = "by_rating")]
    pub category: Option<String>,

    /// Highest rating first
    #[arg(long)]
    pub by_rating: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: Format,
}
