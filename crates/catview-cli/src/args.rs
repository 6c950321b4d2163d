use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catview")]
#[command(about = "Search and browse a published product catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Catalog CSV location (URL or path); overrides the config file
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Build metadata location (URL or path); overrides the config file
    #[arg(long, global = true)]
    pub metadata: Option<String>,

    /// Config file (default: <config dir>/catview/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive viewer (default)
    View,

    /// Load once and print the matching products
    List {
        /// Case-insensitive text matched against name and category
        #[arg(long, default_value = "")]
        query: String,

        /// Exact category to keep
        #[arg(long)]
        category: Option<String>,
    },

    /// Print the distinct categories
    Categories {
        /// Only the N largest categories, with product counts
        #[arg(long)]
        top: Option<usize>,
    },

    /// Print the catalog build metadata
    Meta,
}
