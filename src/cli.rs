//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for smartsearch using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive search widget in the terminal (default)
//! - **query**: One-shot search printing matching records
//! - **config**: Show, locate or initialize the configuration file
//!
//! # Examples
//!
//! ```
//! use smartsearch::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["smartsearch", "query", "savings", "--limit", "3"]);
//! match cli.get_command() {
//!     Commands::Query(args) => assert_eq!(args.limit, Some(3)),
//!     _ => unreachable!(),
//! }
//! ```

use crate::record::{Category, GroupField, Status};
use crate::search::{SortOrder, SortStrategy};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "smartsearch")]
#[command(about = "Search, rank and group in-memory records", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON file with an array of records (defaults to the bundled banking demo)
    #[arg(short = 'd', long = "data", value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Use this configuration file instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (the interactive view never logs to the terminal)
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive search widget (default)
    #[command(visible_alias = "b")]
    Browse(BrowseArgs),

    /// Search once and print the results
    #[command(visible_alias = "q")]
    Query(QueryArgs),

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Options of the interactive widget; unset flags fall back to the config file
#[derive(Args, Debug, Clone, Default)]
pub struct BrowseArgs {
    /// Show results as an inline card grid instead of a dropdown
    #[arg(long = "cards")]
    pub cards: bool,

    /// Search only when Enter is pressed
    #[arg(long = "submit")]
    pub submit: bool,

    /// Group results by a field (category, status, currency, metadata.<key>, ...)
    #[arg(short = 'g', long = "group-by", value_name = "FIELD")]
    pub group_by: Option<GroupField>,

    /// Minimum query length before results appear
    #[arg(long = "min-length", value_name = "N")]
    pub min_length: Option<usize>,

    /// Maximum number of visible results
    #[arg(short = 'n', long = "max-results", value_name = "N")]
    pub max_results: Option<usize>,

    /// Debounce delay in milliseconds
    #[arg(long = "debounce-ms", value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// One line per result: id and title
    #[arg(long = "compact")]
    pub compact: bool,
}

/// One-shot search parameters
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Text to search for (empty matches everything)
    #[arg(value_name = "TEXT", default_value = "")]
    pub text: String,

    /// Only records in these categories (repeatable)
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub categories: Vec<Category>,

    /// Only records with these statuses (repeatable)
    #[arg(short = 's', long = "status", value_name = "STATUS")]
    pub statuses: Vec<Status>,

    /// Sort strategy: relevance, date, amount or alphabetical
    #[arg(long = "sort", value_name = "STRATEGY", default_value = "relevance")]
    pub sort: SortStrategy,

    /// Sort direction: asc or desc
    #[arg(long = "order", value_name = "ORDER", default_value = "desc")]
    pub order: SortOrder,

    /// Minimum amount (inclusive)
    #[arg(long = "min-amount", value_name = "AMOUNT", allow_negative_numbers = true)]
    pub min_amount: Option<f64>,

    /// Maximum amount (inclusive)
    #[arg(long = "max-amount", value_name = "AMOUNT", allow_negative_numbers = true)]
    pub max_amount: Option<f64>,

    /// Created on or after this date (YYYY-MM-DD or RFC 3339)
    #[arg(long = "since", value_name = "DATE")]
    pub since: Option<String>,

    /// Created on or before this date (YYYY-MM-DD or RFC 3339)
    #[arg(long = "until", value_name = "DATE")]
    pub until: Option<String>,

    /// Group output by a field
    #[arg(short = 'g', long = "group-by", value_name = "FIELD")]
    pub group_by: Option<GroupField>,

    /// Print at most N records
    #[arg(short = 'n', long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Print JSON instead of text
    #[arg(long = "json")]
    pub json: bool,
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Write a default configuration file (keeps an existing one)
    Init,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Browse(BrowseArgs::default()))
    }
}
