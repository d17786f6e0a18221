//! Smartsearch CLI application entry point
//!
//! Runs the search widget interactively in the terminal, or searches once
//! and prints the results.
//!
//! # Usage
//!
//! ```bash
//! # Interactive search over the bundled banking records (default command)
//! smartsearch
//! smartsearch browse --cards --group-by category
//! smartsearch browse --compact
//!
//! # Search only when Enter is pressed, over your own records
//! smartsearch -d records.json browse --submit
//!
//! # One-shot search
//! smartsearch query premium --category account --sort amount --order asc
//! smartsearch q card --json
//!
//! # Configuration
//! smartsearch config show
//! smartsearch config init
//! ```
//!
//! # Configuration
//!
//! Widget defaults, the record file and the log level are read from the
//! user's config directory (`~/.config/smartsearch/config.toml` on Linux),
//! which is created with defaults on first run. `RUST_LOG` overrides the
//! configured log level.

use smartsearch::{
    SmartSearchError,
    cli::{Cli, Commands},
    commands,
    config::SmartSearchConfig,
};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, SmartSearchError>;

/// Install the log subscriber
///
/// The interactive view owns the terminal, so it only logs when a log file
/// is given.
fn init_tracing(level: &str, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let command = cli.get_command();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => SmartSearchConfig::config_path()?,
    };

    if let Commands::Config { command: action } = &command {
        let config = if config_path.exists() {
            SmartSearchConfig::load_from(&config_path)?
        } else {
            SmartSearchConfig::default()
        };
        init_tracing(&config.log_level, cli.log_file.as_deref(), false)?;
        return commands::config(*action, &config, &config_path, cli.quiet);
    }

    let config = SmartSearchConfig::load_from(&config_path)?;
    let interactive = matches!(command, Commands::Browse(_));
    init_tracing(&config.log_level, cli.log_file.as_deref(), interactive)?;
    tracing::debug!(path = %config_path.display(), "configuration in use");

    let records = commands::load_records(cli.data.as_deref(), &config)?;

    match &command {
        Commands::Browse(args) => commands::browse(records, args, &config, cli.quiet),
        Commands::Query(args) => commands::query(&records, args, cli.quiet),
        Commands::Config { .. } => Ok(()),
    }
}
