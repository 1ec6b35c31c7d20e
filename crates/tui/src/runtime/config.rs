//! Configuration loading for the demo.
//!
//! Responsibilities:
//! - Merge CLI flags, environment, `.env`, and the optional config file
//!   into a validated `SheetConfig`.
//!
//! Does NOT handle:
//! - Parsing individual sources (see `coversheet_config::ConfigLoader`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > config file > defaults.
//! - `load_dotenv()` runs before the environment is read.

use anyhow::{Context, Result};
use coversheet_config::{ConfigLoader, SheetConfig};

use crate::cli::Cli;

/// Build the sheet configuration from every source.
pub fn load_sheet_config(cli: &Cli) -> Result<SheetConfig> {
    loader_from_cli(cli)
        .load_dotenv()?
        .from_env()?
        .from_file()?
        .build()
        .context("Invalid cover sheet configuration")
}

fn loader_from_cli(cli: &Cli) -> ConfigLoader {
    let mut loader = ConfigLoader::new();

    if let Some(path) = &cli.config_path {
        loader = loader.with_config_path(path.clone());
    }
    if let Some(ms) = cli.reveal_delay_ms {
        loader = loader.with_reveal_delay_ms(ms);
    }
    if let Some(ms) = cli.dismiss_delay_ms {
        loader = loader.with_dismiss_delay_ms(ms);
    }
    if let Some(theme) = cli.theme {
        loader = loader.with_theme(theme);
    }
    loader
}
