//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load sheet configuration from `.env` files, environment variables, and a JSON file.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Rendering or scheduling with the loaded values (see the TUI crate).
//!
//! Invariants / Assumptions:
//! - Each source only fills values that a higher-precedence source left unset.
//! - Precedence: builder methods (CLI) > environment variables > config file > defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod file;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
