//! Configuration for the cover sheet overlay.
//!
//! This crate provides the tunable timing, appearance, and theme settings
//! of the cover sheet, loaded from defaults, an optional JSON file, and
//! environment variables.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{ColorTheme, Curve, SheetConfig, Theme};
