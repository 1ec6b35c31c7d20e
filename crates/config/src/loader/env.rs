//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `COVERSHEET_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Loading from the config file (see file.rs).
//! - Validating ranges (see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Unparseable values return ConfigError::InvalidValue.

use std::path::PathBuf;
use std::str::FromStr;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::{ColorTheme, Curve};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(var: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(var)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: var.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(ms) = parse_env("COVERSHEET_REVEAL_DELAY_MS", "must be a number")? {
        loader.set_reveal_delay_ms(ms);
    }
    if let Some(ms) = parse_env("COVERSHEET_DISMISS_DELAY_MS", "must be a number")? {
        loader.set_dismiss_delay_ms(ms);
    }
    if let Some(ms) = parse_env("COVERSHEET_TRANSITION_MS", "must be a number")? {
        loader.set_transition_ms(ms);
    }
    if let Some(opacity) = parse_env("COVERSHEET_BACKDROP_OPACITY", "must be a decimal number")? {
        loader.set_backdrop_opacity(opacity);
    }
    if let Some(level) = parse_env("COVERSHEET_DEFOCUS_LEVEL", "must be a decimal number")? {
        loader.set_defocus_level(level);
    }
    if let Some(raw) = env_var_or_none("COVERSHEET_CURVE") {
        let curve = Curve::parse_name(&raw).ok_or_else(|| ConfigError::InvalidValue {
            var: "COVERSHEET_CURVE".to_string(),
            message: "must be one of linear, ease_in, ease_out, ease_in_out".to_string(),
        })?;
        loader.set_curve(curve);
    }
    if let Some(raw) = env_var_or_none("COVERSHEET_THEME") {
        let theme = ColorTheme::parse_name(&raw).ok_or_else(|| ConfigError::InvalidValue {
            var: "COVERSHEET_THEME".to_string(),
            message: "must be one of default, light, dark, high_contrast, monochrome".to_string(),
        })?;
        loader.set_theme(theme);
    }
    if let Some(path) = env_var_or_none("COVERSHEET_CONFIG_PATH") {
        loader.set_config_path(PathBuf::from(path));
    }

    Ok(())
}
