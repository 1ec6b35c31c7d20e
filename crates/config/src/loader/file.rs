//! JSON config file loading.
//!
//! Responsibilities:
//! - Parse the optional JSON config file named by `--config-path` or `COVERSHEET_CONFIG_PATH`.
//! - Apply file values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Writing config files back to disk.
//!
//! Invariants:
//! - File values are applied after environment variables and never overwrite them.
//! - An explicitly named file that cannot be read is an error, never silently skipped.
//! - Unknown keys are rejected so typos surface at startup.

use serde::Deserialize;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::{ColorTheme, Curve};

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    reveal_delay_ms: Option<u64>,
    dismiss_delay_ms: Option<u64>,
    transition_ms: Option<u64>,
    curve: Option<Curve>,
    backdrop_opacity: Option<f32>,
    defocus_level: Option<f32>,
    theme: Option<ColorTheme>,
}

/// Apply the config file to the loader, if a path is set.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let Some(path) = loader.config_path().cloned() else {
        return Ok(());
    };

    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.clone(),
        source,
    })?;
    let file: ConfigFile =
        serde_json::from_str(&raw).map_err(|source| ConfigError::ConfigFileParse {
            path: path.clone(),
            source,
        })?;

    tracing::debug!(path = %path.display(), "Applying config file");

    if let Some(ms) = file.reveal_delay_ms {
        loader.set_reveal_delay_ms(ms);
    }
    if let Some(ms) = file.dismiss_delay_ms {
        loader.set_dismiss_delay_ms(ms);
    }
    if let Some(ms) = file.transition_ms {
        loader.set_transition_ms(ms);
    }
    if let Some(curve) = file.curve {
        loader.set_curve(curve);
    }
    if let Some(opacity) = file.backdrop_opacity {
        loader.set_backdrop_opacity(opacity);
    }
    if let Some(level) = file.defocus_level {
        loader.set_defocus_level(level);
    }
    if let Some(theme) = file.theme {
        loader.set_theme(theme);
    }

    Ok(())
}
