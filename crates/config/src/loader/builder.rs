//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from environment variables, a JSON file, and direct builder methods.
//! - Validate and build the final `SheetConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file parsing (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Setters used by `from_env` and `from_file` never overwrite a value that is already set.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::MAX_PHASE_DELAY_MS;
use crate::types::{ColorTheme, Curve, SheetConfig};

/// Configuration loader that builds a `SheetConfig` from layered sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    reveal_delay_ms: Option<u64>,
    dismiss_delay_ms: Option<u64>,
    transition_ms: Option<u64>,
    curve: Option<Curve>,
    backdrop_opacity: Option<f32>,
    defocus_level: Option<f32>,
    theme: Option<ColorTheme>,
    config_path: Option<PathBuf>,
}

macro_rules! fill_unset {
    ($($setter:ident => $field:ident: $ty:ty),* $(,)?) => {
        $(
            pub(crate) fn $setter(&mut self, value: $ty) {
                if self.$field.is_none() {
                    self.$field = Some(value);
                }
            }
        )*
    };
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `.env` from the working directory unless `DOTENV_DISABLED` is set.
    ///
    /// A missing `.env` file is not an error.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn dotenv_disabled() -> bool {
        std::env::var("DOTENV_DISABLED")
            .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
            .unwrap_or(false)
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Use a JSON config file. Applied by `from_file`.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn with_reveal_delay_ms(mut self, ms: u64) -> Self {
        self.reveal_delay_ms = Some(ms);
        self
    }

    pub fn with_dismiss_delay_ms(mut self, ms: u64) -> Self {
        self.dismiss_delay_ms = Some(ms);
        self
    }

    pub fn with_transition_ms(mut self, ms: u64) -> Self {
        self.transition_ms = Some(ms);
        self
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = Some(curve);
        self
    }

    pub fn with_backdrop_opacity(mut self, opacity: f32) -> Self {
        self.backdrop_opacity = Some(opacity);
        self
    }

    pub fn with_defocus_level(mut self, level: f32) -> Self {
        self.defocus_level = Some(level);
        self
    }

    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Fill unset values from `COVERSHEET_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Fill unset values from the config file, if a path was given.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    fill_unset! {
        set_reveal_delay_ms => reveal_delay_ms: u64,
        set_dismiss_delay_ms => dismiss_delay_ms: u64,
        set_transition_ms => transition_ms: u64,
        set_curve => curve: Curve,
        set_backdrop_opacity => backdrop_opacity: f32,
        set_defocus_level => defocus_level: f32,
        set_theme => theme: ColorTheme,
        set_config_path => config_path: PathBuf,
    }

    /// Build and validate the final configuration.
    ///
    /// Checks:
    /// - both phase delays are within 1..=MAX_PHASE_DELAY_MS
    /// - the transition is no longer than the shorter phase delay
    /// - backdrop opacity and defocus level are within [0, 1]
    pub fn build(self) -> Result<SheetConfig, ConfigError> {
        let defaults = SheetConfig::default();

        let reveal_ms = self
            .reveal_delay_ms
            .unwrap_or(defaults.reveal_delay.as_millis() as u64);
        let dismiss_ms = self
            .dismiss_delay_ms
            .unwrap_or(defaults.dismiss_delay.as_millis() as u64);
        let transition_ms = self
            .transition_ms
            .unwrap_or(defaults.transition_duration.as_millis() as u64);

        Self::validate_delay("reveal delay", reveal_ms)?;
        Self::validate_delay("dismiss delay", dismiss_ms)?;

        let limit_ms = reveal_ms.min(dismiss_ms);
        if transition_ms > limit_ms {
            return Err(ConfigError::TransitionTooLong {
                transition_ms,
                limit_ms,
            });
        }

        let backdrop_opacity = self.backdrop_opacity.unwrap_or(defaults.backdrop_opacity);
        Self::validate_unit("backdrop opacity", backdrop_opacity)?;
        let defocus_level = self.defocus_level.unwrap_or(defaults.defocus_level);
        Self::validate_unit("defocus level", defocus_level)?;

        Ok(SheetConfig {
            reveal_delay: Duration::from_millis(reveal_ms),
            dismiss_delay: Duration::from_millis(dismiss_ms),
            transition_duration: Duration::from_millis(transition_ms),
            curve: self.curve.unwrap_or(defaults.curve),
            backdrop_opacity,
            defocus_level,
            theme: self.theme.unwrap_or(defaults.theme),
        })
    }

    fn validate_delay(name: &'static str, value_ms: u64) -> Result<(), ConfigError> {
        if value_ms == 0 || value_ms > MAX_PHASE_DELAY_MS {
            return Err(ConfigError::InvalidDelay {
                name,
                value_ms,
                max_ms: MAX_PHASE_DELAY_MS,
            });
        }
        Ok(())
    }

    fn validate_unit(name: &'static str, value: f32) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::OutOfRange { name, value });
        }
        Ok(())
    }
}
