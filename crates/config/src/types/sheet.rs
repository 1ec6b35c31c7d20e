//! Sheet timing and appearance settings.
//!
//! Responsibilities:
//! - Hold the two phase delays, the content transition, and dim levels.
//! - Provide the easing curves used by content transitions.
//!
//! Does NOT handle:
//! - Validation (see `loader::builder`).
//! - Scheduling or rendering (see the TUI crate).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use super::theme::ColorTheme;
use crate::constants::{
    DEFAULT_BACKDROP_OPACITY, DEFAULT_DEFOCUS_LEVEL, DEFAULT_DISMISS_DELAY_MS,
    DEFAULT_REVEAL_DELAY_MS, DEFAULT_TRANSITION_MS,
};

/// Easing curve applied to a transition's linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Curve {
    /// Map linear progress `t` in [0, 1] onto the curve.
    ///
    /// Input outside [0, 1] is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }

    /// Parse a curve name as written in env vars and config files.
    pub fn parse_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "linear" => Some(Self::Linear),
            "ease_in" => Some(Self::EaseIn),
            "ease_out" => Some(Self::EaseOut),
            "ease_in_out" | "ease" => Some(Self::EaseInOut),
            _ => None,
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Linear => "linear",
            Self::EaseIn => "ease_in",
            Self::EaseOut => "ease_out",
            Self::EaseInOut => "ease_in_out",
        })
    }
}

/// Timing and appearance of a cover sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetConfig {
    /// Backdrop mount to content reveal.
    pub reveal_delay: Duration,
    /// Content hide to backdrop unmount.
    pub dismiss_delay: Duration,
    /// Duration of the content slide in either direction.
    pub transition_duration: Duration,
    /// Easing of the content slide.
    pub curve: Curve,
    /// Constant dim level of the backdrop (0.0 to 1.0).
    pub backdrop_opacity: f32,
    /// Defocus intensity applied to the host while mounted (0.0 to 1.0).
    pub defocus_level: f32,
    pub theme: ColorTheme,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
            dismiss_delay: Duration::from_millis(DEFAULT_DISMISS_DELAY_MS),
            transition_duration: Duration::from_millis(DEFAULT_TRANSITION_MS),
            curve: Curve::default(),
            backdrop_opacity: DEFAULT_BACKDROP_OPACITY,
            defocus_level: DEFAULT_DEFOCUS_LEVEL,
            theme: ColorTheme::default(),
        }
    }
}
