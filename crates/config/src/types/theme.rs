//! Theme types for cover sheet configuration.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//! - Provide conversion from `ColorTheme` to `Theme`.
//!
//! Does NOT handle:
//! - Actual rendering (see TUI crate).
//!
//! Invariants:
//! - `ColorTheme` is the persisted representation; `Theme` is the runtime representation.
//! - `Theme` is intentionally NOT serializable - always persist `ColorTheme`.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    Dark,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Next theme in the cycle (used by the demo's "t" key).
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Default => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::HighContrast,
            Self::HighContrast => Self::Monochrome,
            Self::Monochrome => Self::Default,
        }
    }

    /// Parse a theme name as written in env vars and CLI flags.
    pub fn parse_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "default" => Some(Self::Default),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "high_contrast" => Some(Self::HighContrast),
            "monochrome" | "mono" => Some(Self::Monochrome),
            _ => None,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Expanded runtime theme.
///
/// Invariants:
/// - This is intentionally **not serialized**. Persist `ColorTheme` and expand on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Buttons
    pub button_fg: Color,
    pub button_bg: Color,

    // Overlay
    pub sheet_bg: Color,
    pub sheet_text: Color,
    pub backdrop: Color,
    pub shadow: Color,
}

impl Theme {
    /// Expand a persisted `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Reset,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Cyan,
                title: Color::Cyan,
                accent: Color::Yellow,

                button_fg: Color::Black,
                button_bg: Color::Cyan,

                sheet_bg: Color::White,
                sheet_text: Color::Black,
                backdrop: Color::Black,
                shadow: Color::DarkGray,
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::DarkGray,
                border: Color::Blue,
                title: Color::Blue,
                accent: Color::Magenta,

                button_fg: Color::White,
                button_bg: Color::Blue,

                sheet_bg: Color::Rgb(250, 250, 250),
                sheet_text: Color::Black,
                backdrop: Color::Black,
                shadow: Color::Gray,
            },
            ColorTheme::Dark => Self {
                background: Color::Rgb(24, 24, 24),
                text: Color::Rgb(220, 220, 220),
                text_dim: Color::Rgb(140, 140, 140),
                border: Color::Rgb(90, 140, 200),
                title: Color::Rgb(120, 170, 230),
                accent: Color::Rgb(230, 190, 90),

                button_fg: Color::Rgb(24, 24, 24),
                button_bg: Color::Rgb(120, 170, 230),

                sheet_bg: Color::Rgb(48, 48, 48),
                sheet_text: Color::Rgb(230, 230, 230),
                backdrop: Color::Rgb(0, 0, 0),
                shadow: Color::Rgb(10, 10, 10),
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::White,
                border: Color::Yellow,
                title: Color::Yellow,
                accent: Color::LightYellow,

                button_fg: Color::Black,
                button_bg: Color::Yellow,

                sheet_bg: Color::White,
                sheet_text: Color::Black,
                backdrop: Color::Black,
                shadow: Color::Gray,
            },
            ColorTheme::Monochrome => Self {
                background: Color::Reset,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::White,
                title: Color::White,
                accent: Color::White,

                button_fg: Color::Black,
                button_bg: Color::White,

                sheet_bg: Color::Gray,
                sheet_text: Color::Black,
                backdrop: Color::Black,
                shadow: Color::DarkGray,
            },
        }
    }
}

impl From<ColorTheme> for Theme {
    fn from(value: ColorTheme) -> Self {
        Self::from_color_theme(value)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}
