//! TUI-specific theme helpers and style builders.
//!
//! This module extends `coversheet_config::Theme` with ergonomic helpers
//! for building ratatui `Style` objects consistently across the demo.

use coversheet_config::Theme;
use ratatui::style::{Modifier, Style};

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    /// Get the base text style.
    fn text(&self) -> Style;
    /// Get dimmed text style.
    fn text_dim(&self) -> Style;
    /// Get title style (title color + bold).
    fn title(&self) -> Style;
    /// Get border style.
    fn border(&self) -> Style;
    /// Get the clickable button style.
    fn button(&self) -> Style;
    /// Get the base style inside a sheet.
    fn sheet(&self) -> Style;
    /// Get the title style inside a sheet.
    fn sheet_title(&self) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn button(&self) -> Style {
        Style::default()
            .fg(self.button_fg)
            .bg(self.button_bg)
            .add_modifier(Modifier::BOLD)
    }

    fn sheet(&self) -> Style {
        Style::default().fg(self.sheet_text).bg(self.sheet_bg)
    }

    fn sheet_title(&self) -> Style {
        self.sheet().add_modifier(Modifier::BOLD)
    }
}
