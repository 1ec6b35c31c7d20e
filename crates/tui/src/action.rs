//! Action protocol for the demo event loop.
//!
//! Input events, frame ticks, and sheet dismissals all flow through one
//! channel as `Action`s and are applied to the `App` on the UI loop.

use crossterm::event::{KeyEvent, MouseEvent};

/// Which of the two demo sheets an action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    Half,
    Quarter,
}

impl SheetKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Half => "1/2",
            Self::Quarter => "1/4",
        }
    }
}

/// Unified action type for the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // System
    /// Quit the application
    Quit,
    /// Advance timers and animations
    Tick,
    /// Terminal resized to (width, height)
    Resize(u16, u16),

    // Input
    /// Raw keyboard input event
    Input(KeyEvent),
    /// Raw mouse input event
    Mouse(MouseEvent),

    // Sheets
    /// Present a sheet
    ShowSheet(SheetKind),
    /// Caller-triggered dismiss of the topmost sheet
    DismissSheet,
    /// A sheet finished its dismiss sequence
    SheetDismissed(SheetKind),

    // Appearance
    /// Switch to the next color theme
    CycleTheme,
}
