//! Runtime components for the demo application.
//!
//! This module contains the runtime infrastructure for the demo:
//! - Terminal management (TerminalGuard)
//! - Configuration loading
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `coversheet_tui::app` and `coversheet_tui::ui`).
//! - Sheet presentation (see `coversheet_tui::sheet`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.

pub mod config;
pub mod terminal;
