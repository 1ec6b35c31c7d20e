//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Ensure terminal state is restored on application exit, even during panics.
//! - Manage raw mode and alternate screen cleanup via Drop trait.
//!
//! Does NOT handle:
//! - Initial terminal setup (see `TerminalGuard::enter`).
//!
//! Invariants / Assumptions:
//! - Must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Guard that restores the terminal on drop.
///
/// Restoration runs on normal exit, early `?` returns, and panics alike.
pub struct TerminalGuard {
    no_mouse: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen, capturing the mouse unless `no_mouse`.
    pub fn enter(no_mouse: bool) -> std::io::Result<Self> {
        enable_raw_mode()?;
        // Build the guard first so a failed execute still restores raw mode.
        let guard = Self { no_mouse };
        let mut stdout = std::io::stdout();
        if no_mouse {
            execute!(stdout, EnterAlternateScreen)?;
        } else {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        }
        Ok(guard)
    }

    pub fn mouse_enabled(&self) -> bool {
        !self.no_mouse
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored; there is nothing left to report them to.
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.no_mouse {
            let _ = execute!(stdout, LeaveAlternateScreen);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        }
    }
}
