//! Keyboard handling for the demo.
//!
//! While a sheet is mounted the host beneath it is blocked: only dismiss
//! and quit keys are honored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::{Action, SheetKind};
use crate::app::App;

impl App {
    /// Map a key press to an action, if it means anything right now.
    pub fn handle_input(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Char('x') => return Some(Action::Quit),
            KeyCode::Esc => {
                return self.any_sheet_mounted().then_some(Action::DismissSheet);
            }
            _ => {}
        }

        if self.any_sheet_mounted() {
            return None;
        }

        match key.code {
            KeyCode::Char('h') => Some(Action::ShowSheet(SheetKind::Half)),
            KeyCode::Char('q') => Some(Action::ShowSheet(SheetKind::Quarter)),
            KeyCode::Char('t') => Some(Action::CycleTheme),
            _ => None,
        }
    }
}
