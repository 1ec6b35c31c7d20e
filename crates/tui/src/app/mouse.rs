//! Mouse event handling for the demo.
//!
//! Responsibilities:
//! - Give mounted sheets first refusal, topmost first.
//! - Map clicks on the host buttons to `ShowSheet`.
//!
//! Does NOT handle:
//! - Backdrop hit-testing (see `CoverSheet::handle_mouse`).

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::action::{Action, SheetKind};
use crate::app::App;
use crate::ui::HostLayout;

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Option<Action> {
        let area = self.last_area;
        for kind in [SheetKind::Quarter, SheetKind::Half] {
            if self.sheet_mut(kind).handle_mouse(mouse, area, now) {
                return None;
            }
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => HostLayout::new(area)
                .button_at(Position::new(mouse.column, mouse.row))
                .map(Action::ShowSheet),
            _ => None,
        }
    }
}
