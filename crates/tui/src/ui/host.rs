//! The demo host screen: a greeting, two buttons, and a key hint footer.
//!
//! Responsibilities:
//! - Compute where the buttons sit so rendering and click handling agree.
//! - Render the host content beneath the sheets.
//!
//! Does NOT handle:
//! - Dispatching clicks (see `App::handle_mouse`).

use coversheet_config::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::action::SheetKind;
use crate::ui::theme::ThemeExt;

pub const GREETING: &str = "Hello, world!";
pub const FOOTER_HINT: &str = "h: 1/2 sheet  q: 1/4 sheet  Esc: dismiss  t: theme  x: quit";

/// Button label for a sheet kind.
pub fn button_label(kind: SheetKind) -> String {
    format!(" Show {} Sheet ", kind.label())
}

/// Positions of everything on the host screen for a given area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostLayout {
    pub greeting: Rect,
    pub half_button: Rect,
    pub quarter_button: Rect,
    pub footer: Rect,
}

impl HostLayout {
    pub fn new(area: Rect) -> Self {
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let [greeting, _, half_row, _, quarter_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(body);

        Self {
            greeting,
            half_button: centered_button(half_row, SheetKind::Half),
            quarter_button: centered_button(quarter_row, SheetKind::Quarter),
            footer,
        }
    }

    /// The button under `position`, if any.
    pub fn button_at(&self, position: Position) -> Option<SheetKind> {
        if self.half_button.contains(position) {
            Some(SheetKind::Half)
        } else if self.quarter_button.contains(position) {
            Some(SheetKind::Quarter)
        } else {
            None
        }
    }
}

fn centered_button(row: Rect, kind: SheetKind) -> Rect {
    let width = button_label(kind).chars().count() as u16;
    let [button] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    button
}

/// The host screen widget.
#[derive(Debug, Clone, Copy)]
pub struct HostView {
    theme: Theme,
}

impl HostView {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HostView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = HostLayout::new(area);
        buf.set_style(area, self.theme.text());

        Paragraph::new(Line::from(GREETING).style(self.theme.title()))
            .alignment(Alignment::Center)
            .render(layout.greeting, buf);

        for (kind, rect) in [
            (SheetKind::Half, layout.half_button),
            (SheetKind::Quarter, layout.quarter_button),
        ] {
            Paragraph::new(button_label(kind))
                .style(self.theme.button())
                .render(rect, buf);
        }

        Paragraph::new(Line::from(FOOTER_HINT).style(self.theme.text_dim()))
            .alignment(Alignment::Center)
            .render(layout.footer, buf);
    }
}
