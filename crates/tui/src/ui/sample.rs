//! Sample content shown inside the demo sheets.

use coversheet_config::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Widget},
};

use crate::action::SheetKind;
use crate::ui::theme::ThemeExt;

const BODY: [&str; 2] = ["Something to show in this sheet", "Whatever you want."];

/// A title, a divider, and two lines of body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSheet {
    title: String,
    theme: Theme,
}

impl SampleSheet {
    pub fn new(title: impl Into<String>, theme: Theme) -> Self {
        Self {
            title: title.into(),
            theme,
        }
    }

    /// The content of the half or quarter demo sheet.
    pub fn for_kind(kind: SheetKind, theme: Theme) -> Self {
        Self::new(format!("{} with Modifier", kind.label()), theme)
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Widget for &SampleSheet {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title_area, body_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        Paragraph::new(Line::from(self.title.as_str()).style(self.theme.sheet_title()))
            .alignment(Alignment::Center)
            .block(
                Block::new()
                    .borders(Borders::BOTTOM)
                    .border_style(self.theme.sheet())
                    .padding(Padding::horizontal(1)),
            )
            .style(self.theme.sheet())
            .render(title_area, buf);

        Paragraph::new(BODY.map(Line::from).to_vec())
            .alignment(Alignment::Center)
            .style(self.theme.sheet())
            .render(body_area, buf);
    }
}
