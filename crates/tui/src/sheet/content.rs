//! Capability trait for anything a sheet can display.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Content rendered inside the sheet frame.
///
/// Implemented for every type whose shared reference is a ratatui `Widget`
/// (`Paragraph`, `Block`, `List`, custom widgets implementing
/// `Widget for &T`), so callers rarely implement it by hand.
pub trait SheetContent {
    /// Render into `area`, which is already sized and positioned to the
    /// sheet frame. Anything drawn outside `area` is discarded.
    fn render_content(&self, area: Rect, buf: &mut Buffer);
}

impl<T> SheetContent for T
where
    for<'a> &'a T: Widget,
{
    fn render_content(&self, area: Rect, buf: &mut Buffer) {
        Widget::render(self, area, buf);
    }
}
