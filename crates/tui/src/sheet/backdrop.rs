//! The dimmed, tap-sensitive layer behind the sheet content.
//!
//! Responsibilities:
//! - Schedule the content reveal when mounted.
//! - Run the timed half of the dismiss sequence when tapped.
//! - Dim everything beneath it at a constant level.
//!
//! Does NOT handle:
//! - Its own mount/unmount. The owning `PartialSheet` exists exactly as long
//!   as the backdrop is mounted.
//! - Hit-testing (see `CoverSheet::handle_mouse`).

use std::time::Instant;

use coversheet_config::{SheetConfig, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use super::timer::{DeferredQueue, MountId};

/// Deferred actions a backdrop schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetCue {
    /// Show the content (Opening -> Open).
    Reveal,
    /// Unmount the backdrop and report the dismissal (Closing -> Closed).
    Unmount,
}

/// Full-area dim layer with the reveal/dismiss timing trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    config: SheetConfig,
    tint: Color,
}

impl Backdrop {
    pub fn new(config: SheetConfig, theme: &Theme) -> Self {
        Self {
            config,
            tint: theme.backdrop,
        }
    }

    /// Constant dim level while mounted.
    pub fn opacity(&self) -> f32 {
        self.config.backdrop_opacity
    }

    /// Schedule the content reveal for a fresh mount.
    pub fn on_mount(&self, mount: MountId, now: Instant, queue: &mut DeferredQueue<SheetCue>) {
        queue.schedule(mount, self.config.reveal_delay, now, SheetCue::Reveal);
    }

    /// Cancel a pending reveal of this mount and schedule the unmount.
    ///
    /// Returns true if a reveal was still pending.
    pub fn on_tap(&self, mount: MountId, now: Instant, queue: &mut DeferredQueue<SheetCue>) -> bool {
        let cancelled =
            queue.cancel_where(|d| d.mount == mount && d.action == SheetCue::Reveal) > 0;
        queue.schedule(mount, self.config.dismiss_delay, now, SheetCue::Unmount);
        cancelled
    }
}

impl Widget for &Backdrop {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_area(buf, area, 1.0 - self.opacity(), Some(self.tint));
    }
}

/// Darken every cell in `area`, keeping `keep` (0.0 to 1.0) of each RGB channel.
///
/// Cells with named or indexed colors cannot be scaled; their foreground gets
/// the DIM modifier and their background is replaced by `fallback_bg` when given.
pub(crate) fn dim_area(buf: &mut Buffer, area: Rect, keep: f32, fallback_bg: Option<Color>) {
    if keep >= 1.0 {
        return;
    }
    let keep = keep.max(0.0);
    let area = area.intersection(buf.area);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let Some(cell) = buf.cell_mut((x, y)) else {
                continue;
            };
            let style = cell.style();

            match style.fg.and_then(|c| scale(c, keep)) {
                Some(fg) => {
                    cell.set_fg(fg);
                }
                None => {
                    cell.set_style(Style::new().add_modifier(Modifier::DIM));
                }
            }

            match style.bg.and_then(|c| scale(c, keep)) {
                Some(bg) => {
                    cell.set_bg(bg);
                }
                None => {
                    if let Some(fallback) = fallback_bg {
                        cell.set_bg(fallback);
                    }
                }
            }
        }
    }
}

fn scale(color: Color, keep: f32) -> Option<Color> {
    match color {
        Color::Rgb(r, g, b) => {
            let s = |c: u8| (f32::from(c) * keep).round() as u8;
            Some(Color::Rgb(s(r), s(g), s(b)))
        }
        _ => None,
    }
}
