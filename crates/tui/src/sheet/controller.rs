//! Attaches a `PartialSheet` to a host widget, gated by the host's flag.
//!
//! Responsibilities:
//! - Mount a fresh sheet on the host's opening edge and tear it down on an
//!   external close.
//! - Own the deferred-action queue for every mount it creates.
//! - Report a completed dismissal through `on_dismiss`, exactly once.
//! - Route mouse input to the backdrop while mounted.
//! - Defocus the host while mounted.
//!
//! Does NOT handle:
//! - Storing the host's "is presented" flag. The host passes it in via `sync`.
//! - Scheduling wakeups. The host calls `tick` from its frame loop.

use std::fmt;
use std::time::Instant;

use coversheet_config::{SheetConfig, Theme};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    widgets::Widget,
};

use super::backdrop::{SheetCue, dim_area};
use super::content::SheetContent;
use super::height::HeightFactor;
use super::partial::{PartialSheet, SheetPhase, SheetTick};
use super::timer::{DeferredQueue, MountId};

/// Presentation controller for one cover sheet.
///
/// `S` supplies the content, lazily, once per mount. `D` is called when a
/// dismiss sequence completes; the host should clear its flag in response
/// and pass the cleared flag back through `sync`.
pub struct CoverSheet<C, S, D> {
    height: HeightFactor,
    config: SheetConfig,
    theme: Theme,
    supplier: S,
    on_dismiss: D,
    sheet: Option<PartialSheet<C>>,
    queue: DeferredQueue<SheetCue>,
    next_mount: MountId,
    awaiting_ack: bool,
}

impl<C, S, D> CoverSheet<C, S, D>
where
    S: FnMut() -> C,
    D: FnMut(),
{
    pub fn new(height: HeightFactor, config: SheetConfig, supplier: S, on_dismiss: D) -> Self {
        Self {
            height,
            config,
            theme: Theme::from(config.theme),
            supplier,
            on_dismiss,
            sheet: None,
            queue: DeferredQueue::new(),
            next_mount: MountId::FIRST,
            awaiting_ack: false,
        }
    }

    /// A sheet covering half the container height.
    pub fn half_sheet(config: SheetConfig, supplier: S, on_dismiss: D) -> Self {
        Self::new(HeightFactor::HALF, config, supplier, on_dismiss)
    }

    /// A sheet covering a quarter of the container height.
    pub fn quarter_sheet(config: SheetConfig, supplier: S, on_dismiss: D) -> Self {
        Self::new(HeightFactor::QUARTER, config, supplier, on_dismiss)
    }

    /// Use explicit colors instead of the config's theme. Applies from the next mount.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Bring the sheet in line with the host's flag.
    pub fn sync(&mut self, is_open: bool, now: Instant) {
        if !is_open {
            self.awaiting_ack = false;
            if let Some(sheet) = self.sheet.take() {
                tracing::debug!(mount = %sheet.mount_id(), "Host closed sheet");
                drop(sheet.unmount(&mut self.queue));
            }
            return;
        }

        if self.sheet.is_some() || self.awaiting_ack {
            return;
        }

        let mount = self.next_mount;
        self.next_mount = mount.next();
        let content = (self.supplier)();
        self.sheet = Some(PartialSheet::mount(
            mount,
            content,
            self.height,
            self.config,
            self.theme,
            now,
            &mut self.queue,
        ));
    }

    /// Fire due timers. Calls `on_dismiss` when the backdrop unmounts.
    pub fn tick(&mut self, now: Instant) -> SheetTick {
        let Some(sheet) = self.sheet.as_mut() else {
            for stale in self.queue.drain_due(now) {
                tracing::debug!(mount = %stale.mount, cue = ?stale.action, "Ignoring deferred action with no sheet mounted");
            }
            return SheetTick::Idle;
        };

        let outcome = sheet.tick(now, &mut self.queue);
        if outcome == SheetTick::Dismissed
            && let Some(sheet) = self.sheet.take()
        {
            let mount = sheet.mount_id();
            drop(sheet.unmount(&mut self.queue));
            self.awaiting_ack = true;
            tracing::info!(%mount, "Sheet dismissed");
            (self.on_dismiss)();
        }
        outcome
    }

    /// Start the dismiss sequence as if the backdrop had been tapped.
    ///
    /// Returns false when nothing is mounted or a dismissal is already running.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        self.sheet
            .as_mut()
            .is_some_and(|sheet| sheet.tap(now, &mut self.queue))
    }

    /// Route a mouse event to the sheet. Returns true if it was consumed.
    ///
    /// A left click outside the content taps the backdrop. Clicks on the
    /// content and every other event are swallowed while mounted, so
    /// nothing reaches the host beneath.
    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect, now: Instant) -> bool {
        let Some(sheet) = self.sheet.as_mut() else {
            return false;
        };

        if let MouseEventKind::Down(MouseButton::Left) = event.kind {
            let position = Position::new(event.column, event.row);
            if !sheet.content_contains(area, position) {
                sheet.tap(now, &mut self.queue);
            }
        }
        true
    }
}

impl<C, S, D> CoverSheet<C, S, D> {
    pub fn phase(&self) -> SheetPhase {
        self.sheet
            .as_ref()
            .map_or(SheetPhase::Closed, PartialSheet::phase)
    }

    pub fn content_visible(&self) -> bool {
        self.sheet
            .as_ref()
            .is_some_and(PartialSheet::content_visible)
    }

    pub fn is_mounted(&self) -> bool {
        self.sheet.is_some()
    }

    pub fn height_factor(&self) -> HeightFactor {
        self.height
    }

    /// Token of the current mount, if any.
    pub fn mount_id(&self) -> Option<MountId> {
        self.sheet.as_ref().map(PartialSheet::mount_id)
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Deferred actions still waiting to fire.
    pub fn pending_actions(&self) -> usize {
        self.queue.len()
    }

    /// When the next deferred action is due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.next_due()
    }

    /// Resting content frame inside `area`, while mounted.
    pub fn content_frame(&self, area: Rect) -> Option<Rect> {
        self.sheet.as_ref().map(|sheet| sheet.content_frame(area))
    }

    /// Wrap `host` so it renders with this sheet on top.
    pub fn attach<W>(&self, host: W) -> Attached<'_, W, C> {
        Attached {
            host,
            sheet: self.sheet.as_ref(),
            defocus: self.config.defocus_level,
        }
    }
}

impl<C: SheetContent, S, D> CoverSheet<C, S, D> {
    /// Render `host` into `area`, then the overlay if mounted.
    pub fn render<W: Widget>(&self, host: W, area: Rect, buf: &mut Buffer) {
        self.attach(host).render(area, buf);
    }
}

impl<C, S, D> fmt::Debug for CoverSheet<C, S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoverSheet")
            .field("height", &self.height)
            .field("phase", &self.phase())
            .field("mount", &self.mount_id())
            .field("pending", &self.queue.len())
            .field("awaiting_ack", &self.awaiting_ack)
            .finish_non_exhaustive()
    }
}

/// A host widget with a cover sheet attached.
///
/// Attachments nest: the outer sheet defocuses everything the inner one drew.
pub struct Attached<'a, W, C> {
    host: W,
    sheet: Option<&'a PartialSheet<C>>,
    defocus: f32,
}

impl<W: Widget, C: SheetContent> Widget for Attached<'_, W, C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.host.render(area, buf);

        let Some(sheet) = self.sheet else {
            return;
        };
        defocus(buf, area, self.defocus);
        sheet.render(area, buf);
    }
}

/// Terminal stand-in for a blur: fade the foreground and mark cells DIM.
fn defocus(buf: &mut Buffer, area: Rect, level: f32) {
    if level <= 0.0 {
        return;
    }
    dim_area(buf, area, 1.0 - level, None);
    buf.set_style(
        area.intersection(buf.area),
        Style::new().add_modifier(Modifier::DIM),
    );
}
