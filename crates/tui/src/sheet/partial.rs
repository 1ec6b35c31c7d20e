//! One mount of the overlay: backdrop plus bottom-anchored content.
//!
//! Responsibilities:
//! - Own the ContentVisible flag and the phase of the current mount.
//! - Apply due cues (reveal, unmount) and taps to the phase machine.
//! - Compose the backdrop and content layers in fixed z order.
//!
//! Does NOT handle:
//! - Creating or dropping mounts (see `CoverSheet`).
//! - Scheduling cues. `tick` drops the ones another mount left behind.
//!
//! Invariants:
//! - Phases only advance Opening -> Open -> Closing -> Closed, or Opening -> Closing.
//! - `content_visible` is true only in `Open`.
//! - Layers are drawn in `Layer::STACK` order regardless of which are present.

use std::time::Instant;

use coversheet_config::{SheetConfig, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::Widget,
};

use super::backdrop::{Backdrop, SheetCue, dim_area};
use super::content::SheetContent;
use super::height::HeightFactor;
use super::timer::{DeferredQueue, MountId};
use super::transition::{Motion, Slide, Transition};

/// Share of each RGB channel kept in the drop shadow row.
const SHADOW_KEEP: f32 = 0.5;

/// Presentation phase of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetPhase {
    /// Not mounted.
    Closed,
    /// Backdrop mounted, reveal pending.
    Opening,
    /// Backdrop and content shown.
    Open,
    /// Content hidden, backdrop unmount pending.
    Closing,
}

/// Stable stacking token for the two overlay layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Backdrop = 0,
    Content = 1,
}

impl Layer {
    /// Bottom to top.
    pub const STACK: [Layer; 2] = [Layer::Backdrop, Layer::Content];

    pub fn z_index(self) -> u8 {
        self as u8
    }
}

/// Outcome of applying a cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetTick {
    Idle,
    /// Content became visible.
    Revealed,
    /// Backdrop unmounted; the host should be told.
    Dismissed,
}

/// The mounted overlay.
#[derive(Debug)]
pub struct PartialSheet<C> {
    mount: MountId,
    content: C,
    height: HeightFactor,
    backdrop: Backdrop,
    transition: Transition,
    theme: Theme,
    phase: SheetPhase,
    content_visible: bool,
    motion: Option<Motion>,
    now: Instant,
}

impl<C> PartialSheet<C> {
    /// Mount a fresh sheet in `Opening` and schedule its reveal.
    pub fn mount(
        mount: MountId,
        content: C,
        height: HeightFactor,
        config: SheetConfig,
        theme: Theme,
        now: Instant,
        queue: &mut DeferredQueue<SheetCue>,
    ) -> Self {
        let backdrop = Backdrop::new(config, &theme);
        backdrop.on_mount(mount, now, queue);
        tracing::debug!(%mount, height = height.get(), "Sheet opening");

        Self {
            mount,
            content,
            height,
            backdrop,
            transition: Transition::from_config(&config),
            theme,
            phase: SheetPhase::Opening,
            content_visible: false,
            motion: None,
            now,
        }
    }

    /// Begin the dismiss sequence.
    ///
    /// Content is hidden at once (animated out if it was shown) and the
    /// backdrop unmount is scheduled. A pending reveal is cancelled.
    /// Returns false if a dismissal is already under way.
    pub fn tap(&mut self, now: Instant, queue: &mut DeferredQueue<SheetCue>) -> bool {
        match self.phase {
            SheetPhase::Opening | SheetPhase::Open => {}
            SheetPhase::Closing | SheetPhase::Closed => return false,
        }

        self.now = now;
        // An unfinished slide-in reverses from wherever it has reached.
        let hidden = self
            .motion
            .filter(|m| !m.is_finished(now))
            .map_or(0.0, |m| m.hidden_fraction(now));
        self.motion = self
            .content_visible
            .then(|| self.transition.start_from(Slide::Out, hidden, now));
        self.content_visible = false;
        let reveal_cancelled = self.backdrop.on_tap(self.mount, now, queue);
        self.phase = SheetPhase::Closing;
        tracing::debug!(mount = %self.mount, reveal_cancelled, "Sheet closing");
        true
    }

    /// Fire every cue due at `now` and advance the render clock.
    ///
    /// Cues scheduled by any other mount are dropped without effect.
    /// `Dismissed` wins over `Revealed` when both fire in one tick.
    pub fn tick(&mut self, now: Instant, queue: &mut DeferredQueue<SheetCue>) -> SheetTick {
        let mut outcome = SheetTick::Idle;
        for deferred in queue.drain_due(now) {
            if deferred.mount != self.mount {
                tracing::debug!(
                    stale = %deferred.mount,
                    current = %self.mount,
                    cue = ?deferred.action,
                    "Ignoring stale deferred action"
                );
                continue;
            }
            match self.apply(deferred.action, deferred.due) {
                SheetTick::Idle => {}
                SheetTick::Revealed if outcome == SheetTick::Dismissed => {}
                tick => outcome = tick,
            }
        }
        self.advance(now);
        outcome
    }

    /// Tear down this mount, cancelling everything it scheduled.
    pub fn unmount(self, queue: &mut DeferredQueue<SheetCue>) -> C {
        let cancelled = queue.cancel_mount(self.mount);
        tracing::debug!(mount = %self.mount, phase = ?self.phase, cancelled, "Sheet unmounted");
        self.content
    }

    /// Apply a due cue that belongs to this mount.
    fn apply(&mut self, cue: SheetCue, at: Instant) -> SheetTick {
        match (cue, self.phase) {
            (SheetCue::Reveal, SheetPhase::Opening) => {
                self.set_content_visible(true, self.transition, at);
                self.phase = SheetPhase::Open;
                tracing::debug!(mount = %self.mount, "Sheet open");
                SheetTick::Revealed
            }
            (SheetCue::Unmount, SheetPhase::Closing) => {
                self.content_visible = false;
                self.motion = None;
                self.phase = SheetPhase::Closed;
                tracing::debug!(mount = %self.mount, "Sheet closed");
                SheetTick::Dismissed
            }
            (cue, phase) => {
                tracing::debug!(mount = %self.mount, ?cue, ?phase, "Ignoring cue out of phase");
                SheetTick::Idle
            }
        }
    }

    /// Record the current time for rendering and retire finished motions.
    pub fn advance(&mut self, now: Instant) {
        self.now = now;
        if self.motion.is_some_and(|m| m.is_finished(now)) {
            self.motion = None;
        }
    }

    fn set_content_visible(&mut self, visible: bool, transition: Transition, at: Instant) {
        self.content_visible = visible;
        let slide = if visible { Slide::In } else { Slide::Out };
        self.motion = Some(transition.start(slide, at));
    }

    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    pub fn content_visible(&self) -> bool {
        self.content_visible
    }

    pub fn height(&self) -> HeightFactor {
        self.height
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn motion(&self) -> Option<&Motion> {
        self.motion.as_ref()
    }

    /// Resting frame of the content: full width, bottom anchored.
    pub fn content_frame(&self, area: Rect) -> Rect {
        let rows = self.height.rows_of(area.height);
        Rect {
            x: area.x,
            y: area.bottom() - rows,
            width: area.width,
            height: rows,
        }
    }

    /// Rows of the content currently on screen, or None when the content
    /// layer is absent.
    pub fn visible_content_rect(&self, area: Rect) -> Option<Rect> {
        let frame = self.content_frame(area);
        let offset = match self.motion {
            Some(motion) if !motion.is_finished(self.now) => {
                motion.slide_offset(self.now, frame.height)
            }
            _ if self.content_visible => 0,
            _ => return None,
        };
        if offset >= frame.height {
            return None;
        }
        Some(Rect {
            y: frame.y + offset,
            height: frame.height - offset,
            ..frame
        })
    }

    /// Whether `position` hits the content currently on screen.
    pub fn content_contains(&self, area: Rect, position: Position) -> bool {
        self.visible_content_rect(area)
            .is_some_and(|rect| rect.contains(position))
    }
}

impl<C: SheetContent> PartialSheet<C> {
    fn render_layer(&self, layer: Layer, area: Rect, buf: &mut Buffer) {
        match layer {
            Layer::Backdrop => {
                if self.phase != SheetPhase::Closed {
                    (&self.backdrop).render(area, buf);
                }
            }
            Layer::Content => self.render_content_layer(area, buf),
        }
    }

    fn render_content_layer(&self, area: Rect, buf: &mut Buffer) {
        let Some(visible) = self.visible_content_rect(area) else {
            return;
        };
        let frame = self.content_frame(area);

        // Render the full frame off-screen, then copy the rows that are on screen.
        let mut scratch = Buffer::empty(Rect::new(0, 0, frame.width, frame.height));
        scratch.set_style(
            scratch.area,
            Style::new().fg(self.theme.sheet_text).bg(self.theme.sheet_bg),
        );
        self.content.render_content(scratch.area, &mut scratch);

        for row in 0..visible.height {
            for col in 0..visible.width {
                if let (Some(src), Some(dst)) = (
                    scratch.cell((col, row)),
                    buf.cell_mut((visible.x + col, visible.y + row)),
                ) {
                    *dst = src.clone();
                }
            }
        }

        if visible.y > area.y {
            let shadow = Rect {
                y: visible.y - 1,
                height: 1,
                ..visible
            };
            dim_area(buf, shadow, SHADOW_KEEP, Some(self.theme.shadow));
        }
    }
}

impl<C: SheetContent> Widget for &PartialSheet<C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for layer in Layer::STACK {
            self.render_layer(layer, area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coversheet_config::Curve;
    use ratatui::widgets::Paragraph;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn mounted(
        t0: Instant,
        queue: &mut DeferredQueue<SheetCue>,
    ) -> PartialSheet<Paragraph<'static>> {
        PartialSheet::mount(
            MountId::FIRST,
            Paragraph::new("body"),
            HeightFactor::HALF,
            SheetConfig::default(),
            Theme::default(),
            t0,
            queue,
        )
    }

    #[test]
    fn test_mount_starts_opening_without_content() {
        let t0 = Instant::now();
        let mut queue = DeferredQueue::new();
        let sheet = mounted(t0, &mut queue);

        assert_eq!(sheet.phase(), SheetPhase::Opening);
        assert!(!sheet.content_visible());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_reveal_then_unmount() {
        let t0 = Instant::now();
        let mut queue = DeferredQueue::new();
        let mut sheet = mounted(t0, &mut queue);

        assert_eq!(sheet.apply(SheetCue::Reveal, t0 + ms(250)), SheetTick::Revealed);
        assert_eq!(sheet.phase(), SheetPhase::Open);
        assert!(sheet.content_visible());

        assert!(sheet.tap(t0 + ms(300), &mut queue));
        assert_eq!(sheet.phase(), SheetPhase::Closing);
        assert!(!sheet.content_visible());
        assert_eq!(sheet.motion().map(|m| m.slide()), Some(Slide::Out));

        assert_eq!(
            sheet.apply(SheetCue::Unmount, t0 + ms(550)),
            SheetTick::Dismissed
        );
        assert_eq!(sheet.phase(), SheetPhase::Closed);
    }

    #[test]
    fn test_second_tap_is_ignored() {
        let t0 = Instant::now();
        let mut queue = DeferredQueue::new();
        let mut sheet = mounted(t0, &mut queue);

        assert!(sheet.tap(t0, &mut queue));
        assert!(!sheet.tap(t0 + ms(10), &mut queue));
        assert_eq!(queue.len(), 1, "only one unmount should be pending");
    }

    #[test]
    fn test_tap_while_opening_has_no_exit_motion() {
        let t0 = Instant::now();
        let mut queue = DeferredQueue::new();
        let mut sheet = mounted(t0, &mut queue);

        sheet.tap(t0 + ms(100), &mut queue);
        assert!(sheet.motion().is_none());
        assert_eq!(sheet.visible_content_rect(Rect::new(0, 0, 10, 10)), None);
    }

    #[test]
    fn test_reveal_out_of_phase_is_idle() {
        let t0 = Instant::now();
        let mut queue = DeferredQueue::new();
        let mut sheet = mounted(t0, &mut queue);
        sheet.tap(t0, &mut queue);

        assert_eq!(sheet.apply(SheetCue::Reveal, t0 + ms(250)), SheetTick::Idle);
        assert!(!sheet.content_visible());
    }

    #[test]
    fn test_content_frame_is_bottom_anchored_full_width() {
        let t0 = Instant::now();
        let mut queue = DeferredQueue::new();
        let sheet = mounted(t0, &mut queue);

        let area = Rect::new(2, 1, 40, 20);
        assert_eq!(sheet.content_frame(area), Rect::new(2, 11, 40, 10));
    }

    #[test]
    fn test_visible_rect_follows_slide_in() {
        let t0 = Instant::now();
        let mut queue = DeferredQueue::new();
        let mut sheet = mounted(t0, &mut queue);
        let area = Rect::new(0, 0, 10, 20);

        sheet.apply(SheetCue::Reveal, t0 + ms(250));
        sheet.advance(t0 + ms(250));
        assert_eq!(sheet.visible_content_rect(area), None, "starts below the edge");

        sheet.advance(t0 + ms(450));
        assert_eq!(sheet.visible_content_rect(area), Some(Rect::new(0, 10, 10, 10)));
        assert!(sheet.motion().is_none());
    }

    #[test]
    fn test_tap_mid_slide_in_never_grows_visible_rows() {
        let t0 = Instant::now();
        let mut queue = DeferredQueue::new();
        let config = SheetConfig {
            curve: Curve::Linear,
            ..SheetConfig::default()
        };
        let mut sheet = PartialSheet::mount(
            MountId::FIRST,
            Paragraph::new("body"),
            HeightFactor::HALF,
            config,
            Theme::default(),
            t0,
            &mut queue,
        );
        let area = Rect::new(0, 0, 10, 20);

        sheet.tick(t0 + ms(250), &mut queue);
        sheet.advance(t0 + ms(280));
        let before = sheet.visible_content_rect(area);
        assert!(before.is_some_and(|r| r.height < 10), "still sliding in");

        sheet.tap(t0 + ms(280), &mut queue);
        let mut last = before.map_or(0, |r| r.height);
        for step in 0..=40 {
            sheet.advance(t0 + ms(280 + step * 5));
            let height = sheet.visible_content_rect(area).map_or(0, |r| r.height);
            assert!(height <= last, "content grew to {height} rows after the tap");
            last = height;
        }
        assert_eq!(last, 0);
    }

    #[test]
    fn test_tick_ignores_other_mounts() {
        let t0 = Instant::now();
        let mut queue = DeferredQueue::new();
        let mut sheet = mounted(t0, &mut queue);
        queue.schedule(MountId::FIRST.next(), ms(10), t0, SheetCue::Unmount);

        assert_eq!(sheet.tick(t0 + ms(20), &mut queue), SheetTick::Idle);
        assert_eq!(sheet.phase(), SheetPhase::Opening);
        assert_eq!(sheet.tick(t0 + ms(250), &mut queue), SheetTick::Revealed);
    }

    #[test]
    fn test_unmount_cancels_own_timers() {
        let t0 = Instant::now();
        let mut queue = DeferredQueue::new();
        let sheet = mounted(t0, &mut queue);

        let _content = sheet.unmount(&mut queue);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_layer_order_is_fixed() {
        assert!(Layer::Backdrop < Layer::Content);
        assert_eq!(Layer::STACK.map(Layer::z_index), [0, 1]);
    }
}
