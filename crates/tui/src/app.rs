//! Application state for the demo host.
//!
//! The module is organized into submodules:
//! - `input`: Keyboard handling
//! - `mouse`: Mouse handling
//! - `render`: Rendering logic
//!
//! The host owns one "is presented" flag per sheet. The flag is cleared on
//! the same tick a sheet reports `SheetTick::Dismissed`, so a full action
//! channel cannot strand it. Each sheet's `on_dismiss` also posts
//! `Action::SheetDismissed` as a notification; applying it is idempotent.

mod input;
mod mouse;
mod render;

use std::time::Instant;

use coversheet_config::{ColorTheme, SheetConfig, Theme};
use ratatui::layout::Rect;
use tokio::sync::mpsc::{Sender, error::TrySendError};

use crate::action::{Action, SheetKind};
use crate::sheet::{CoverSheet, SheetTick};
use crate::ui::SampleSheet;

type Supplier = Box<dyn FnMut() -> SampleSheet + Send>;
type OnDismiss = Box<dyn FnMut() + Send>;

/// A demo sheet: sample content, reporting dismissal on the action channel.
pub type DemoSheet = CoverSheet<SampleSheet, Supplier, OnDismiss>;

/// Main application state.
pub struct App {
    /// Host-owned "is presented" flag for the half sheet.
    pub show_half: bool,
    /// Host-owned "is presented" flag for the quarter sheet.
    pub show_quarter: bool,
    pub color_theme: ColorTheme,
    pub theme: Theme,
    /// Area of the last rendered frame, used for mouse hit-testing.
    pub last_area: Rect,
    config: SheetConfig,
    half: DemoSheet,
    quarter: DemoSheet,
    tx: Sender<Action>,
}

impl App {
    pub fn new(config: SheetConfig, tx: Sender<Action>) -> Self {
        let color_theme = config.theme;
        let theme = Theme::from_color_theme(color_theme);
        Self {
            show_half: false,
            show_quarter: false,
            color_theme,
            theme,
            last_area: Rect::default(),
            config,
            half: build_sheet(SheetKind::Half, config, theme, tx.clone()),
            quarter: build_sheet(SheetKind::Quarter, config, theme, tx.clone()),
            tx,
        }
    }

    pub fn sheet(&self, kind: SheetKind) -> &DemoSheet {
        match kind {
            SheetKind::Half => &self.half,
            SheetKind::Quarter => &self.quarter,
        }
    }

    fn sheet_mut(&mut self, kind: SheetKind) -> &mut DemoSheet {
        match kind {
            SheetKind::Half => &mut self.half,
            SheetKind::Quarter => &mut self.quarter,
        }
    }

    pub fn is_presented(&self, kind: SheetKind) -> bool {
        match kind {
            SheetKind::Half => self.show_half,
            SheetKind::Quarter => self.show_quarter,
        }
    }

    fn set_presented(&mut self, kind: SheetKind, presented: bool, now: Instant) {
        match kind {
            SheetKind::Half => self.show_half = presented,
            SheetKind::Quarter => self.show_quarter = presented,
        }
        self.sheet_mut(kind).sync(presented, now);
    }

    /// Whether any sheet overlay is mounted and blocking the host.
    pub fn any_sheet_mounted(&self) -> bool {
        self.half.is_mounted() || self.quarter.is_mounted()
    }

    /// Topmost mounted sheet. The quarter sheet is drawn above the half sheet.
    pub fn topmost_sheet(&self) -> Option<SheetKind> {
        [SheetKind::Quarter, SheetKind::Half]
            .into_iter()
            .find(|kind| self.sheet(*kind).is_mounted())
    }

    /// Apply an action to the app state.
    pub fn update(&mut self, action: Action, now: Instant) {
        match action {
            Action::Tick => {
                for kind in [SheetKind::Half, SheetKind::Quarter] {
                    let presented = self.is_presented(kind);
                    let sheet = self.sheet_mut(kind);
                    sheet.sync(presented, now);
                    if sheet.tick(now) == SheetTick::Dismissed {
                        self.set_presented(kind, false, now);
                    }
                }
            }
            Action::Resize(width, height) => {
                self.last_area = Rect::new(0, 0, width, height);
            }
            Action::Input(key) => {
                if let Some(action) = self.handle_input(key) {
                    self.update(action, now);
                }
            }
            Action::Mouse(mouse) => {
                if let Some(action) = self.handle_mouse(mouse, now) {
                    self.update(action, now);
                }
            }
            Action::ShowSheet(kind) => {
                tracing::debug!(sheet = kind.label(), "Presenting sheet");
                self.set_presented(kind, true, now);
            }
            Action::DismissSheet => {
                if let Some(kind) = self.topmost_sheet() {
                    self.sheet_mut(kind).dismiss(now);
                }
            }
            Action::SheetDismissed(kind) => {
                // Late notifications must not close a sheet reopened since.
                if !self.sheet(kind).is_mounted() {
                    self.set_presented(kind, false, now);
                }
            }
            Action::CycleTheme => self.cycle_theme(),
            Action::Quit => {}
        }
    }

    /// Switch to the next color theme.
    ///
    /// Ignored while a sheet is presented; the sheets are rebuilt with the
    /// new palette.
    fn cycle_theme(&mut self) {
        if self.show_half || self.show_quarter || self.any_sheet_mounted() {
            return;
        }
        self.color_theme = self.color_theme.cycle_next();
        self.theme = Theme::from_color_theme(self.color_theme);
        self.config.theme = self.color_theme;
        self.half = build_sheet(SheetKind::Half, self.config, self.theme, self.tx.clone());
        self.quarter = build_sheet(SheetKind::Quarter, self.config, self.theme, self.tx.clone());
        tracing::info!(theme = %self.color_theme, "Theme changed");
    }
}

fn build_sheet(kind: SheetKind, config: SheetConfig, theme: Theme, tx: Sender<Action>) -> DemoSheet {
    let supplier: Supplier = Box::new(move || SampleSheet::for_kind(kind, theme));
    let on_dismiss: OnDismiss = Box::new(move || {
        match tx.try_send(Action::SheetDismissed(kind)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::debug!(sheet = kind.label(), "Action channel full, dismissal notice dropped");
            }
            Err(TrySendError::Closed(_)) => {
                tracing::debug!(sheet = kind.label(), "Action channel closed");
            }
        }
    });

    let sheet = match kind {
        SheetKind::Half => CoverSheet::half_sheet(config, supplier, on_dismiss),
        SheetKind::Quarter => CoverSheet::quarter_sheet(config, supplier, on_dismiss),
    };
    sheet.with_theme(theme)
}
