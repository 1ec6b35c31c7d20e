//! Bottom-anchored, partial-height cover sheet overlay.
//!
//! Responsibilities:
//! - Present caller-supplied content over a host widget, sized as a fraction
//!   of the container height.
//! - Choreograph the backdrop and the content on independent, offset timers:
//!   the backdrop appears at once and the content follows after a beat; the
//!   content leaves first and the backdrop lingers before it unmounts.
//! - Keep every deferred action scoped to the mount that scheduled it.
//!
//! Does NOT handle:
//! - What the sheet shows (see `SheetContent`).
//! - Owning the "is presented" flag. The host owns it and is told about a
//!   completed dismissal through the `on_dismiss` callback.
//! - Driving time. The host passes `Instant`s into `sync`/`tick`.
//!
//! Invariants:
//! - Content is visible only while the host's flag is set.
//! - Content is never visible without the backdrop.
//! - A deferred action whose `MountId` is not the current mount never mutates state.
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use coversheet_config::SheetConfig;
//! use coversheet_tui::sheet::{CoverSheet, SheetPhase};
//! use ratatui::widgets::Paragraph;
//!
//! let mut dismissed = 0;
//! let mut sheet = CoverSheet::half_sheet(
//!     SheetConfig::default(),
//!     || Paragraph::new("Whatever you want."),
//!     || dismissed += 1,
//! );
//!
//! let t0 = Instant::now();
//! sheet.sync(true, t0);
//! assert_eq!(sheet.phase(), SheetPhase::Opening);
//!
//! sheet.tick(t0 + Duration::from_millis(250));
//! assert!(sheet.content_visible());
//! ```

mod backdrop;
mod content;
mod controller;
mod height;
mod partial;
mod timer;
mod transition;

pub use backdrop::{Backdrop, SheetCue};
pub use content::SheetContent;
pub use controller::{Attached, CoverSheet};
pub use height::HeightFactor;
pub use partial::{Layer, PartialSheet, SheetPhase, SheetTick};
pub use timer::{Deferred, DeferredQueue, MountId};
pub use transition::{Curve, Motion, Slide, Transition};

use thiserror::Error;

/// Errors raised while configuring a sheet.
///
/// The presentation paths themselves are infallible.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SheetError {
    #[error("height factor must be in (0, 1], got {0}")]
    InvalidHeightFactor(f32),
}
