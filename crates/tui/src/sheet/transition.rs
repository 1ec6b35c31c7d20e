//! Explicit transition descriptors for sheet state changes.
//!
//! Every mutation that should be interpolated carries a `Transition`
//! alongside it. Starting one at an instant yields a `Motion`, which the
//! renderer samples with the current time.

use std::time::{Duration, Instant};

use coversheet_config::SheetConfig;
use coversheet_config::constants::DEFAULT_TRANSITION_MS;

pub use coversheet_config::Curve;

/// Duration and easing of an interpolated state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub curve: Curve,
}

impl Transition {
    pub const DEFAULT: Self = Self {
        duration: Duration::from_millis(DEFAULT_TRANSITION_MS),
        curve: Curve::EaseInOut,
    };

    /// A state change that takes effect in a single frame.
    pub const INSTANT: Self = Self {
        duration: Duration::ZERO,
        curve: Curve::Linear,
    };

    pub fn new(duration: Duration, curve: Curve) -> Self {
        Self { duration, curve }
    }

    /// The content transition described by a sheet config.
    pub fn from_config(config: &SheetConfig) -> Self {
        Self::new(config.transition_duration, config.curve)
    }

    /// Begin this transition at `now` from the slide's usual starting edge.
    pub fn start(self, slide: Slide, now: Instant) -> Motion {
        let from = match slide {
            Slide::In => 1.0,
            Slide::Out => 0.0,
        };
        self.start_from(slide, from, now)
    }

    /// Begin this transition at `now` with `from` of the content already
    /// hidden, so an interrupted motion continues without a jump.
    ///
    /// The duration shrinks with the distance left to travel.
    pub fn start_from(self, slide: Slide, from: f32, now: Instant) -> Motion {
        let from = from.clamp(0.0, 1.0);
        let remaining = match slide {
            Slide::In => from,
            Slide::Out => 1.0 - from,
        };
        Motion {
            transition: Self {
                duration: self.duration.mul_f32(remaining),
                ..self
            },
            slide,
            from,
            started_at: now,
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which way the content moves across the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    /// Up from below the bottom edge into its frame.
    In,
    /// Down from its frame past the bottom edge.
    Out,
}

/// A transition in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    transition: Transition,
    slide: Slide,
    /// Hidden share of the content when the motion started.
    from: f32,
    started_at: Instant,
}

impl Motion {
    pub fn slide(&self) -> Slide {
        self.slide
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Eased progress in [0, 1].
    pub fn progress(&self, now: Instant) -> f32 {
        let duration = self.transition.duration;
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let linear = (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0);
        self.transition.curve.apply(linear)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.transition.duration
    }

    /// Share of the content below the bottom edge, in [0, 1].
    ///
    /// `In` falls to 0 and `Out` rises to 1, each from where it started.
    pub fn hidden_fraction(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        match self.slide {
            Slide::In => self.from * (1.0 - progress),
            Slide::Out => self.from + (1.0 - self.from) * progress,
        }
    }

    /// Rows the content sits below its resting frame.
    ///
    /// `In` goes from `rows` to 0, `Out` from 0 to `rows`.
    pub fn slide_offset(&self, now: Instant, rows: u16) -> u16 {
        ((f32::from(rows) * self.hidden_fraction(now)).round() as u16).min(rows)
    }
}
