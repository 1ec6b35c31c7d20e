//! Centralized constants for the cover sheet workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Choreography Defaults
// =============================================================================

/// Delay between the backdrop mounting and the content being revealed.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 250;

/// Delay between the content being hidden and the backdrop unmounting.
pub const DEFAULT_DISMISS_DELAY_MS: u64 = 250;

/// Duration of the content slide transition.
///
/// Must not exceed either phase delay, so the content has fully left the
/// screen before the backdrop goes away.
pub const DEFAULT_TRANSITION_MS: u64 = 200;

/// Upper bound for either phase delay.
pub const MAX_PHASE_DELAY_MS: u64 = 5000;

// =============================================================================
// Appearance Defaults
// =============================================================================

/// Constant dim level of the backdrop while it is mounted (0.0 to 1.0).
pub const DEFAULT_BACKDROP_OPACITY: f32 = 0.35;

/// Fixed defocus intensity applied to the host while a sheet is mounted.
pub const DEFAULT_DEFOCUS_LEVEL: f32 = 0.4;

/// Height factor of the half-height sheet.
pub const HALF_SHEET_FACTOR: f32 = 0.5;

/// Height factor of the quarter-height sheet.
pub const QUARTER_SHEET_FACTOR: f32 = 0.25;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval for animations in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 16;
