//! Configuration type definitions for the cover sheet.
//!
//! Responsibilities:
//! - Define the sheet timing and appearance settings (`SheetConfig`).
//! - Define easing curves shared by every transition (`Curve`).
//! - Define user-selectable themes and their runtime palettes.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Rendering or animation (see the TUI crate).
//!
//! Invariants:
//! - `ColorTheme` is the persisted representation; `Theme` is the runtime representation.
//! - A `SheetConfig` produced by `ConfigLoader::build` has passed validation.

mod sheet;
mod theme;

pub use sheet::{Curve, SheetConfig};
pub use theme::{ColorTheme, Theme};
