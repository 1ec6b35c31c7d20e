//! Cover sheet overlay for ratatui, plus the demo host application.
//!
//! The `sheet` module is the component: a bottom-anchored, partial-height
//! overlay with a dimmed tap-to-dismiss backdrop. The remaining modules
//! make up `coversheet-demo`, a small host that presents a half and a
//! quarter sheet.
//!
//! # Example
//!
//! ```rust
//! use coversheet_tui::{Action, App};
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let (tx, _rx) = tokio::sync::mpsc::channel(8);
//! let mut app = App::new(Default::default(), tx);
//! if let Some(action) = app.handle_input(KeyEvent::from(KeyCode::Char('h'))) {
//!     app.update(action, std::time::Instant::now());
//! }
//! assert!(app.show_half);
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod sheet;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::{Action, SheetKind};
pub use app::App;
pub use sheet::{CoverSheet, HeightFactor, SheetContent, SheetPhase};
