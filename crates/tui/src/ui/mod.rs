//! UI rendering for the demo host.
//!
//! The host screen and the sample sheet content live here; the overlay
//! itself is in `crate::sheet`.

pub mod host;
pub mod sample;
pub mod theme;

pub use host::{HostLayout, HostView};
pub use sample::SampleSheet;
