//! Core 2-D contagion simulation library.
//!
//! Main components:
//! - [`geometry`] — 2-D points and the bounding rectangle.
//! - [`cell`] — a single moving cell and its disease state machine.
//! - [`config`] — simulation parameters.
//! - [`phases`] — the movement and contact passes of a tick.
//! - [`model`] — the population and the stepping entry point.
//! - [`census`] — per-band population counts.
//! - [`error`] — the crate error type.
//! - [`types`] — shared type aliases and IDs.

pub mod cell;
pub mod census;
pub mod config;
pub mod error;
pub mod geometry;
pub mod model;
pub mod phases;
pub mod types;

pub use cell::{Cell, CellColor, Health};
pub use census::Census;
pub use config::Config;
pub use error::{Error, Result};
pub use geometry::{Bounds, Point};
pub use model::Model;
