//! Platform-agnostic core of the 24-hour analog watch face.
//!
//! The face is a pure function of wall-clock time: every redraw maps the
//! current hour and minute to hand angles, rotates the hand polygons about the
//! dial center and composites three layers into one frame buffer.
//!
//! - [`angle`]: time to full-circle hand angles
//! - [`geometry`]: static polygon tables (hands, dial ticks)
//! - [`transform`]: rotation and translation of polygon templates
//! - [`raster`]: scanline polygon fill and outline
//! - [`layers`]: the drawable layer variants (dial, hands, date)
//! - [`compositor`]: fixed layer tree, dirty tracking and redraw order
//! - [`tick`]: minute tick detection for hosts that poll a clock
//! - [`app`]: host entry points (init, tick, redraw)
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests and allocates nothing. Hosts supply
//! a [`time::Clock`] and any `DrawTarget<Color = Rgb565>`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod angle;
pub mod app;
pub mod colors;
pub mod compositor;
pub mod config;
pub mod date;
pub mod framebuffer;
pub mod geometry;
pub mod layers;
pub mod raster;
pub mod tick;
pub mod time;
pub mod transform;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use app::WatchFaceApp;
pub use colors::*;
pub use config::*;
pub use framebuffer::Framebuffer;
pub use time::{Clock, TimeError, TimeSample};
