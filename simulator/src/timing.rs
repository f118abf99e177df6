//! Timing and window constants for the simulator.
//!
//! These use `std::time::Duration`, which the `no_std` core crate does not
//! have, so they live here rather than in `watchface-common`.

use std::time::Duration;

/// How often the wall clock is sampled. Well under a minute, so a tick is
/// never more than this late.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Pixel scale of the simulator window (144x168 is tiny on a desktop).
pub const WINDOW_SCALE: u32 = 3;
