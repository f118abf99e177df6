//! Host entry points for the watch face.
//!
//! The host owns scheduling and calls three entry points:
//!
//! 1. [`WatchFaceApp::init`] once at launch
//! 2. [`WatchFaceApp::on_tick`] once per elapsed [`TICK_UNIT`]
//! 3. [`WatchFaceApp::on_redraw`] whenever it is ready to present a frame
//!
//! All state lives in the returned [`WatchFaceApp`] value; nothing is global.
//! A tick only invalidates the face. The redraw that follows repaints
//! background, date and hands from a fresh clock sample.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, info};

use crate::compositor::{Compositor, RenderStats};
use crate::tick::{TickEvent, TickUnit};
use crate::time::Clock;

/// Display name of the face.
pub const APP_NAME: &str = "24H Analog";

/// Face version (major, minor).
pub const APP_VERSION: (u8, u8) = (1, 2);

/// Tick granularity the face registers for.
pub const TICK_UNIT: TickUnit = TickUnit::Minute;

/// Application state, owned by the host.
pub struct WatchFaceApp {
    compositor: Compositor,
}

impl WatchFaceApp {
    /// Build the face inside `bounds` (the window frame on the host display).
    pub fn init(bounds: Rectangle) -> Self {
        info!(
            "{} v{}.{} on {}x{}",
            APP_NAME, APP_VERSION.0, APP_VERSION.1, bounds.size.width, bounds.size.height
        );
        Self {
            compositor: Compositor::new(bounds),
        }
    }

    /// A tick elapsed: invalidate the whole layer tree.
    pub fn on_tick(
        &mut self,
        event: &TickEvent,
    ) {
        debug!(
            "tick {:?} at {:02}:{:02}",
            event.unit,
            event.time.hour(),
            event.time.minute()
        );
        self.compositor.mark_dirty();
    }

    /// Draw a frame if one is pending. Returns `true` if `target` changed.
    pub fn on_redraw<D, C>(
        &mut self,
        target: &mut D,
        clock: &C,
    ) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
        C: Clock + ?Sized,
    {
        !self.compositor.redraw(target, clock).is_empty()
    }

    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.compositor.is_dirty() }

    #[inline]
    pub const fn stats(&self) -> RenderStats { self.compositor.stats() }

    #[inline]
    pub const fn compositor(&self) -> &Compositor { &self.compositor }
}
