//! 24-hour analog watch face simulator for Windows/Desktop.
//!
//! Plays the host platform for the `watchface-common` core:
//!
//! - samples the local wall clock every [`POLL_INTERVAL`]
//! - turns minute changes into ticks via [`TickDriver`]
//! - asks the face to redraw into its frame buffer, then blits the frame to
//!   an `embedded-graphics-simulator` window
//!
//! Set `RUST_LOG=debug` to see ticks, `RUST_LOG=trace` to see every redraw.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod clock;
mod timing;

use std::thread;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{error, info};
use watchface_common::app::{APP_NAME, TICK_UNIT};
use watchface_common::tick::TickDriver;
use watchface_common::{BLACK, Clock, Framebuffer, SCREEN_BOUNDS, SCREEN_HEIGHT, SCREEN_WIDTH, WatchFaceApp};

use crate::clock::SystemClock;
use crate::timing::{POLL_INTERVAL, WINDOW_SCALE};

fn main() {
    env_logger::init();

    let clock = match SystemClock::new() {
        Ok(clock) => clock,
        Err(err) => {
            error!("cannot read the local clock: {err}");
            return;
        }
    };

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new(APP_NAME, &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut app = WatchFaceApp::init(SCREEN_BOUNDS);
    let mut frame = Box::new(Framebuffer::new());
    let mut ticks = TickDriver::new(TICK_UNIT);
    ticks.poll(clock.now());

    info!("simulator running, polling every {} ms", POLL_INTERVAL.as_millis());

    loop {
        for ev in window.events() {
            if let SimulatorEvent::Quit = ev {
                info!("window closed after {} frames", app.stats().frames);
                return;
            }
        }

        if let Some(event) = ticks.poll(clock.now()) {
            info!("{:02}:{:02}", event.time.hour(), event.time.minute());
            app.on_tick(&event);
        }

        if app.on_redraw(frame.as_mut(), &clock) {
            frame.blit_to(&mut display).ok();
        }

        window.update(&display);
        thread::sleep(POLL_INTERVAL);
    }
}
