//! Color constants for the watch face.
//!
//! The face is strictly two-tone: everything is drawn in black or white, taken
//! from the `RgbColor` trait constants so the RGB565 values are exact.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Dial background, hand outlines, hub dot, date background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Tick marks, hand fill, date text.
pub const WHITE: Rgb565 = Rgb565::WHITE;
