//! Layout and display configuration constants.
//!
//! All positions are compile-time constants. The face layout is pixel-exact for
//! a 144x168 surface; the date label and hub dot offsets are fixed, not derived
//! from font metrics.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Number of pixels in one frame.
pub const SCREEN_PIXELS: usize = (SCREEN_WIDTH * SCREEN_HEIGHT) as usize;

/// Bounds of the root window layer.
pub const SCREEN_BOUNDS: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

/// Dial center: `(x + w / 2, y + h / 2)` of the root window.
pub const DIAL_CENTER: Point = Point::new((SCREEN_WIDTH / 2) as i32, (SCREEN_HEIGHT / 2) as i32);

// =============================================================================
// Angle Scale
// =============================================================================

/// One full revolution on the integer angle scale.
pub const FULL_CIRCLE: i32 = 0x10000;

/// Minutes per revolution of the minute hand.
pub const MINUTES_PER_REVOLUTION: i32 = 60;

/// Hour-hand sub-steps per hour (one per 10 minutes).
pub const HOUR_STEPS_PER_HOUR: i32 = 6;

/// Hours per revolution of the hour hand.
pub const HOURS_PER_REVOLUTION: i32 = 24;

/// Hour-hand positions per revolution (24 * 6 = 144).
pub const HOUR_STEPS_PER_REVOLUTION: i32 = HOURS_PER_REVOLUTION * HOUR_STEPS_PER_HOUR;

// =============================================================================
// Layout Constants
// =============================================================================

/// Side length of the square hub dot masking the hands' pivot.
pub const HUB_SIZE: u32 = 3;

/// Numeric date label, relative to the date layer.
pub const DATE_LABEL: Rectangle = Rectangle::new(Point::new(107, 73), Size::new(18, 20));

/// Maximum digits in the date readout (day of month 1-31).
pub const DATE_CAPACITY: usize = 2;

/// Number of layers under the root window (background, date, hands).
pub const LAYER_COUNT: usize = 3;

/// Maximum vertices in any polygon template.
pub const MAX_POLYGON_POINTS: usize = 8;
