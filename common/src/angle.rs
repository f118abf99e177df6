//! Time-to-angle mapping for the two hands.
//!
//! Angles are on the integer full-circle scale ([`FULL_CIRCLE`] units per
//! revolution), measured clockwise from 12 o'clock on screen.
//!
//! # 24-Hour Dial
//!
//! The hour hand makes one revolution per day, not per half day. The dial is
//! split into 144 positions (24 hours x 6); the hand advances one position per
//! 10 elapsed minutes:
//!
//! ```text
//! hour_angle = FULL_CIRCLE * ((hour % 24) * 6 + minute / 10) / 144
//! ```
//!
//! `minute / 10` truncates, so the hour hand steps every 10 minutes instead of
//! sweeping.

use crate::config::{FULL_CIRCLE, HOUR_STEPS_PER_HOUR, HOUR_STEPS_PER_REVOLUTION, HOURS_PER_REVOLUTION, MINUTES_PER_REVOLUTION};
use crate::time::TimeSample;

/// Minute-hand angle: one revolution per hour.
#[inline]
pub const fn minute_angle(minute: u32) -> i32 { FULL_CIRCLE * (minute as i32 % MINUTES_PER_REVOLUTION) / MINUTES_PER_REVOLUTION }

/// Hour-hand angle on the 24-hour dial: one revolution per day.
#[inline]
pub const fn hour_angle(
    hour: u32,
    minute: u32,
) -> i32 {
    let step = (hour as i32 % HOURS_PER_REVOLUTION) * HOUR_STEPS_PER_HOUR + (minute as i32 % MINUTES_PER_REVOLUTION) / 10;
    FULL_CIRCLE * step / HOUR_STEPS_PER_REVOLUTION
}

/// Both hand angles for one redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandAngles {
    pub minute: i32,
    pub hour: i32,
}

impl HandAngles {
    pub const fn from_time(time: &TimeSample) -> Self {
        Self {
            minute: minute_angle(time.minute() as u32),
            hour: hour_angle(time.hour() as u32, time.minute() as u32),
        }
    }
}
