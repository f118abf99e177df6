//! Wall-clock time as seen by the watch face.
//!
//! A [`TimeSample`] is an immutable snapshot read once per redraw. It can only
//! be built through [`TimeSample::new`], which rejects out-of-range fields, so
//! everything downstream of the host boundary is infallible.

use core::fmt;

/// Snapshot of the wall clock: hour 0-23, minute 0-59, day of month 1-31.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSample {
    hour: u8,
    minute: u8,
    day: u8,
}

/// A host supplied a time field outside its valid range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeError {
    HourOutOfRange(u8),
    MinuteOutOfRange(u8),
    DayOutOfRange(u8),
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HourOutOfRange(h) => write!(f, "hour {h} is outside 0-23"),
            Self::MinuteOutOfRange(m) => write!(f, "minute {m} is outside 0-59"),
            Self::DayOutOfRange(d) => write!(f, "day of month {d} is outside 1-31"),
        }
    }
}

impl core::error::Error for TimeError {}

impl TimeSample {
    /// Build a sample, validating every field.
    pub const fn new(
        hour: u8,
        minute: u8,
        day: u8,
    ) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        if day == 0 || day > 31 {
            return Err(TimeError::DayOutOfRange(day));
        }
        Ok(Self { hour, minute, day })
    }

    #[inline]
    pub const fn hour(&self) -> u8 { self.hour }

    #[inline]
    pub const fn minute(&self) -> u8 { self.minute }

    /// Day of month, 1-31.
    #[inline]
    pub const fn day(&self) -> u8 { self.day }
}

/// The host's wall clock.
pub trait Clock {
    /// Read the current time. Called once per redraw.
    fn now(&self) -> TimeSample;
}
