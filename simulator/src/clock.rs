//! Wall clock backed by the host's local time zone.

use std::cell::Cell;

use chrono::{Datelike, Local, Timelike};
use log::warn;
use watchface_common::{Clock, TimeError, TimeSample};

/// Convert a chrono date-time into a face time sample.
pub fn sample_of<T>(datetime: &T) -> Result<TimeSample, TimeError>
where
    T: Datelike + Timelike,
{
    TimeSample::new(datetime.hour() as u8, datetime.minute() as u8, datetime.day() as u8)
}

/// Local time via `chrono`. Keeps the last good sample so `now` never fails.
pub struct SystemClock {
    last: Cell<TimeSample>,
}

impl SystemClock {
    pub fn new() -> Result<Self, TimeError> {
        Ok(Self {
            last: Cell::new(sample_of(&Local::now())?),
        })
    }
}

impl Clock for SystemClock {
    fn now(&self) -> TimeSample {
        match sample_of(&Local::now()) {
            Ok(sample) => {
                self.last.set(sample);
                sample
            }
            Err(err) => {
                warn!("clock sample rejected: {err}");
                self.last.get()
            }
        }
    }
}
