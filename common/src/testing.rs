//! Test clocks.

use core::cell::Cell;

use crate::time::{Clock, TimeSample};

/// Always reports the same time.
pub struct FixedClock(pub TimeSample);

impl FixedClock {
    pub fn at(
        hour: u8,
        minute: u8,
        day: u8,
    ) -> Self {
        Self(TimeSample::new(hour, minute, day).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> TimeSample { self.0 }
}

/// Advances one minute on every read and counts the reads.
pub struct SteppingClock {
    minute: Cell<u8>,
    reads: Cell<u32>,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            minute: Cell::new(0),
            reads: Cell::new(0),
        }
    }

    pub fn reads(&self) -> u32 { self.reads.get() }
}

impl Clock for SteppingClock {
    fn now(&self) -> TimeSample {
        let minute = self.minute.get();
        self.minute.set((minute + 1) % 60);
        self.reads.set(self.reads.get() + 1);
        TimeSample::new(12, minute, 15).unwrap()
    }
}
