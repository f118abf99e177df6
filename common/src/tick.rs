//! Tick detection for hosts that poll a wall clock.
//!
//! Platforms with a native tick service deliver events directly to
//! [`WatchFaceApp::on_tick`](crate::app::WatchFaceApp::on_tick). Hosts that
//! only have a clock (the desktop simulator) sample it periodically and feed
//! each sample to a [`TickDriver`], which emits one event per change of the
//! registered unit.

use crate::time::TimeSample;

/// Tick granularity, finest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TickUnit {
    Minute,
    Hour,
    Day,
}

impl TickUnit {
    /// Coarsest unit that differs between two samples, if any.
    pub const fn changed_between(
        prev: &TimeSample,
        now: &TimeSample,
    ) -> Option<Self> {
        if prev.day() != now.day() {
            Some(Self::Day)
        } else if prev.hour() != now.hour() {
            Some(Self::Hour)
        } else if prev.minute() != now.minute() {
            Some(Self::Minute)
        } else {
            None
        }
    }
}

/// A registered unit elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickEvent {
    /// Time at which the change was observed.
    pub time: TimeSample,
    /// Coarsest unit that changed (at least the registered one).
    pub unit: TickUnit,
}

/// Turns clock samples into tick events.
#[derive(Clone, Debug)]
pub struct TickDriver {
    unit: TickUnit,
    last: Option<TimeSample>,
}

impl TickDriver {
    pub const fn new(unit: TickUnit) -> Self { Self { unit, last: None } }

    #[inline]
    pub const fn unit(&self) -> TickUnit { self.unit }

    /// Feed a sample. The first sample only primes the driver.
    pub fn poll(
        &mut self,
        now: TimeSample,
    ) -> Option<TickEvent> {
        let prev = self.last.replace(now)?;
        let changed = TickUnit::changed_between(&prev, &now)?;
        (changed >= self.unit).then_some(TickEvent {
            time: now,
            unit: changed,
        })
    }
}
