//! Bounded buffer for the day-of-month readout.
//!
//! Holds at most [`DATE_CAPACITY`] digits. Each update overwrites the previous
//! contents; the string is the plain decimal day with no padding ("7", "31").

use core::fmt::Write;

use heapless::String;

use crate::config::DATE_CAPACITY;

/// Formatted day of month.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateBuffer {
    text: String<DATE_CAPACITY>,
}

impl DateBuffer {
    /// An empty buffer (nothing shown until the first date redraw).
    pub const fn new() -> Self { Self { text: String::new() } }

    /// Replace the contents with `day` (1-31).
    pub fn set_day(
        &mut self,
        day: u8,
    ) {
        debug_assert!((1..=31).contains(&day), "day of month out of range: {day}");
        self.text.clear();
        // Two digits always fit; TimeSample rejects days above 31
        write!(self.text, "{day}").ok();
    }

    #[inline]
    pub fn as_str(&self) -> &str { self.text.as_str() }
}
