//! Time source interface

use chrono::{Datelike, NaiveDateTime, Timelike};

use super::Unavailable;

/// Calendar time captured once per update.
///
/// Read fresh on every invocation and immutable afterwards; the face
/// never increments time itself, so a missed tick needs no catch-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeSnapshot {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl From<NaiveDateTime> for TimeSnapshot {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
        }
    }
}

/// Local wall-clock source, provided by the host.
///
/// The only contract is monotonic calendar correctness; there is no
/// sub-minute precision requirement.
pub trait Clock {
    fn now(&self) -> Result<TimeSnapshot, Unavailable>;
}
