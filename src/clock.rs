//! Source of the current instant for timestamps written by the codecs.

use chrono::{DateTime, FixedOffset, Local, SecondsFormat, Utc};

/// Supplies "now" to the codecs so conversions stay deterministic under test.
pub trait Clock {
    /// The current instant, carrying the UTC offset of the local time zone.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the system clock in the process's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        FixedClock(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2019-12-31T16:00:00.000Z`.
pub fn iso_timestamp(clock: &dyn Clock) -> String {
    clock
        .now()
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
