//! Simulated wall clock.
//!
//! The face only ever sees the time through the host, so the simulator
//! drives it from a clock that advances in whole minutes on demand instead
//! of following real time.

use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};

/// Minute tick interval.
pub const TICK: TimeDelta = TimeDelta::minutes(1);

/// Manually advanced local time.
#[derive(Clone, Copy, Debug)]
pub struct SimClock {
    now: NaiveDateTime,
}

impl SimClock {
    pub const fn starting_at(now: NaiveDateTime) -> Self { Self { now } }

    /// Start at the current local time, truncated to the minute.
    pub fn from_local() -> Self {
        let now = Local::now().naive_local();
        let truncated = now.date().and_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now);
        Self { now: truncated }
    }

    #[inline]
    pub const fn now(&self) -> NaiveDateTime { self.now }

    /// Move forward by `ticks` minute ticks.
    pub fn advance(
        &mut self,
        ticks: u32,
    ) {
        for _ in 0..ticks {
            self.now += TICK;
        }
    }
}
