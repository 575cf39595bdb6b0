//! Time source for task timestamps.
//!
//! Operations never call `Local::now()` directly. They receive a [`Clock`]
//! so that a whole invocation reads time through one capability and tests
//! can pin it to a known value.

use super::formatter::truncate_to_minute;
use chrono::{Local, NaiveDateTime};
use std::cell::Cell;

/// Supplies the current local time, truncated to the minute.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        truncate_to_minute(Local::now().naive_local())
    }
}

/// A clock that returns whatever it was last set to.
///
/// Interior mutability lets a test advance time while the clock is owned by
/// a [`Tasks`](super::tasks::Tasks) instance.
#[derive(Debug, Clone)]
pub struct FixedClock {
    current: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self {
            current: Cell::new(truncate_to_minute(at)),
        }
    }

    pub fn set(&self, at: NaiveDateTime) {
        self.current.set(truncate_to_minute(at));
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.current.set(truncate_to_minute(self.current.get() + by));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.current.get()
    }
}
