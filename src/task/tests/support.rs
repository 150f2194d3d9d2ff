//! Shared fixtures for task unit tests.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use mockall::mock;

use crate::task::ports::{KeyValueResult, KeyValueStore};

/// Clock that advances by a fixed step on every reading.
#[derive(Debug)]
pub struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
            step: Duration::seconds(1),
        }
    }

    pub fn frozen_at(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
            step: Duration::zero(),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        let reading = *now;
        *now = reading + self.step;
        reading
    }
}

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .single()
        .expect("valid base timestamp")
}

mock! {
    pub Storage {}

    impl KeyValueStore for Storage {
        fn get(&self, key: &str) -> KeyValueResult<Option<String>>;
        fn set(&self, key: &str, value: &str) -> KeyValueResult<()>;
        fn remove(&self, key: &str) -> KeyValueResult<()>;
    }
}
