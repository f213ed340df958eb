//! Shared test doubles.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::auth::MockAuth;
use crate::slot::InMemorySlot;
use crate::store::Store;

pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance_seconds(&self, seconds: i64) {
        *self.lock_clock() += TimeDelta::seconds(seconds);
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        self.0.lock().expect("clock mutex poisoned")
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// 2024-01-15T10:30:00Z, the start of every clocked test.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
}

/// A store over a fresh in-memory slot, driven by a mutable clock.
pub fn clocked_store() -> (Store, InMemorySlot, Arc<MutableClock>) {
    let slot = InMemorySlot::new();
    let clock = Arc::new(MutableClock::new(fixed_now()));
    let store = Store::new(Arc::new(slot.clone())).with_clock(clock.clone());
    (store, slot, clock)
}

/// Mock auth sharing `slot` with the store, already signed in.
pub async fn signed_in_auth(slot: &InMemorySlot, email: &str) -> MockAuth {
    let auth = MockAuth::new(Arc::new(slot.clone()));
    auth.sign_in(email, "password").await.expect("test sign-in");
    auth
}
