use chrono::TimeZone;
use chrono_tz::Tz;
use expense_core::core::clock::FixedClock;
use expense_core::core::engine::Engine;
use expense_core::storage::SqliteStore;

pub const USER: i64 = 7;

/// Engine over an in-memory store with the clock pinned to the given
/// local instant.
#[allow(dead_code)]
pub fn engine_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Engine {
    let store = SqliteStore::open_in_memory().expect("open in-memory store");
    let instant = Tz::UTC
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap();
    Engine::new(store, Box::new(FixedClock::new(instant)))
}

/// Engine pinned to 2026-08-05 12:30 UTC, the reference instant most
/// suites use.
#[allow(dead_code)]
pub fn engine() -> Engine {
    engine_at(2026, 8, 5, 12, 30)
}
