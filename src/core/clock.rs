use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Clock abstracts access to the current timestamp so services remain
/// deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current instant in the user's configured time zone.
    fn now(&self) -> DateTime<Tz>;

    /// Returns the current local date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock time converted into a fixed time zone.
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }
}

/// Clock pinned to one instant. Test-only in spirit, exported so
/// integration suites can drive calendar windows deterministically.
pub struct FixedClock {
    instant: DateTime<Tz>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Tz>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_reports_its_instant() {
        let instant = Tz::UTC.with_ymd_and_hms(2026, 8, 5, 12, 30, 0).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.today(), instant.date_naive());
    }

    #[test]
    fn system_clock_respects_the_zone() {
        let clock = SystemClock::new(chrono_tz::Tz::UTC);
        let before = Utc::now();
        let now = clock.now();
        assert!(now.naive_utc() >= before.naive_utc() - chrono::Duration::seconds(1));
    }
}
