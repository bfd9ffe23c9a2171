//! Reporting time windows and their concrete date bounds.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::expense::TIMESTAMP_FORMAT;

/// The reporting range a front-end can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Most recent entries, any category, no budget line.
    Last,
    Today,
    ThisMonth,
    PreviousMonth,
}

impl Window {
    /// Concrete bounds for calendar windows, relative to `today`.
    /// `Last` has no calendar bounds and returns `None`.
    pub fn span(&self, today: NaiveDate) -> Option<DateSpan> {
        match self {
            Window::Last => None,
            Window::Today => Some(DateSpan::day_of(today)),
            Window::ThisMonth => Some(DateSpan::month_of(today)),
            Window::PreviousMonth => Some(DateSpan::previous_month_of(today)),
        }
    }
}

/// Half-open `[start, end)` range computed in application code, never by
/// delegating "now" to the storage engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateSpan {
    pub fn day_of(date: NaiveDate) -> Self {
        Self {
            start: date.and_time(NaiveTime::MIN),
            end: date.succ_opt().unwrap().and_time(NaiveTime::MIN),
        }
    }

    pub fn month_of(date: NaiveDate) -> Self {
        let (year, month) = (date.year(), date.month());
        let end = if month == 12 {
            month_start(year + 1, 1)
        } else {
            month_start(year, month + 1)
        };
        Self {
            start: month_start(year, month),
            end,
        }
    }

    pub fn previous_month_of(date: NaiveDate) -> Self {
        let (year, month) = (date.year(), date.month());
        let start = if month == 1 {
            month_start(year - 1, 12)
        } else {
            month_start(year, month - 1)
        };
        Self {
            start,
            end: month_start(year, month),
        }
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }

    pub fn start_text(&self) -> String {
        self.start.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn end_text(&self) -> String {
        self.end.format(TIMESTAMP_FORMAT).to_string()
    }
}

fn month_start(year: i32, month: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap()
        .and_time(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn month_span_covers_whole_month() {
        let span = DateSpan::month_of(date(2026, 8, 5));
        assert_eq!(span.start_text(), "2026-08-01 00:00:00");
        assert_eq!(span.end_text(), "2026-09-01 00:00:00");
        assert!(span.contains(date(2026, 8, 31).and_hms_opt(23, 59, 59).unwrap()));
        assert!(!span.contains(date(2026, 9, 1).and_hms_opt(0, 0, 0).unwrap()));
    }

    #[test]
    fn previous_month_wraps_the_year_boundary() {
        let span = DateSpan::previous_month_of(date(2026, 1, 15));
        assert_eq!(span.start_text(), "2025-12-01 00:00:00");
        assert_eq!(span.end_text(), "2026-01-01 00:00:00");
    }

    #[test]
    fn december_span_wraps_forward() {
        let span = DateSpan::month_of(date(2025, 12, 31));
        assert_eq!(span.end_text(), "2026-01-01 00:00:00");
    }

    #[test]
    fn day_span_is_one_day() {
        let span = DateSpan::day_of(date(2026, 8, 5));
        assert_eq!(span.start_text(), "2026-08-05 00:00:00");
        assert_eq!(span.end_text(), "2026-08-06 00:00:00");
    }

    #[test]
    fn last_window_has_no_span() {
        assert!(Window::Last.span(date(2026, 8, 5)).is_none());
        assert!(Window::ThisMonth.span(date(2026, 8, 5)).is_some());
    }
}
