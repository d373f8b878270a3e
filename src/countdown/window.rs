//! Weekly draft window.
//!
//! The draft opens at midnight on Tuesday and closes at 23:59 on Saturday,
//! local time.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DraftWindow {
    /// The window that started on the most recent Tuesday (today if Tuesday).
    pub fn current(now: NaiveDateTime) -> Self {
        // Monday is 0, so this counts days back to Tuesday.
        let days_since_tuesday = (now.weekday().num_days_from_monday() + 6) % 7;
        let start = (now.date() - Duration::days(i64::from(days_since_tuesday)))
            .and_time(NaiveTime::MIN);
        let end = start + Duration::days(4) + Duration::hours(23) + Duration::minutes(59);
        Self { start, end }
    }

    /// The current window, or next week's once the current one has closed.
    pub fn upcoming(now: NaiveDateTime) -> Self {
        let window = Self::current(now);
        if window.is_open(now) {
            window
        } else {
            Self {
                start: window.start + Duration::weeks(1),
                end: window.end + Duration::weeks(1),
            }
        }
    }

    pub fn is_open(&self, now: NaiveDateTime) -> bool {
        self.start <= now && now <= self.end
    }
}
