//! Remaining time until the draft opens or closes.

use super::window::DraftWindow;
use crate::error::CountdownError;
use chrono::{DateTime, Local, NaiveDateTime};
use std::fmt;

pub const OPENS_LABEL: &str = "Next Draft Opens In:";
pub const ENDS_LABEL: &str = "Draft Ends In:";
pub const OPEN_TEXT: &str = "Draft Window Open!";

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// The moments a countdown can point at.
///
/// `complete` is only known on a player's own page: `None` always counts
/// down to the opening, `Some(false)` counts down to the close of a draft
/// that is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTarget {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub complete: Option<bool>,
}

/// What the countdown displays at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Open,
    Remaining {
        label: &'static str,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
}

impl Countdown {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Countdown::Open => None,
            Countdown::Remaining { label, .. } => Some(*label),
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Open => f.write_str(OPEN_TEXT),
            Countdown::Remaining {
                days,
                hours,
                minutes,
                seconds,
                ..
            } => write!(f, "{}:{}:{}:{}", days, hours, minutes, seconds),
        }
    }
}

impl CountdownTarget {
    pub fn from_window(window: DraftWindow, complete: Option<bool>) -> Self {
        Self {
            start: window.start,
            end: window.end,
            complete,
        }
    }

    /// Build a target from ISO-8601 `start` and `end` timestamps.
    pub fn parse(start: &str, end: &str, complete: Option<bool>) -> Result<Self, CountdownError> {
        Ok(Self {
            start: parse_timestamp("draft_start", start)?,
            end: parse_timestamp("draft_end", end)?,
            complete,
        })
    }

    fn target(&self) -> (NaiveDateTime, &'static str) {
        match self.complete {
            Some(false) => (self.end, ENDS_LABEL),
            Some(true) | None => (self.start, OPENS_LABEL),
        }
    }

    pub fn at(&self, now: NaiveDateTime) -> Countdown {
        let (target, label) = self.target();
        let distance = (target - now).num_milliseconds();
        if distance <= 0 {
            return Countdown::Open;
        }

        Countdown::Remaining {
            label,
            days: distance / MS_PER_DAY,
            hours: (distance % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (distance % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (distance % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }
}

/// Accepts local ISO-8601 timestamps, with or without an offset.
fn parse_timestamp(field: &'static str, value: &str) -> Result<NaiveDateTime, CountdownError> {
    let value = value.trim();
    if let Ok(naive) = value.parse::<NaiveDateTime>() {
        return Ok(naive);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Local).naive_local())
        .map_err(|_| CountdownError::InvalidTimestamp {
            field,
            value: value.to_string(),
        })
}
