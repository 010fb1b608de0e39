//! The monthly aggregation window.
//!
//! A window opens one minute after midnight on the first day of a UTC month
//! and closes at 23:59 on the last day. Both bounds are exclusive: an event
//! stamped exactly at `start` or `end` is outside the window.

use chrono::{DateTime, Datelike as _, Days, Duration, Months, NaiveDate, NaiveTime, TimeZone as _, Utc};
use serde::{Deserialize, Serialize};

/// Minutes after midnight at which a window opens.
const OPENS_AFTER_MINUTES: i64 = 1;

/// Minutes after midnight at which a window closes, on the month's last day.
const CLOSES_AFTER_MINUTES: i64 = 23 * 60 + 59;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindow {
  pub start: DateTime<Utc>,
  pub end:   DateTime<Utc>,
}

impl MonthWindow {
  /// `true` iff `start < at < end`.
  pub fn contains(&self, at: DateTime<Utc>) -> bool {
    self.start < at && at < self.end
  }
}

/// The window for the month containing `now`.
pub fn current_month_window(now: DateTime<Utc>) -> MonthWindow {
  let today = now.date_naive();
  let first = today - Days::new(u64::from(today.day0()));
  let last = first + Months::new(1) - Days::new(1);

  MonthWindow {
    start: at_minute(first, OPENS_AFTER_MINUTES),
    end:   at_minute(last, CLOSES_AFTER_MINUTES),
  }
}

fn at_minute(date: NaiveDate, minutes: i64) -> DateTime<Utc> {
  Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)) + Duration::minutes(minutes)
}
