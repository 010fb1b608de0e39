//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 UTC strings with microsecond
//! precision, e.g. `2025-02-01T00:01:00.000000Z`. Every stored value has the
//! same length, so SQL string comparison orders them chronologically.

use chrono::{DateTime, SecondsFormat, Utc};
use perk_core::model::{Product, PurchaseEvent};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `purchases` row.
pub struct RawPurchase {
  pub username:   String,
  pub points:     i64,
  pub awarded_at: String,
}

impl RawPurchase {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      username:   row.get(0)?,
      points:     row.get(1)?,
      awarded_at: row.get(2)?,
    })
  }

  pub fn into_event(self) -> Result<PurchaseEvent> {
    Ok(PurchaseEvent {
      username:   self.username,
      points:     self.points,
      awarded_at: decode_dt(&self.awarded_at)?,
    })
  }
}

pub fn product_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Product> {
  Ok(Product {
    tier_label:  row.get(0)?,
    description: row.get(1)?,
    points:      row.get(2)?,
  })
}

#[cfg(test)]
mod tests {
  use chrono::{Duration, TimeZone as _};

  use super::*;

  #[test]
  fn timestamps_are_fixed_width() {
    let whole = Utc.with_ymd_and_hms(2025, 2, 1, 0, 1, 0).unwrap();
    let frac = whole + Duration::nanoseconds(123_456_789);

    assert_eq!(encode_dt(whole), "2025-02-01T00:01:00.000000Z");
    assert_eq!(encode_dt(frac), "2025-02-01T00:01:00.123456Z");
    assert_eq!(encode_dt(whole).len(), encode_dt(frac).len());
  }

  #[test]
  fn text_order_matches_time_order() {
    let feb = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
    let oct = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
    assert!(encode_dt(feb) < encode_dt(oct));
  }

  #[test]
  fn decode_accepts_offsets_and_rejects_garbage() {
    let dt = decode_dt("2025-02-01T01:01:00+01:00").unwrap();
    assert_eq!(encode_dt(dt), "2025-02-01T00:01:00.000000Z");
    assert!(matches!(decode_dt("2025-2-1 00:01"), Err(Error::DateParse(_))));
  }
}
