//! The value table: tier labels and the points each one awards.
//!
//! The table is fixed. A label that matches none of the tiers (compared
//! ASCII-case-insensitively) yields [`PointValue::Unknown`] rather than an
//! error; the ledger decides what to do with it.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator as _};

/// Stored in place of a points value when a purchase names an unknown tier.
pub const UNKNOWN_TIER_SENTINEL: i64 = -9999;

// ─── Tier ────────────────────────────────────────────────────────────────────

/// A catalog tier. The snake_case name is the tier label used in forms and
/// in the `products` table.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  Display,
  EnumIter,
  EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Tier {
  HighValue,
  MediumValue,
  StandardValue,
  LowValue,
  WildCard,
}

impl Tier {
  pub fn points(self) -> i64 {
    match self {
      Self::HighValue => 50,
      Self::MediumValue => 30,
      Self::StandardValue => 10,
      Self::LowValue => 5,
      Self::WildCard => 55,
    }
  }

  /// Every tier, in table order.
  pub fn all() -> impl Iterator<Item = Tier> { Self::iter() }
}

// ─── Lookup ──────────────────────────────────────────────────────────────────

/// Result of looking a label up in the value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointValue {
  Known(i64),
  Unknown,
}

impl PointValue {
  /// The integer persisted for this value; unknown tiers become
  /// [`UNKNOWN_TIER_SENTINEL`].
  pub fn stored(self) -> i64 {
    match self {
      Self::Known(points) => points,
      Self::Unknown => UNKNOWN_TIER_SENTINEL,
    }
  }

  /// Reverse of [`PointValue::stored`].
  pub fn from_stored(points: i64) -> Self {
    if points == UNKNOWN_TIER_SENTINEL {
      Self::Unknown
    } else {
      Self::Known(points)
    }
  }

  pub fn is_known(self) -> bool { matches!(self, Self::Known(_)) }
}

/// Look up the points for `label`. Never fails.
pub fn lookup(label: &str) -> PointValue {
  label
    .parse::<Tier>()
    .map(|tier| PointValue::Known(tier.points()))
    .unwrap_or(PointValue::Unknown)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_tier_has_its_points() {
    assert_eq!(lookup("high_value"), PointValue::Known(50));
    assert_eq!(lookup("medium_value"), PointValue::Known(30));
    assert_eq!(lookup("standard_value"), PointValue::Known(10));
    assert_eq!(lookup("low_value"), PointValue::Known(5));
    assert_eq!(lookup("wild_card"), PointValue::Known(55));
  }

  #[test]
  fn lookup_ignores_case() {
    assert_eq!(lookup("HIGH_VALUE"), PointValue::Known(50));
    assert_eq!(lookup("Wild_Card"), PointValue::Known(55));
    assert_eq!(lookup("lOw_VaLuE"), PointValue::Known(5));
  }

  #[test]
  fn unknown_labels_are_unknown() {
    for label in ["", " ", "high", "high_value ", "highvalue", "gold", "ünïcode"] {
      assert_eq!(lookup(label), PointValue::Unknown, "label {label:?}");
    }
    assert_eq!(lookup("nope").stored(), -9999);
  }

  #[test]
  fn labels_round_trip_through_display() {
    for tier in Tier::all() {
      assert_eq!(lookup(&tier.to_string()), PointValue::Known(tier.points()));
    }
    assert_eq!(Tier::all().count(), 5);
    assert_eq!(Tier::WildCard.as_ref(), "wild_card");
  }

  #[test]
  fn sentinel_round_trips() {
    assert_eq!(PointValue::from_stored(-9999), PointValue::Unknown);
    assert_eq!(PointValue::from_stored(30), PointValue::Known(30));
    assert!(!PointValue::Unknown.is_known());
  }
}
