//! The points ledger: records purchases and totals them per month.
//!
//! Two legacy behaviours are on by default and can be switched off through
//! [`LedgerConfig`]:
//!
//! - unknown tier labels are recorded with the `-9999` sentinel
//!   ([`UnknownTierPolicy::Record`]);
//! - the monthly accumulator starts at `-1`, so a user with no purchases in
//!   the window reports `-1` ([`AccumulatorSeed::Legacy`]).

use std::sync::Arc;

use chrono::{DateTime, SubsecRound as _, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  model::PurchaseEvent,
  store::{PurchaseQuery, ShopStore},
  tier::{self, PointValue},
  window::{self, MonthWindow},
};

// ─── Configuration ───────────────────────────────────────────────────────────

/// What to do when a purchase names a tier the value table does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTierPolicy {
  /// Store the event with the sentinel points value.
  #[default]
  Record,
  /// Refuse with [`Error::UnknownTier`]; nothing is written.
  Reject,
}

/// Starting value of the monthly accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccumulatorSeed {
  /// Start at `-1`.
  #[default]
  Legacy,
  /// Start at `0`.
  Zero,
}

impl AccumulatorSeed {
  pub fn initial(self) -> i64 {
    match self {
      Self::Legacy => -1,
      Self::Zero => 0,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
  pub unknown_tier:     UnknownTierPolicy,
  pub accumulator_seed: AccumulatorSeed,
}

// ─── Results ─────────────────────────────────────────────────────────────────

/// A user's points total for one monthly window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoints {
  pub username: String,
  pub window:   MonthWindow,
  pub total:    i64,
}

// ─── Ledger ──────────────────────────────────────────────────────────────────

pub struct PointsLedger<S> {
  store:  Arc<S>,
  config: LedgerConfig,
}

impl<S> Clone for PointsLedger<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store), config: self.config }
  }
}

impl<S: ShopStore> PointsLedger<S> {
  pub fn new(store: Arc<S>, config: LedgerConfig) -> Self { Self { store, config } }

  pub fn config(&self) -> LedgerConfig { self.config }

  /// Record a purchase stamped with the current instant.
  pub async fn record_purchase(
    &self,
    username: &str,
    tier_label: &str,
  ) -> Result<PurchaseEvent> {
    self.record_purchase_at(username, tier_label, Utc::now()).await
  }

  /// Record a purchase stamped `at`, truncated to the microsecond precision
  /// stores keep. The user is not checked for existence.
  pub async fn record_purchase_at(
    &self,
    username: &str,
    tier_label: &str,
    at: DateTime<Utc>,
  ) -> Result<PurchaseEvent> {
    let value = tier::lookup(tier_label);
    if value == PointValue::Unknown {
      match self.config.unknown_tier {
        UnknownTierPolicy::Reject => {
          return Err(Error::UnknownTier(tier_label.to_owned()));
        }
        UnknownTierPolicy::Record => {
          tracing::warn!(username, tier_label, "recording purchase of unknown tier");
        }
      }
    }

    let event = PurchaseEvent {
      username:   username.to_owned(),
      points:     value.stored(),
      awarded_at: at.trunc_subsecs(6),
    };

    self
      .store
      .insert_purchase_event(event.clone())
      .await
      .map_err(Error::store)?;

    tracing::debug!(username, points = event.points, "recorded purchase");
    Ok(event)
  }

  /// Sum `username`'s points strictly inside the month containing `now`,
  /// starting from the configured [`AccumulatorSeed`].
  pub async fn monthly_points_total(
    &self,
    username: &str,
    now: DateTime<Utc>,
  ) -> Result<MonthlyPoints> {
    let window = window::current_month_window(now);
    tracing::debug!(username, start = %window.start, end = %window.end, "monthly window");

    let events = self
      .store
      .query_purchases(PurchaseQuery::monthly(username, window))
      .await
      .map_err(Error::store)?;

    let total = events.iter().fold(self.config.accumulator_seed.initial(), |acc, e| {
      tracing::debug!(username, points = e.points, "adding points");
      acc + e.points
    });

    Ok(MonthlyPoints { username: username.to_owned(), window, total })
  }

  /// Every event across all users, most recent first. Unpaginated.
  pub async fn all_purchases(&self) -> Result<Vec<PurchaseEvent>> {
    self
      .store
      .query_purchases(PurchaseQuery::all())
      .await
      .map_err(Error::store)
  }
}

#[cfg(test)]
mod tests {
  use chrono::{Duration, TimeZone as _};

  use super::*;
  use crate::testing::VecStore;

  fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
  }

  fn ledger(config: LedgerConfig) -> (Arc<VecStore>, PointsLedger<VecStore>) {
    let store = Arc::new(VecStore::default());
    (Arc::clone(&store), PointsLedger::new(store, config))
  }

  fn zero_seeded() -> LedgerConfig {
    LedgerConfig { accumulator_seed: AccumulatorSeed::Zero, ..LedgerConfig::default() }
  }

  #[tokio::test]
  async fn empty_month_is_minus_one_by_default() {
    let (_, l) = ledger(LedgerConfig::default());
    let m = l.monthly_points_total("alice", utc(2025, 5, 10, 12, 0)).await.unwrap();
    assert_eq!(m.total, -1);
  }

  #[tokio::test]
  async fn empty_month_is_zero_when_corrected() {
    let (_, l) = ledger(zero_seeded());
    let m = l.monthly_points_total("alice", utc(2025, 5, 10, 12, 0)).await.unwrap();
    assert_eq!(m.total, 0);
  }

  #[tokio::test]
  async fn totals_are_offset_by_the_seed() {
    for (config, expected) in [(LedgerConfig::default(), 79), (zero_seeded(), 80)] {
      let (_, l) = ledger(config);
      l.record_purchase_at("alice", "high_value", utc(2025, 5, 2, 9, 0)).await.unwrap();
      l.record_purchase_at("alice", "MEDIUM_VALUE", utc(2025, 5, 20, 9, 0)).await.unwrap();
      let m = l.monthly_points_total("alice", utc(2025, 5, 31, 12, 0)).await.unwrap();
      assert_eq!(m.total, expected);
    }
  }

  #[tokio::test]
  async fn other_users_and_other_months_are_ignored() {
    let (_, l) = ledger(zero_seeded());
    l.record_purchase_at("alice", "low_value", utc(2025, 5, 2, 9, 0)).await.unwrap();
    l.record_purchase_at("bob", "wild_card", utc(2025, 5, 2, 9, 0)).await.unwrap();
    l.record_purchase_at("alice", "wild_card", utc(2025, 4, 30, 12, 0)).await.unwrap();
    l.record_purchase_at("alice", "wild_card", utc(2025, 6, 1, 12, 0)).await.unwrap();

    let m = l.monthly_points_total("alice", utc(2025, 5, 15, 0, 0)).await.unwrap();
    assert_eq!(m.total, 5);
  }

  #[tokio::test]
  async fn events_on_the_window_bounds_are_excluded() {
    let (_, l) = ledger(zero_seeded());
    let now = utc(2024, 2, 15, 0, 0);
    let w = window::current_month_window(now);

    l.record_purchase_at("alice", "high_value", w.start).await.unwrap();
    l.record_purchase_at("alice", "high_value", w.end).await.unwrap();
    l.record_purchase_at("alice", "high_value", utc(2024, 2, 1, 0, 0)).await.unwrap();
    l.record_purchase_at("alice", "low_value", w.start + Duration::seconds(1)).await.unwrap();
    l.record_purchase_at("alice", "low_value", w.end - Duration::seconds(1)).await.unwrap();

    let m = l.monthly_points_total("alice", now).await.unwrap();
    assert_eq!(m.total, 10);
    assert_eq!(m.window, w);
  }

  #[tokio::test]
  async fn timestamps_are_truncated_to_microseconds() {
    let (store, l) = ledger(zero_seeded());
    let w = window::current_month_window(utc(2025, 5, 10, 12, 0));
    let at = w.start + Duration::nanoseconds(1_500);

    let e = l.record_purchase_at("alice", "high_value", at).await.unwrap();
    assert_eq!(e.awarded_at, w.start + Duration::microseconds(1));
    assert_eq!(store.events(), vec![e]);
  }

  #[tokio::test]
  async fn unknown_tier_is_recorded_with_sentinel() {
    let (store, l) = ledger(LedgerConfig::default());
    let e = l.record_purchase_at("alice", "platinum", utc(2025, 5, 2, 9, 0)).await.unwrap();
    assert_eq!(e.points, -9999);
    assert_eq!(e.point_value(), PointValue::Unknown);
    assert_eq!(store.events().len(), 1);

    let m = l.monthly_points_total("alice", utc(2025, 5, 3, 0, 0)).await.unwrap();
    assert_eq!(m.total, -10000);
  }

  #[tokio::test]
  async fn unknown_tier_is_rejected_when_configured() {
    let config = LedgerConfig { unknown_tier: UnknownTierPolicy::Reject, ..LedgerConfig::default() };
    let (store, l) = ledger(config);
    let err = l.record_purchase("alice", "platinum").await.unwrap_err();
    assert!(matches!(err, Error::UnknownTier(ref t) if t == "platinum"));
    assert!(store.events().is_empty());
  }

  #[tokio::test]
  async fn newest_purchase_comes_first() {
    let (_, l) = ledger(LedgerConfig::default());
    l.record_purchase_at("bob", "low_value", utc(2025, 5, 2, 9, 0)).await.unwrap();
    l.record_purchase("alice", "high_value").await.unwrap();

    let all = l.all_purchases().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].username, "alice");
    assert_eq!(all[0].points, 50);
  }

  #[tokio::test]
  async fn store_failures_surface_as_store_errors() {
    let (store, l) = ledger(LedgerConfig::default());
    store.fail_next();
    let err = l.record_purchase("alice", "low_value").await.unwrap_err();
    assert!(matches!(err, Error::Store(_)));
  }

  #[test]
  fn config_deserialises_from_lowercase_names() {
    let config: LedgerConfig =
      serde_json::from_str(r#"{"unknown_tier":"reject","accumulator_seed":"zero"}"#).unwrap();
    assert_eq!(config.unknown_tier, UnknownTierPolicy::Reject);
    assert_eq!(config.accumulator_seed, AccumulatorSeed::Zero);

    let defaults: LedgerConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults, LedgerConfig::default());
  }
}
