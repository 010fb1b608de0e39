//! Records held by the persistence collaborator.
//!
//! Users and purchase events are append-only: nothing here is ever updated or
//! deleted once written. Products are seeded out of band.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tier::PointValue;

// ─── Users ───────────────────────────────────────────────────────────────────

/// A registered user. `username` is the primary identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub username: String,
  pub email:    String,
  /// Stored as given.
  #[serde(skip_serializing)]
  pub password: String,
}

/// Input to [`crate::store::ShopStore::insert_user`].
#[derive(Debug, Clone)]
pub struct NewUser {
  pub username: String,
  pub email:    String,
  pub password: String,
}

/// A username/password pair offered at login.
#[derive(Debug, Clone)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub tier_label:  String,
  pub description: String,
  pub points:      i64,
}

// ─── Purchases ───────────────────────────────────────────────────────────────

/// One awarded purchase. `points` is fixed at creation time; later catalog
/// changes never touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseEvent {
  pub username:   String,
  pub points:     i64,
  pub awarded_at: DateTime<Utc>,
}

impl PurchaseEvent {
  /// The points as a tagged value; the unknown-tier sentinel maps back to
  /// [`PointValue::Unknown`].
  pub fn point_value(&self) -> PointValue { PointValue::from_stored(self.points) }
}
