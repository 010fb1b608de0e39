//! Handler for `GET /purchases`: every purchase event, newest first.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use perk_core::{store::ShopStore, storefront::Storefront};
use serde::Serialize;

use crate::error::ApiError;

/// One row of the public purchase history.
#[derive(Debug, Serialize)]
pub struct PurchaseRow {
  pub username:   String,
  pub points:     i64,
  pub awarded_at: DateTime<Utc>,
  /// `false` when the purchase named a tier outside the value table.
  pub known_tier: bool,
}

/// `GET /purchases`
pub async fn list<S>(
  State(shop): State<Storefront<S>>,
) -> Result<Json<Vec<PurchaseRow>>, ApiError>
where
  S: ShopStore + 'static,
{
  let rows = shop
    .view_all_purchases()
    .await?
    .into_iter()
    .map(|e| PurchaseRow {
      known_tier: e.point_value().is_known(),
      username:   e.username,
      points:     e.points,
      awarded_at: e.awarded_at,
    })
    .collect();
  Ok(Json(rows))
}
