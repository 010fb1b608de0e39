//! Handlers for `/products` and `/tiers`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/products` | The seeded catalog |
//! | `GET`  | `/tiers` | The fixed value table |

use axum::{Json, extract::State};
use perk_core::{model::Product, store::ShopStore, storefront::Storefront, tier::Tier};
use serde::Serialize;

use crate::error::ApiError;

/// `GET /products`
pub async fn list<S>(
  State(shop): State<Storefront<S>>,
) -> Result<Json<Vec<Product>>, ApiError>
where
  S: ShopStore + 'static,
{
  Ok(Json(shop.products().await?))
}

#[derive(Debug, Serialize)]
pub struct TierEntry {
  pub label:  Tier,
  pub points: i64,
}

/// `GET /tiers`
pub async fn tiers() -> Json<Vec<TierEntry>> {
  Json(
    Tier::all()
      .map(|label| TierEntry { label, points: label.points() })
      .collect(),
  )
}
