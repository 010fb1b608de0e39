//! Read-only JSON API for Perk.
//!
//! Exposes an axum [`Router`] backed by any [`perk_core::store::ShopStore`].
//! Every endpoint here is public; session-gated operations live in
//! `perk-web`.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", perk_api::api_router(storefront.clone()))
//! ```

pub mod error;
pub mod products;
pub mod purchases;

use axum::{Router, routing::get};
use perk_core::{store::ShopStore, storefront::Storefront};

pub use error::ApiError;

/// Build a fully-materialised API router over `shop`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(shop: Storefront<S>) -> Router<()>
where
  S: ShopStore + 'static,
{
  Router::new()
    .route("/products", get(products::list::<S>))
    .route("/tiers", get(products::tiers))
    .route("/purchases", get(purchases::list::<S>))
    .with_state(shop)
}
