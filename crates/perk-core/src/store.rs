//! The `ShopStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `perk-store-sqlite`).
//! Higher layers (`perk-api`, `perk-web`) and the components in this crate
//! depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  model::{Credentials, NewUser, Product, PurchaseEvent, User},
  window::MonthWindow,
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`ShopStore::query_purchases`].
#[derive(Debug, Clone, Default)]
pub struct PurchaseQuery {
  /// Restrict to one user's events.
  pub username: Option<String>,
  /// Restrict to events strictly inside the window.
  pub window:   Option<MonthWindow>,
}

impl PurchaseQuery {
  /// Every event across all users.
  pub fn all() -> Self { Self::default() }

  /// One user's events strictly inside `window`.
  pub fn monthly(username: impl Into<String>, window: MonthWindow) -> Self {
    Self { username: Some(username.into()), window: Some(window) }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the storefront's persistence collaborator.
///
/// Users and purchase events are append-only. Each method is one independent
/// query or write; nothing is held between calls.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ShopStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  /// `true` iff a user with exactly this username and password exists.
  fn verify_credentials(
    &self,
    credentials: Credentials,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Persist a new user. Uniqueness of `username` is whatever the backend
  /// enforces; a duplicate surfaces as an error.
  fn insert_user(
    &self,
    user: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  // ── Catalog ───────────────────────────────────────────────────────────

  fn list_products(
    &self,
  ) -> impl Future<Output = Result<Vec<Product>, Self::Error>> + Send + '_;

  // ── Purchases ─────────────────────────────────────────────────────────

  /// Append one purchase event exactly as given.
  fn insert_purchase_event(
    &self,
    event: PurchaseEvent,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Return matching events ordered by `awarded_at` descending; events with
  /// equal timestamps come most-recently-inserted first.
  fn query_purchases(
    &self,
    query: PurchaseQuery,
  ) -> impl Future<Output = Result<Vec<PurchaseEvent>, Self::Error>> + Send + '_;
}
