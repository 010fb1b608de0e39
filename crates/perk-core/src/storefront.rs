//! [`Storefront`] — the user-facing operations.
//!
//! Every operation receives the caller's [`Identity`] explicitly and returns a
//! structured outcome; nothing here reads or writes session state. Store
//! failures are converted to [`Error`] at this boundary.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
  Error, Result,
  access::{self, Identity},
  catalog::Catalog,
  ledger::{LedgerConfig, MonthlyPoints, PointsLedger},
  model::{Credentials, NewUser, Product, PurchaseEvent},
  store::ShopStore,
};

pub struct Storefront<S> {
  store:   Arc<S>,
  catalog: Catalog<S>,
  ledger:  PointsLedger<S>,
}

impl<S> Clone for Storefront<S> {
  fn clone(&self) -> Self {
    Self {
      store:   Arc::clone(&self.store),
      catalog: self.catalog.clone(),
      ledger:  self.ledger.clone(),
    }
  }
}

impl<S: ShopStore> Storefront<S> {
  pub fn new(store: Arc<S>, config: LedgerConfig) -> Self {
    Self {
      catalog: Catalog::new(Arc::clone(&store)),
      ledger: PointsLedger::new(Arc::clone(&store), config),
      store,
    }
  }

  pub fn ledger(&self) -> &PointsLedger<S> { &self.ledger }

  // ── Session transitions ───────────────────────────────────────────────

  /// Check credentials; on a match the caller becomes authenticated.
  pub async fn login(&self, username: &str, password: &str) -> Result<Identity> {
    let ok = self
      .store
      .verify_credentials(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
      })
      .await
      .map_err(Error::store)?;

    if ok {
      tracing::info!(username, "login");
      Ok(Identity::Authenticated(username.to_owned()))
    } else {
      tracing::info!(username, "login rejected");
      Err(Error::InvalidCredentials)
    }
  }

  /// Create a user; on success the caller becomes authenticated as them.
  pub async fn register(
    &self,
    username: &str,
    email: &str,
    password: &str,
  ) -> Result<Identity> {
    let user = self
      .store
      .insert_user(NewUser {
        username: username.to_owned(),
        email:    email.to_owned(),
        password: password.to_owned(),
      })
      .await
      .map_err(|e| {
        tracing::warn!(username, error = %e, "registration failed");
        Error::RegistrationFailed(Box::new(e))
      })?;

    tracing::info!(username = %user.username, "registered");
    Ok(Identity::Authenticated(user.username))
  }

  pub fn logout(&self, identity: &Identity) -> Identity {
    if let Some(username) = identity.username() {
      tracing::info!(username, "logout");
    }
    Identity::Anonymous
  }

  // ── Catalog & purchases ───────────────────────────────────────────────

  pub async fn products(&self) -> Result<Vec<Product>> { self.catalog.list_products().await }

  /// Record a purchase for the authenticated caller.
  pub async fn purchase(
    &self,
    identity: &Identity,
    tier_label: &str,
  ) -> Result<PurchaseEvent> {
    let username = access::require_authenticated(identity)?;
    if tier_label.trim().is_empty() {
      return Err(Error::Validation("no product specified".to_owned()));
    }
    self.ledger.record_purchase(username, tier_label).await
  }

  pub async fn view_all_purchases(&self) -> Result<Vec<PurchaseEvent>> {
    self.ledger.all_purchases().await
  }

  /// The authenticated caller's points for the month containing `now`.
  pub async fn view_my_purchases(
    &self,
    identity: &Identity,
    now: DateTime<Utc>,
  ) -> Result<MonthlyPoints> {
    let username = access::require_authenticated(identity)?;
    self.ledger.monthly_points_total(username, now).await
  }
}
