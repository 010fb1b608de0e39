//! HTML storefront for Perk.
//!
//! Exposes an axum [`Router`] serving the session-backed pages (login,
//! catalog, purchases) and nesting the read-only JSON API under `/api`.

pub mod error;
pub mod handlers;
pub mod pages;
pub mod session;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use perk_core::{ledger::LedgerConfig, store::ShopStore, storefront::Storefront};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tower_sessions::MemoryStore;

use handlers::{auth, shop};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `perk.toml` and `PERK_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:              String,
  pub port:              u16,
  pub store_path:        PathBuf,
  /// Mark the session cookie `Secure`. Enable behind TLS.
  #[serde(default)]
  pub secure_cookies:    bool,
  /// Insert the default catalog at startup.
  #[serde(default)]
  pub seed_catalog:      bool,
  /// Seconds of inactivity after which a session lapses.
  #[serde(default = "default_session_idle_secs")]
  pub session_idle_secs: i64,
  #[serde(default)]
  pub ledger:            LedgerConfig,
}

/// Seven days.
fn default_session_idle_secs() -> i64 { 7 * 24 * 60 * 60 }

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: ShopStore> {
  pub shop:     Storefront<S>,
  pub config:   Arc<ServerConfig>,
  pub sessions: MemoryStore,
}

impl<S: ShopStore> AppState<S> {
  pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
    Self {
      shop:     Storefront::new(store, config.ledger),
      config:   Arc::new(config),
      sessions: MemoryStore::default(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the storefront.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ShopStore + Clone + 'static,
{
  let sessions = session::session_layer(
    state.sessions.clone(),
    state.config.secure_cookies,
    state.config.session_idle_secs,
  );
  let api = perk_api::api_router(state.shop.clone());

  Router::new()
    .route("/",             get(handlers::index))
    .route("/login",        get(auth::login_page).post(auth::login::<S>))
    .route("/register",     get(auth::register_page).post(auth::register::<S>))
    .route("/logout",       get(auth::logout::<S>))
    .route("/products",     get(shop::products::<S>))
    .route("/purchase",     post(shop::purchase::<S>))
    .route("/purchases",    get(shop::purchases::<S>))
    .route("/my-purchases", get(shop::my_purchases::<S>))
    .with_state(state)
    .nest("/api", api)
    .layer(sessions)
    .layer(TraceLayer::new_for_http())
}
