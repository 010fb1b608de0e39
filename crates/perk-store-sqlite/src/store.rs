//! [`SqliteStore`] — the SQLite implementation of [`ShopStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use perk_core::{
  model::{Credentials, NewUser, Product, PurchaseEvent, User},
  store::{PurchaseQuery, ShopStore},
};

use crate::{
  Result,
  encode::{RawPurchase, encode_dt, product_from_row},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Perk store backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection is reference-counted. Each
/// operation borrows the connection for exactly one `call` and releases it
/// when the closure returns, whether it succeeded or not.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert a catalog product, replacing any product with the same tier label.
  pub async fn insert_product(&self, product: Product) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO products (tier_label, description, points) VALUES (?1, ?2, ?3)
           ON CONFLICT (tier_label) DO UPDATE
             SET description = excluded.description, points = excluded.points",
          rusqlite::params![product.tier_label, product.description, product.points],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ShopStore impl ──────────────────────────────────────────────────────────

impl ShopStore for SqliteStore {
  type Error = crate::Error;

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn verify_credentials(&self, credentials: Credentials) -> Result<bool> {
    let Credentials { username, password } = credentials;

    let found = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT 1 FROM users WHERE username = ?1 AND password = ?2",
              rusqlite::params![username, password],
              |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false),
        )
      })
      .await?;

    Ok(found)
  }

  async fn insert_user(&self, user: NewUser) -> Result<User> {
    let user = User {
      username: user.username,
      email:    user.email,
      password: user.password,
    };

    let (username, email, password) =
      (user.username.clone(), user.email.clone(), user.password.clone());

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (username, email, password) VALUES (?1, ?2, ?3)",
          rusqlite::params![username, email, password],
        )?;
        Ok(())
      })
      .await?;

    Ok(user)
  }

  // ── Catalog ───────────────────────────────────────────────────────────────

  async fn list_products(&self) -> Result<Vec<Product>> {
    let products = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT tier_label, description, points FROM products ORDER BY rowid",
        )?;
        let rows = stmt
          .query_map([], product_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(products)
  }

  // ── Purchases ─────────────────────────────────────────────────────────────

  async fn insert_purchase_event(&self, event: PurchaseEvent) -> Result<()> {
    let awarded_at = encode_dt(event.awarded_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO purchases (awarded_at, points, username) VALUES (?1, ?2, ?3)",
          rusqlite::params![awarded_at, event.points, event.username],
        )?;
        Ok(())
      })
      .await?;

    Ok(())
  }

  async fn query_purchases(&self, query: PurchaseQuery) -> Result<Vec<PurchaseEvent>> {
    let username = query.username;
    let start = query.window.map(|w| encode_dt(w.start));
    let end = query.window.map(|w| encode_dt(w.end));

    let raws: Vec<RawPurchase> = self
      .conn
      .call(move |conn| {
        // Both window bounds are strict.
        let mut stmt = conn.prepare(
          "SELECT username, points, awarded_at
           FROM purchases
           WHERE (?1 IS NULL OR username   = ?1)
             AND (?2 IS NULL OR awarded_at > ?2)
             AND (?3 IS NULL OR awarded_at < ?3)
           ORDER BY awarded_at DESC, rowid DESC",
        )?;
        let rows = stmt
          .query_map(
            rusqlite::params![username, start, end],
            RawPurchase::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    tracing::trace!(rows = raws.len(), "queried purchases");
    raws.into_iter().map(RawPurchase::into_event).collect()
  }
}
