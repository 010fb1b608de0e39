//! An in-memory `ShopStore` for unit tests.

use std::sync::{
  Mutex,
  atomic::{AtomicBool, Ordering},
};

use thiserror::Error;

use crate::{
  model::{Credentials, NewUser, Product, PurchaseEvent, User},
  store::{PurchaseQuery, ShopStore},
};

#[derive(Debug, Error)]
pub enum VecStoreError {
  #[error("duplicate username: {0}")]
  Duplicate(String),
  #[error("injected failure")]
  Injected,
}

#[derive(Default)]
pub struct VecStore {
  users:     Mutex<Vec<User>>,
  products:  Mutex<Vec<Product>>,
  purchases: Mutex<Vec<PurchaseEvent>>,
  fail:      AtomicBool,
}

impl VecStore {
  /// Make the next store call fail.
  pub fn fail_next(&self) { self.fail.store(true, Ordering::SeqCst); }

  pub fn events(&self) -> Vec<PurchaseEvent> { self.purchases.lock().unwrap().clone() }

  pub fn add_product(&self, tier_label: &str, points: i64) {
    self.products.lock().unwrap().push(Product {
      tier_label: tier_label.to_owned(),
      description: format!("{tier_label} task"),
      points,
    });
  }

  fn check(&self) -> Result<(), VecStoreError> {
    if self.fail.swap(false, Ordering::SeqCst) {
      Err(VecStoreError::Injected)
    } else {
      Ok(())
    }
  }
}

impl ShopStore for VecStore {
  type Error = VecStoreError;

  async fn verify_credentials(&self, c: Credentials) -> Result<bool, Self::Error> {
    self.check()?;
    let users = self.users.lock().unwrap();
    Ok(users.iter().any(|u| u.username == c.username && u.password == c.password))
  }

  async fn insert_user(&self, new: NewUser) -> Result<User, Self::Error> {
    self.check()?;
    let mut users = self.users.lock().unwrap();
    if users.iter().any(|u| u.username == new.username) {
      return Err(VecStoreError::Duplicate(new.username));
    }
    let user = User { username: new.username, email: new.email, password: new.password };
    users.push(user.clone());
    Ok(user)
  }

  async fn list_products(&self) -> Result<Vec<Product>, Self::Error> {
    self.check()?;
    Ok(self.products.lock().unwrap().clone())
  }

  async fn insert_purchase_event(&self, event: PurchaseEvent) -> Result<(), Self::Error> {
    self.check()?;
    self.purchases.lock().unwrap().push(event);
    Ok(())
  }

  async fn query_purchases(
    &self,
    query: PurchaseQuery,
  ) -> Result<Vec<PurchaseEvent>, Self::Error> {
    self.check()?;
    let mut rows: Vec<PurchaseEvent> = self
      .purchases
      .lock()
      .unwrap()
      .iter()
      .rev()
      .filter(|e| query.username.as_deref().is_none_or(|u| u == e.username))
      .filter(|e| query.window.is_none_or(|w| w.contains(e.awarded_at)))
      .cloned()
      .collect();
    rows.sort_by(|a, b| b.awarded_at.cmp(&a.awarded_at));
    Ok(rows)
  }
}
