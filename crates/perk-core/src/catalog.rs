//! Product listing. A pass-through to the store's catalog.

use std::sync::Arc;

use crate::{Error, Result, model::Product, store::ShopStore};

pub struct Catalog<S> {
  store: Arc<S>,
}

impl<S> Clone for Catalog<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: ShopStore> Catalog<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub async fn list_products(&self) -> Result<Vec<Product>> {
    self.store.list_products().await.map_err(Error::store)
  }
}
