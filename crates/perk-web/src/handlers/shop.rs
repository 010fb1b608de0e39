//! Catalog and purchase pages.

use axum::{
  Form,
  extract::{State, rejection::FormRejection},
  response::Redirect,
};
use chrono::Utc;
use perk_core::{access, store::ShopStore};
use serde::Deserialize;

use crate::{
  AppState,
  error::Error,
  pages::{MyPurchasesPage, ProductsPage, PurchasesPage},
  session::CurrentIdentity,
};

#[derive(Debug, Deserialize)]
pub struct PurchaseForm {
  pub tier_label: Option<String>,
}

/// `GET /products`
pub async fn products<S>(
  State(state): State<AppState<S>>,
  CurrentIdentity(identity): CurrentIdentity,
) -> Result<ProductsPage, Error>
where
  S: ShopStore + Clone + 'static,
{
  Ok(ProductsPage {
    products: state.shop.products().await?,
    username: identity.username().map(str::to_owned),
  })
}

/// `POST /purchase`
///
/// The login check comes before the body is looked at, so an anonymous
/// caller gets a 401 whatever it sends. An unreadable body counts as an
/// empty tier label.
pub async fn purchase<S>(
  State(state): State<AppState<S>>,
  CurrentIdentity(identity): CurrentIdentity,
  form: Result<Form<PurchaseForm>, FormRejection>,
) -> Result<Redirect, Error>
where
  S: ShopStore + Clone + 'static,
{
  access::require_authenticated(&identity)?;

  let tier_label = match form {
    Ok(Form(form)) => form.tier_label.unwrap_or_default(),
    Err(rejection) => {
      tracing::debug!(error = %rejection, "unreadable purchase form");
      String::new()
    }
  };
  state.shop.purchase(&identity, &tier_label).await?;
  Ok(Redirect::to("/my-purchases"))
}

/// `GET /purchases`
pub async fn purchases<S>(
  State(state): State<AppState<S>>,
  CurrentIdentity(identity): CurrentIdentity,
) -> Result<PurchasesPage, Error>
where
  S: ShopStore + Clone + 'static,
{
  Ok(PurchasesPage {
    purchases: state.shop.view_all_purchases().await?,
    username:  identity.username().map(str::to_owned),
  })
}

/// `GET /my-purchases`
pub async fn my_purchases<S>(
  State(state): State<AppState<S>>,
  CurrentIdentity(identity): CurrentIdentity,
) -> Result<MyPurchasesPage, Error>
where
  S: ShopStore + Clone + 'static,
{
  let monthly = state.shop.view_my_purchases(&identity, Utc::now()).await?;
  Ok(MyPurchasesPage { username: Some(monthly.username.clone()), monthly })
}
