//! HTML page templates.
//!
//! Every page carries the logged-in `username` (if any) for the navigation
//! bar rendered by `base.html`.

use askama::Template;
use askama_web::WebTemplate;
use perk_core::{
  ledger::MonthlyPoints,
  model::{Product, PurchaseEvent},
};

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexPage {
  pub username: Option<String>,
}

#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginPage {
  pub username: Option<String>,
}

#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
pub struct RegisterPage {
  pub username: Option<String>,
}

/// Catalog page. Anonymous visitors see a login prompt in place of the
/// claim button.
#[derive(Template, WebTemplate)]
#[template(path = "products.html")]
pub struct ProductsPage {
  pub username: Option<String>,
  pub products: Vec<Product>,
}

/// Every purchase across all users, newest first.
#[derive(Template, WebTemplate)]
#[template(path = "purchases.html")]
pub struct PurchasesPage {
  pub username:  Option<String>,
  pub purchases: Vec<PurchaseEvent>,
}

#[derive(Template, WebTemplate)]
#[template(path = "my_purchases.html")]
pub struct MyPurchasesPage {
  pub username: Option<String>,
  pub monthly:  MonthlyPoints,
}
