//! Login, registration and logout.
//!
//! Successful logins and registrations land on the catalog; logout lands on
//! the home page.

use axum::{
  Form,
  extract::State,
  response::Redirect,
};
use perk_core::{access::require_field, store::ShopStore};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
  AppState,
  error::Error,
  pages::{LoginPage, RegisterPage},
  session::{self, CurrentIdentity},
};

// ─── Forms ────────────────────────────────────────────────────────────────────

/// Fields are optional so a missing one becomes a 400, not a 422.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
  pub username: Option<String>,
  pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
  pub username: Option<String>,
  pub email:    Option<String>,
  pub password: Option<String>,
}

// ─── Pages ────────────────────────────────────────────────────────────────────

/// `GET /login`
pub async fn login_page(CurrentIdentity(identity): CurrentIdentity) -> LoginPage {
  LoginPage { username: identity.username().map(str::to_owned) }
}

/// `GET /register`
pub async fn register_page(CurrentIdentity(identity): CurrentIdentity) -> RegisterPage {
  RegisterPage { username: identity.username().map(str::to_owned) }
}

// ─── Actions ──────────────────────────────────────────────────────────────────

/// `POST /login`
pub async fn login<S>(
  State(state): State<AppState<S>>,
  session: Session,
  Form(form): Form<LoginForm>,
) -> Result<Redirect, Error>
where
  S: ShopStore + Clone + 'static,
{
  let username = require_field(form.username, "username")?;
  let password = require_field(form.password, "password")?;

  let identity = state.shop.login(&username, &password).await?;
  session.cycle_id().await?;
  session::set_identity(&session, &identity).await?;
  Ok(Redirect::to("/products"))
}

/// `POST /register`
pub async fn register<S>(
  State(state): State<AppState<S>>,
  session: Session,
  Form(form): Form<RegisterForm>,
) -> Result<Redirect, Error>
where
  S: ShopStore + Clone + 'static,
{
  let username = require_field(form.username, "username")?;
  let email = require_field(form.email, "email")?;
  let password = require_field(form.password, "password")?;

  let identity = state.shop.register(&username, &email, &password).await?;
  session.cycle_id().await?;
  session::set_identity(&session, &identity).await?;
  Ok(Redirect::to("/products"))
}

/// `GET /logout`
pub async fn logout<S>(
  State(state): State<AppState<S>>,
  session: Session,
) -> Result<Redirect, Error>
where
  S: ShopStore + Clone + 'static,
{
  let identity = session::identity(&session).await?;
  let identity = state.shop.logout(&identity);
  session::set_identity(&session, &identity).await?;
  Ok(Redirect::to("/"))
}
