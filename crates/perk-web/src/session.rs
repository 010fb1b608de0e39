//! Session plumbing: the bridge between cookies and [`Identity`].
//!
//! The logged-in username lives under one session key. Handlers read it with
//! the [`CurrentIdentity`] extractor and change it with [`set_identity`]; the
//! core only ever sees the resulting [`Identity`] value.

use axum::{extract::FromRequestParts, http::request::Parts};
use perk_core::access::Identity;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer, cookie::time::Duration};

use crate::error::Error;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "perk_session";

/// Session key holding the logged-in username.
pub const USERNAME_KEY: &str = "username";

/// Build the session layer over `store`. Sessions lapse after `idle_secs`
/// without a request.
pub fn session_layer(
  store: MemoryStore,
  secure: bool,
  idle_secs: i64,
) -> SessionManagerLayer<MemoryStore> {
  SessionManagerLayer::new(store)
    .with_name(SESSION_COOKIE_NAME)
    .with_expiry(Expiry::OnInactivity(Duration::seconds(idle_secs)))
    .with_secure(secure)
    .with_http_only(true)
    .with_path("/")
}

/// Read the identity stored in `session`.
pub async fn identity(session: &Session) -> Result<Identity, Error> {
  Ok(Identity::from(session.get::<String>(USERNAME_KEY).await?))
}

/// Store `identity` in `session`; `Anonymous` clears it.
pub async fn set_identity(session: &Session, identity: &Identity) -> Result<(), Error> {
  match identity.username() {
    Some(username) => session.insert(USERNAME_KEY, username).await?,
    None => {
      session.remove::<String>(USERNAME_KEY).await?;
    }
  }
  Ok(())
}

/// Extractor for the caller's identity. Never rejects an anonymous caller;
/// gating is the core's job.
pub struct CurrentIdentity(pub Identity);

impl<S> FromRequestParts<S> for CurrentIdentity
where
  S: Send + Sync,
{
  type Rejection = Error;

  async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
    let session = parts.extensions.get::<Session>().ok_or(Error::NoSession)?;
    Ok(Self(identity(session).await?))
  }
}
