//! Error types for `perk-core`.

use thiserror::Error;

/// A boxed store-level failure. The concrete type belongs to the backend.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
  #[error("you must be logged in")]
  Unauthenticated,

  #[error("invalid username/password")]
  InvalidCredentials,

  #[error("validation error: {0}")]
  Validation(String),

  #[error("unknown tier: {0:?}")]
  UnknownTier(String),

  #[error("registration failed")]
  RegistrationFailed(#[source] StoreError),

  #[error("store error: {0}")]
  Store(#[source] StoreError),
}

impl Error {
  /// Box a backend error into [`Error::Store`].
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
