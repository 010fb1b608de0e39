//! Error types and axum `IntoResponse` implementation.
//!
//! Rejections carry a short plain-text body. Store and session failures are
//! logged and answered with a generic 500; their cause never reaches the
//! client.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use perk_core::Error as CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] CoreError),
  #[error("session error: {0}")]
  Session(#[from] tower_sessions::session::Error),
  #[error("session layer missing")]
  NoSession,
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Core(CoreError::Unauthenticated) => {
        (StatusCode::UNAUTHORIZED, "You must be logged in.").into_response()
      }
      Error::Core(CoreError::InvalidCredentials) => {
        (StatusCode::UNAUTHORIZED, "Invalid username/password").into_response()
      }
      Error::Core(CoreError::Validation(msg)) => {
        (StatusCode::BAD_REQUEST, msg).into_response()
      }
      Error::Core(e @ CoreError::UnknownTier(_)) => {
        (StatusCode::BAD_REQUEST, e.to_string()).into_response()
      }
      Error::Core(CoreError::RegistrationFailed(source)) => {
        tracing::warn!(error = %source, "registration failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Registration failed").into_response()
      }
      Error::Core(CoreError::Store(source)) => {
        tracing::error!(error = %source, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, "Request failed").into_response()
      }
      e @ (Error::Session(_) | Error::NoSession) => {
        tracing::error!(error = %e, "session failure");
        (StatusCode::INTERNAL_SERVER_ERROR, "Request failed").into_response()
      }
    }
  }
}
