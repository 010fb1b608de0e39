//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Core(#[from] perk_core::Error),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let ApiError::Core(err) = self;
    let (status, message) = match &err {
      perk_core::Error::Store(_) => {
        tracing::error!(error = %err, "api store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_owned())
      }
      other => (StatusCode::BAD_REQUEST, other.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
