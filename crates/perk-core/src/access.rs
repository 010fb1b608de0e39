//! Session identity and the access gate.
//!
//! The gate knows nothing about cookies or sessions: the transport hands it
//! an [`Identity`] and it answers whether that identity may act.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Who is making a request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "username", rename_all = "snake_case")]
pub enum Identity {
  #[default]
  Anonymous,
  Authenticated(String),
}

impl Identity {
  pub fn username(&self) -> Option<&str> {
    match self {
      Self::Anonymous => None,
      Self::Authenticated(u) => Some(u),
    }
  }
}

impl From<Option<String>> for Identity {
  fn from(username: Option<String>) -> Self {
    username.map_or(Self::Anonymous, Self::Authenticated)
  }
}

pub fn is_authenticated(identity: &Identity) -> bool {
  matches!(identity, Identity::Authenticated(_))
}

/// The authenticated username, or [`Error::Unauthenticated`].
pub fn require_authenticated(identity: &Identity) -> Result<&str> {
  identity.username().ok_or(Error::Unauthenticated)
}

/// Unwrap a submitted form field, or fail with [`Error::Validation`] naming it.
pub fn require_field(value: Option<String>, name: &str) -> Result<String> {
  value.ok_or_else(|| Error::Validation(format!("missing {name}")))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn anonymous_is_rejected() {
    assert!(!is_authenticated(&Identity::Anonymous));
    assert!(matches!(
      require_authenticated(&Identity::Anonymous),
      Err(Error::Unauthenticated)
    ));
  }

  #[test]
  fn authenticated_yields_username() {
    let id = Identity::from(Some("alice".to_owned()));
    assert!(is_authenticated(&id));
    assert_eq!(require_authenticated(&id).unwrap(), "alice");
  }

  #[test]
  fn missing_session_value_is_anonymous() {
    assert_eq!(Identity::from(None), Identity::Anonymous);
  }

  #[test]
  fn missing_field_names_the_field() {
    let err = require_field(None, "password").unwrap_err();
    assert!(matches!(err, Error::Validation(ref m) if m == "missing password"));
    assert_eq!(require_field(Some(String::new()), "email").unwrap(), "");
  }
}
