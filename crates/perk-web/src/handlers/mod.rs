//! Route handlers, one module per page group.

pub mod auth;
pub mod shop;

use crate::{pages::IndexPage, session::CurrentIdentity};

/// `GET /`
pub async fn index(CurrentIdentity(identity): CurrentIdentity) -> IndexPage {
  IndexPage { username: identity.username().map(str::to_owned) }
}
