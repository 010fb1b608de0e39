//! Core types and trait definitions for the Perk points storefront.
//!
//! This crate is deliberately free of HTTP and database dependencies. It holds
//! the tier table, the monthly window, the points ledger, the access gate and
//! the [`storefront::Storefront`] that composes them over any
//! [`store::ShopStore`] backend.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod access;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod model;
pub mod store;
pub mod storefront;
pub mod tier;
pub mod window;

pub use error::{Error, Result};

#[cfg(test)]
mod testing;
