//! Catalog seed data: one product per value-table tier.

use perk_core::{model::Product, tier::Tier};

use crate::{Result, SqliteStore};

fn description(tier: Tier) -> &'static str {
  match tier {
    Tier::HighValue => "A task that moves the needle",
    Tier::MediumValue => "A solid piece of work",
    Tier::StandardValue => "Everyday work",
    Tier::LowValue => "A quick win",
    Tier::WildCard => "Something nobody saw coming",
  }
}

/// The default catalog, priced from the value table.
pub fn default_catalog() -> Vec<Product> {
  Tier::all()
    .map(|tier| Product {
      tier_label:  tier.to_string(),
      description: description(tier).to_owned(),
      points:      tier.points(),
    })
    .collect()
}

impl SqliteStore {
  /// Insert the default catalog. Idempotent: re-seeding overwrites the same
  /// five products.
  pub async fn seed_catalog(&self) -> Result<usize> {
    let products = default_catalog();
    let count = products.len();
    for product in products {
      self.insert_product(product).await?;
    }
    tracing::info!(count, "seeded catalog");
    Ok(count)
  }
}
