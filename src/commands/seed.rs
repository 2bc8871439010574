//! Seed command - Populates the sample product catalog.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{seed::seed_products, Database, ProductStore};

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::info!("Seeding sample product catalog...");

    // Connect runs pending migrations first so the tables exist
    let db = Database::connect(&config).await;
    let products = ProductStore::new(db.get_connection());

    let inserted = seed_products(&products).await?;
    tracing::info!("Seeding complete, {} product(s) inserted", inserted);

    Ok(())
}
