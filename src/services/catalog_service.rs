//! Catalog service - product listing and detail composition.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{ProductDetail, ProductWithStats};
use crate::errors::{AppResult, OptionExt};
use crate::infra::{ProductRepository, ReviewRepository};

use super::parallel;

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// All products, each with its review aggregates
    async fn list_products(&self) -> AppResult<Vec<ProductWithStats>>;

    /// One product with its reviews and aggregates
    async fn product_detail(&self, id: Uuid) -> AppResult<ProductDetail>;
}

/// Concrete implementation of CatalogService
pub struct Catalog {
    products: Arc<dyn ProductRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl Catalog {
    /// Create new catalog service instance
    pub fn new(products: Arc<dyn ProductRepository>, reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { products, reviews }
    }
}

#[async_trait]
impl CatalogService for Catalog {
    async fn list_products(&self) -> AppResult<Vec<ProductWithStats>> {
        let products = self.products.list().await?;

        // Stats are independent per product; fan the queries out
        let stats = parallel::join_all(
            products
                .iter()
                .map(|product| self.reviews.stats(product.id))
                .collect(),
        )
        .await?;

        Ok(products
            .into_iter()
            .zip(stats)
            .map(|(product, stats)| ProductWithStats::new(product, stats))
            .collect())
    }

    async fn product_detail(&self, id: Uuid) -> AppResult<ProductDetail> {
        let product = self.products.find_by_id(id).await?.ok_or_not_found()?;

        let (reviews, stats) = parallel::join2(
            self.reviews.find_by_product(id),
            self.reviews.stats(id),
        )
        .await?;

        Ok(ProductDetail::new(product, reviews, stats))
    }
}
