//! Product domain entity and catalog response types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::review::{ProductStats, ReviewWithAuthor};

/// Product catalog entry. Created by seeding, read-only to the API.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Product as listed in the catalog, with review aggregates.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithStats {
    /// Unique product identifier
    #[schema(example = "7f2c1e7e-0b5a-4d8c-9a3e-2f6d1c4b8a90")]
    pub id: Uuid,
    /// Product name
    #[schema(example = "Premium Wireless Headphones")]
    pub name: String,
    /// Product description
    pub description: String,
    /// Price with two decimal places
    #[schema(value_type = String, example = "299.99")]
    pub price: Decimal,
    /// Product image reference
    pub image_url: String,
    /// Catalog category
    #[schema(example = "Electronics")]
    pub category: String,
    /// Catalog entry creation timestamp
    pub created_at: DateTime<Utc>,
    /// Average star rating over rated reviews (0 when none)
    #[schema(example = 4.5)]
    pub average_rating: f64,
    /// Total number of reviews
    #[schema(example = 2)]
    pub review_count: u64,
    /// Number of text-only reviews carrying no star rating
    #[schema(example = 0)]
    pub unrated_count: u64,
}

impl ProductWithStats {
    pub fn new(product: Product, stats: ProductStats) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            category: product.category,
            created_at: product.created_at,
            average_rating: stats.average_rating,
            review_count: stats.review_count,
            unrated_count: stats.unrated_count,
        }
    }
}

/// Product detail page payload: the product, its reviews, and aggregates.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    /// Unique product identifier
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Price with two decimal places
    #[schema(value_type = String, example = "299.99")]
    pub price: Decimal,
    /// Product image reference
    pub image_url: String,
    /// Catalog category
    pub category: String,
    /// Catalog entry creation timestamp
    pub created_at: DateTime<Utc>,
    /// Reviews for this product, newest first
    pub reviews: Vec<ReviewWithAuthor>,
    /// Average star rating over rated reviews (0 when none)
    pub average_rating: f64,
    /// Total number of reviews
    pub review_count: u64,
    /// Number of text-only reviews carrying no star rating
    pub unrated_count: u64,
}

impl ProductDetail {
    pub fn new(product: Product, reviews: Vec<ReviewWithAuthor>, stats: ProductStats) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            category: product.category,
            created_at: product.created_at,
            reviews,
            average_rating: stats.average_rating,
            review_count: stats.review_count,
            unrated_count: stats.unrated_count,
        }
    }
}
