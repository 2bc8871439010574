//! Review service - submission, listing, and the "already reviewed" gate.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Review, ReviewDraft, ReviewWithAuthor};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{ProductRepository, ReviewRepository, UserRepository};

/// Review service trait for dependency injection.
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Validate and store a review submission
    async fn submit(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        rating: Option<i16>,
        title: Option<String>,
        content: Option<String>,
    ) -> AppResult<Review>;

    /// All reviews for a product with reviewer identity, newest first
    async fn reviews_for_product(&self, product_id: Uuid) -> AppResult<Vec<ReviewWithAuthor>>;

    /// Whether a user has already reviewed a product
    async fn has_reviewed(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool>;
}

/// Concrete implementation of ReviewService
pub struct ReviewManager {
    users: Arc<dyn UserRepository>,
    products: Arc<dyn ProductRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl ReviewManager {
    /// Create new review service instance
    pub fn new(
        users: Arc<dyn UserRepository>,
        products: Arc<dyn ProductRepository>,
        reviews: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            users,
            products,
            reviews,
        }
    }
}

#[async_trait]
impl ReviewService for ReviewManager {
    async fn submit(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        rating: Option<i16>,
        title: Option<String>,
        content: Option<String>,
    ) -> AppResult<Review> {
        let draft = ReviewDraft::new(rating, title, content)?;

        // Existence pre-check: a friendlier rejection than the constraint
        // error, but only a shortcut. Two submissions racing past this
        // point are settled by the unique index inside `create`.
        if self
            .reviews
            .find_by_user_and_product(user_id, product_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Review"));
        }

        self.users.find_by_id(user_id).await?.ok_or_not_found()?;
        self.products
            .find_by_id(product_id)
            .await?
            .ok_or_not_found()?;

        self.reviews.create(user_id, product_id, draft).await
    }

    async fn reviews_for_product(&self, product_id: Uuid) -> AppResult<Vec<ReviewWithAuthor>> {
        self.reviews.find_by_product(product_id).await
    }

    async fn has_reviewed(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        Ok(self
            .reviews
            .find_by_user_and_product(user_id, product_id)
            .await?
            .is_some())
    }
}
