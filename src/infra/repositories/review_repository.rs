//! Review repository implementation.
//!
//! Owns the two pieces of logic the rest of the application leans on:
//! translating a unique-index violation into the user-facing "already
//! reviewed" conflict, and the per-product aggregation query.

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::review::{self, ActiveModel, Entity as ReviewEntity};
use super::entities::user;
use crate::domain::{ProductStats, Review, ReviewDraft, ReviewWithAuthor, Reviewer};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Review repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert a validated review.
    ///
    /// Fails with a conflict when the (user, product) pair already has a
    /// review, even when a caller's pre-check raced and passed: the unique
    /// index is the authoritative arbiter.
    async fn create(&self, user_id: Uuid, product_id: Uuid, draft: ReviewDraft)
        -> AppResult<Review>;

    /// All reviews for a product with reviewer identity, newest first
    async fn find_by_product(&self, product_id: Uuid) -> AppResult<Vec<ReviewWithAuthor>>;

    /// The review a user left on a product, if any
    async fn find_by_user_and_product(
        &self,
        user_id: Uuid,
        product_id: Uuid,
    ) -> AppResult<Option<Review>>;

    /// Per-product aggregates, computed on read
    async fn stats(&self, product_id: Uuid) -> AppResult<ProductStats>;
}

/// Aggregation row shape for the stats query
#[derive(Debug, FromQueryResult)]
struct StatsRow {
    // AVG over an integer column comes back as numeric
    average_rating: Option<Decimal>,
    review_count: i64,
    rated_count: i64,
}

/// Concrete implementation of ReviewRepository
pub struct ReviewStore {
    db: DatabaseConnection,
}

impl ReviewStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewStore {
    async fn create(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        draft: ReviewDraft,
    ) -> AppResult<Review> {
        let (rating, title, content) = draft.into_parts();

        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            product_id: Set(product_id),
            rating: Set(rating),
            title: Set(title),
            content: Set(content),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                AppError::conflict("Review")
            } else {
                AppError::from(e)
            }
        })?;

        Ok(Review::from(model))
    }

    async fn find_by_product(&self, product_id: Uuid) -> AppResult<Vec<ReviewWithAuthor>> {
        let rows = ReviewEntity::find()
            .filter(review::Column::ProductId.eq(product_id))
            .order_by_desc(review::Column::CreatedAt)
            .find_also_related(user::Entity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        // Inner-join semantics: the FK guarantees an author row exists
        Ok(rows
            .into_iter()
            .filter_map(|(review, author)| {
                author.map(|author| ReviewWithAuthor {
                    id: review.id,
                    user_id: review.user_id,
                    product_id: review.product_id,
                    rating: review.rating,
                    title: review.title,
                    content: review.content,
                    created_at: review.created_at,
                    user: Reviewer {
                        id: author.id,
                        username: author.username,
                    },
                })
            })
            .collect())
    }

    async fn find_by_user_and_product(
        &self,
        user_id: Uuid,
        product_id: Uuid,
    ) -> AppResult<Option<Review>> {
        let result = ReviewEntity::find()
            .filter(review::Column::UserId.eq(user_id))
            .filter(review::Column::ProductId.eq(product_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Review::from))
    }

    async fn stats(&self, product_id: Uuid) -> AppResult<ProductStats> {
        // AVG skips NULL ratings, so text-only reviews never drag the
        // average down; COUNT(rating) vs COUNT(id) yields the unrated split.
        let row = ReviewEntity::find()
            .select_only()
            .column_as(SimpleExpr::from(Func::avg(Expr::col(review::Column::Rating))), "average_rating")
            .column_as(Expr::col(review::Column::Id).count(), "review_count")
            .column_as(Expr::col(review::Column::Rating).count(), "rated_count")
            .filter(review::Column::ProductId.eq(product_id))
            .into_model::<StatsRow>()
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(match row {
            Some(row) => ProductStats {
                average_rating: row
                    .average_rating
                    .and_then(|avg| avg.to_f64())
                    .unwrap_or(0.0),
                review_count: row.review_count.max(0) as u64,
                unrated_count: (row.review_count - row.rated_count).max(0) as u64,
            },
            None => ProductStats::empty(),
        })
    }
}
