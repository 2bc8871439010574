//! Review submission and lookup handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::Review;
use crate::errors::AppResult;

/// Review submission request.
///
/// A submission must carry a star rating (1-5) or non-empty content, or
/// both; a rating of 0 counts as "no rating given".
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    /// Reviewer identifier
    pub user_id: Uuid,
    /// Product identifier
    pub product_id: Uuid,
    /// Star rating, 0-5 (0 or absent = no rating)
    #[validate(range(min = 0, max = 5, message = "Rating must be between 1 and 5"))]
    #[schema(example = 5, minimum = 0, maximum = 5)]
    pub rating: Option<i16>,
    /// Optional headline
    #[schema(example = "Great sound")]
    pub title: Option<String>,
    /// Optional free-text body
    #[schema(example = "Comfortable even after hours of listening.")]
    pub content: Option<String>,
}

/// Query parameters for the "already reviewed" lookup
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CheckReviewQuery {
    /// Reviewer identifier
    pub user_id: Uuid,
    /// Product identifier
    pub product_id: Uuid,
}

/// Response for the "already reviewed" lookup
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckReviewResponse {
    /// Whether the user already reviewed the product
    pub has_reviewed: bool,
}

/// Create review routes
pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_review))
        .route("/check", get(check_review))
}

/// Submit a review
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "Reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Unknown user or product"),
        (status = 409, description = "User already reviewed this product")
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let review = state
        .review_service
        .submit(
            payload.user_id,
            payload.product_id,
            payload.rating,
            payload.title,
            payload.content,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// Check whether a user has already reviewed a product
#[utoipa::path(
    get,
    path = "/reviews/check",
    tag = "Reviews",
    params(CheckReviewQuery),
    responses(
        (status = 200, description = "Lookup result", body = CheckReviewResponse),
        (status = 400, description = "Malformed user or product identifier")
    )
)]
pub async fn check_review(
    State(state): State<AppState>,
    Query(query): Query<CheckReviewQuery>,
) -> AppResult<Json<CheckReviewResponse>> {
    let has_reviewed = state
        .review_service
        .has_reviewed(query.user_id, query.product_id)
        .await?;

    Ok(Json(CheckReviewResponse { has_reviewed }))
}
