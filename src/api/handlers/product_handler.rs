//! Product catalog handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::domain::{ProductDetail, ProductWithStats, ReviewWithAuthor};
use crate::errors::AppResult;

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
        .route("/:id/reviews", get(product_reviews))
}

/// List all products with review aggregates
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "Product catalog", body = [ProductWithStats])
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<ProductWithStats>>> {
    let products = state.catalog_service.list_products().await?;
    Ok(Json(products))
}

/// Get one product with its reviews and aggregates
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Product detail", body = ProductDetail),
        (status = 400, description = "Malformed product identifier"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProductDetail>> {
    let detail = state.catalog_service.product_detail(id).await?;
    Ok(Json(detail))
}

/// List reviews for one product, newest first
#[utoipa::path(
    get,
    path = "/products/{id}/reviews",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Reviews with reviewer identity", body = [ReviewWithAuthor]),
        (status = 400, description = "Malformed product identifier")
    )
)]
pub async fn product_reviews(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<ReviewWithAuthor>>> {
    let reviews = state.review_service.reviews_for_product(id).await?;
    Ok(Json(reviews))
}
