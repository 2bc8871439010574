//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, product_handler, review_handler};
use crate::domain::{
    ProductDetail, ProductStats, ProductWithStats, Review, ReviewWithAuthor, Reviewer,
    UserResponse,
};

/// OpenAPI documentation for the Storefront API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "Product-review API: catalog browsing, user accounts, one review per user per product",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // Product endpoints
        product_handler::list_products,
        product_handler::get_product,
        product_handler::product_reviews,
        // Review endpoints
        review_handler::create_review,
        review_handler::check_review,
    ),
    components(
        schemas(
            // Domain types
            UserResponse,
            Reviewer,
            Review,
            ReviewWithAuthor,
            ProductStats,
            ProductWithStats,
            ProductDetail,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::AuthResponse,
            // Review handler types
            review_handler::CreateReviewRequest,
            review_handler::CheckReviewResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Products", description = "Catalog browsing with review aggregates"),
        (name = "Reviews", description = "Review submission and lookups")
    )
)]
pub struct ApiDoc;
