//! Integration tests for API endpoints.
//!
//! These tests drive the real router with mock services, so they cover
//! routing, extraction, validation, and error mapping without a database.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use storefront::api::{create_router, AppState};
use storefront::domain::{
    ProductDetail, ProductWithStats, Review, ReviewDraft, ReviewWithAuthor, User,
};
use storefront::errors::{AppError, AppResult};
use storefront::infra::Database;
use storefront::services::{AuthService, CatalogService, ReviewService};

// =============================================================================
// Mock Services for Testing
// =============================================================================

/// Mock auth service with one known account
struct MockAuthService;

#[async_trait]
impl AuthService for MockAuthService {
    async fn register(&self, username: String, email: String, _password: String) -> AppResult<User> {
        Ok(User {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash: "hashed".to_string(),
            created_at: Utc::now(),
        })
    }

    async fn login(&self, email: String, password: String) -> AppResult<User> {
        if password == "SuperSecret99" {
            Ok(User {
                id: Uuid::new_v4(),
                username: "jane_doe".to_string(),
                email,
                password_hash: "hashed".to_string(),
                created_at: Utc::now(),
            })
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

/// Mock catalog service with a single product and no known detail ids
struct MockCatalogService;

#[async_trait]
impl CatalogService for MockCatalogService {
    async fn list_products(&self) -> AppResult<Vec<ProductWithStats>> {
        Ok(vec![ProductWithStats {
            id: Uuid::new_v4(),
            name: "Wireless Bluetooth Speaker".to_string(),
            description: "Portable waterproof speaker.".to_string(),
            price: Decimal::new(12999, 2),
            image_url: "https://example.com/speaker.jpg".to_string(),
            category: "Electronics".to_string(),
            created_at: Utc::now(),
            average_rating: 4.5,
            review_count: 2,
            unrated_count: 0,
        }])
    }

    async fn product_detail(&self, _id: Uuid) -> AppResult<ProductDetail> {
        Err(AppError::NotFound)
    }
}

/// Mock review service that applies the real submission validation
struct MockReviewService;

#[async_trait]
impl ReviewService for MockReviewService {
    async fn submit(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        rating: Option<i16>,
        title: Option<String>,
        content: Option<String>,
    ) -> AppResult<Review> {
        let draft = ReviewDraft::new(rating, title, content)?;
        Ok(Review {
            id: Uuid::new_v4(),
            user_id,
            product_id,
            rating: draft.rating(),
            title: draft.title().map(str::to_string),
            content: draft.content().map(str::to_string),
            created_at: Utc::now(),
        })
    }

    async fn reviews_for_product(&self, _product_id: Uuid) -> AppResult<Vec<ReviewWithAuthor>> {
        Ok(vec![])
    }

    async fn has_reviewed(&self, _user_id: Uuid, _product_id: Uuid) -> AppResult<bool> {
        Ok(false)
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn test_router() -> axum::Router {
    let state = AppState::new(
        Arc::new(MockAuthService),
        Arc::new(MockCatalogService),
        Arc::new(MockReviewService),
        Arc::new(Database::from_connection(sea_orm::DatabaseConnection::default())),
    );
    create_router(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Authentication Endpoints
// =============================================================================

#[tokio::test]
async fn register_returns_user_without_password() {
    let response = test_router()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            json!({
                "username": "jane_doe",
                "email": "jane@example.com",
                "password": "SuperSecret99"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    let user = &body["user"];
    assert_eq!(user["username"], "jane_doe");
    assert_eq!(user["email"], "jane@example.com");
    assert!(user.get("createdAt").is_some());
    assert!(user.get("password").is_none());
    assert!(user.get("passwordHash").is_none());
}

#[tokio::test]
async fn register_rejects_invalid_email() {
    let response = test_router()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            json!({
                "username": "jane_doe",
                "email": "not-an-email",
                "password": "SuperSecret99"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn login_rejects_bad_credentials_with_401() {
    let response = test_router()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            json!({
                "email": "jane@example.com",
                "password": "WrongSecret99"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn login_returns_user_on_success() {
    let response = test_router()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            json!({
                "email": "jane@example.com",
                "password": "SuperSecret99"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["user"]["username"], "jane_doe");
}

// =============================================================================
// Product Endpoints
// =============================================================================

#[tokio::test]
async fn product_listing_carries_aggregates() {
    let response = test_router().oneshot(get_request("/products")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let first = &body[0];
    assert_eq!(first["name"], "Wireless Bluetooth Speaker");
    assert_eq!(first["averageRating"], 4.5);
    assert_eq!(first["reviewCount"], 2);
    assert_eq!(first["unratedCount"], 0);
    // Prices keep their two decimal places on the wire
    assert_eq!(first["price"], "129.99");
}

#[tokio::test]
async fn unknown_product_is_404() {
    let uri = format!("/products/{}", Uuid::new_v4());
    let response = test_router().oneshot(get_request(&uri)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_product_id_is_400() {
    let response = test_router()
        .oneshot(get_request("/products/not-a-uuid"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Review Endpoints
// =============================================================================

#[tokio::test]
async fn create_review_returns_201() {
    let response = test_router()
        .oneshot(json_request(
            "POST",
            "/reviews",
            json!({
                "userId": Uuid::new_v4(),
                "productId": Uuid::new_v4(),
                "rating": 4,
                "title": "Solid",
                "content": "Does what it says."
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["rating"], 4);
    assert_eq!(body["title"], "Solid");
    assert!(body.get("createdAt").is_some());
}

#[tokio::test]
async fn create_review_normalizes_zero_rating() {
    let response = test_router()
        .oneshot(json_request(
            "POST",
            "/reviews",
            json!({
                "userId": Uuid::new_v4(),
                "productId": Uuid::new_v4(),
                "rating": 0,
                "content": "Text only."
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert!(body["rating"].is_null());
}

#[tokio::test]
async fn create_review_rejects_empty_submission() {
    let response = test_router()
        .oneshot(json_request(
            "POST",
            "/reviews",
            json!({
                "userId": Uuid::new_v4(),
                "productId": Uuid::new_v4(),
                "content": "   "
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_review_rejects_out_of_range_rating() {
    let response = test_router()
        .oneshot(json_request(
            "POST",
            "/reviews",
            json!({
                "userId": Uuid::new_v4(),
                "productId": Uuid::new_v4(),
                "rating": 7
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn review_check_reports_has_reviewed_flag() {
    let uri = format!(
        "/reviews/check?userId={}&productId={}",
        Uuid::new_v4(),
        Uuid::new_v4()
    );
    let response = test_router().oneshot(get_request(&uri)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["hasReviewed"], false);
}

// =============================================================================
// Root Endpoint
// =============================================================================

#[tokio::test]
async fn root_returns_welcome_message() {
    let response = test_router().oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Welcome to the Storefront API");
}
