//! Catalog service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use rust_decimal::Decimal;
use uuid::Uuid;

use storefront::domain::{Product, ProductStats, ReviewWithAuthor, Reviewer};
use storefront::errors::AppError;
use storefront::infra::{MockProductRepository, MockReviewRepository};
use storefront::services::{Catalog, CatalogService};

fn test_product(id: Uuid, name: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: "A sample catalog entry.".to_string(),
        price: Decimal::new(12999, 2),
        image_url: "https://example.com/item.jpg".to_string(),
        category: "Electronics".to_string(),
        created_at: Utc::now(),
    }
}

fn test_review(product_id: Uuid) -> ReviewWithAuthor {
    let user_id = Uuid::new_v4();
    ReviewWithAuthor {
        id: Uuid::new_v4(),
        user_id,
        product_id,
        rating: Some(5),
        title: None,
        content: Some("Exactly as described.".to_string()),
        created_at: Utc::now(),
        user: Reviewer {
            id: user_id,
            username: "buyer1".to_string(),
        },
    }
}

#[tokio::test]
async fn list_products_attaches_stats_per_product() {
    let rated_id = Uuid::new_v4();
    let quiet_id = Uuid::new_v4();

    let mut products = MockProductRepository::new();
    products.expect_list().returning(move || {
        Ok(vec![
            test_product(rated_id, "Speaker"),
            test_product(quiet_id, "Desk Lamp"),
        ])
    });

    let mut reviews = MockReviewRepository::new();
    reviews.expect_stats().returning(move |id| {
        if id == rated_id {
            // Ratings [5, 4] average to 4.5
            Ok(ProductStats {
                average_rating: 4.5,
                review_count: 2,
                unrated_count: 0,
            })
        } else {
            Ok(ProductStats::empty())
        }
    });

    let service = Catalog::new(Arc::new(products), Arc::new(reviews));
    let listing = service.list_products().await.unwrap();

    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].average_rating, 4.5);
    assert_eq!(listing[0].review_count, 2);
    assert_eq!(listing[1].average_rating, 0.0);
    assert_eq!(listing[1].review_count, 0);
    assert_eq!(listing[1].unrated_count, 0);
}

#[tokio::test]
async fn list_products_empty_catalog() {
    let mut products = MockProductRepository::new();
    products.expect_list().returning(|| Ok(vec![]));
    let reviews = MockReviewRepository::new();

    let service = Catalog::new(Arc::new(products), Arc::new(reviews));
    assert!(service.list_products().await.unwrap().is_empty());
}

#[tokio::test]
async fn product_detail_unknown_id_is_not_found() {
    let id = Uuid::new_v4();

    let mut products = MockProductRepository::new();
    products
        .expect_find_by_id()
        .with(eq(id))
        .returning(|_| Ok(None));
    let reviews = MockReviewRepository::new();

    let service = Catalog::new(Arc::new(products), Arc::new(reviews));
    let result = service.product_detail(id).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn product_detail_composes_reviews_and_stats() {
    let id = Uuid::new_v4();

    let mut products = MockProductRepository::new();
    products
        .expect_find_by_id()
        .with(eq(id))
        .returning(move |id| Ok(Some(test_product(id, "Tablet"))));

    let mut reviews = MockReviewRepository::new();
    reviews
        .expect_find_by_product()
        .with(eq(id))
        .returning(|product_id| Ok(vec![test_review(product_id)]));
    reviews.expect_stats().with(eq(id)).returning(|_| {
        Ok(ProductStats {
            average_rating: 5.0,
            review_count: 2,
            unrated_count: 1,
        })
    });

    let service = Catalog::new(Arc::new(products), Arc::new(reviews));
    let detail = service.product_detail(id).await.unwrap();

    assert_eq!(detail.id, id);
    assert_eq!(detail.name, "Tablet");
    assert_eq!(detail.reviews.len(), 1);
    assert_eq!(detail.reviews[0].user.username, "buyer1");
    assert_eq!(detail.average_rating, 5.0);
    assert_eq!(detail.review_count, 2);
    assert_eq!(detail.unrated_count, 1);
}
