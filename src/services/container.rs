//! Service Container - Centralized service access.
//!
//! Wires repositories into services once, then hands out shared trait
//! objects. Also hosts small helpers for running independent repository
//! calls concurrently.

use std::future::Future;
use std::sync::Arc;

use super::{AuthService, CatalogService, ReviewService};
use crate::errors::AppResult;
use crate::infra::{ProductStore, ReviewStore, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get catalog service
    fn catalog(&self) -> Arc<dyn CatalogService>;

    /// Get review service
    fn reviews(&self) -> Arc<dyn ReviewService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    catalog_service: Arc<dyn CatalogService>,
    review_service: Arc<dyn ReviewService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        catalog_service: Arc<dyn CatalogService>,
        review_service: Arc<dyn ReviewService>,
    ) -> Self {
        Self {
            auth_service,
            catalog_service,
            review_service,
        }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        use super::{Authenticator, Catalog, ReviewManager};

        let users = Arc::new(UserStore::new(db.clone()));
        let products = Arc::new(ProductStore::new(db.clone()));
        let reviews = Arc::new(ReviewStore::new(db));

        let auth_service = Arc::new(Authenticator::new(users.clone()));
        let catalog_service = Arc::new(Catalog::new(products.clone(), reviews.clone()));
        let review_service = Arc::new(ReviewManager::new(users, products, reviews));

        Self {
            auth_service,
            catalog_service,
            review_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }

    fn reviews(&self) -> Arc<dyn ReviewService> {
        self.review_service.clone()
    }
}

/// Helpers for running independent operations concurrently.
pub mod parallel {
    use super::*;
    use tokio::try_join;

    /// Execute two independent async operations in parallel.
    ///
    /// Both operations run concurrently; if either fails, the error is
    /// returned immediately.
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }

    /// Execute a collection of homogeneous async operations in parallel.
    ///
    /// Results are returned in the same order as the input futures.
    pub async fn join_all<F, T>(futures: Vec<F>) -> AppResult<Vec<T>>
    where
        F: Future<Output = AppResult<T>>,
    {
        let results = futures::future::join_all(futures).await;
        results.into_iter().collect()
    }
}
