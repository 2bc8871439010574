//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{AuthService, CatalogService, ReviewService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Catalog service
    pub catalog_service: Arc<dyn CatalogService>,
    /// Review service
    pub review_service: Arc<dyn ReviewService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database handle.
    ///
    /// This is the recommended way to create AppState as it uses
    /// the ServiceContainer for centralized service wiring.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            auth_service: container.auth(),
            catalog_service: container.catalog(),
            review_service: container.reviews(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        catalog_service: Arc<dyn CatalogService>,
        review_service: Arc<dyn ReviewService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            catalog_service,
            review_service,
            database,
        }
    }
}
