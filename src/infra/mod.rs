//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories
//! - Catalog seeding

pub mod db;
pub mod repositories;
pub mod seed;

pub use db::{Database, Migrator};
pub use repositories::{
    NewProduct, ProductRepository, ProductStore, ReviewRepository, ReviewStore, UserRepository,
    UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockProductRepository, MockReviewRepository, MockUserRepository};
