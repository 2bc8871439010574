//! HTTP request handlers.

pub mod auth_handler;
pub mod product_handler;
pub mod review_handler;

pub use auth_handler::auth_routes;
pub use product_handler::product_routes;
pub use review_handler::review_routes;
