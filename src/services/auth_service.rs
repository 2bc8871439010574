//! Authentication service - registration and credential checks.
//!
//! Uses the domain Password value object for hashing; repositories are
//! injected as trait objects.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, username: String, email: String, password: String)
        -> AppResult<User>;

    /// Check credentials and return the account
    async fn login(&self, email: String, password: String) -> AppResult<User>;
}

/// Concrete implementation of AuthService
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, username: String, email: String, password: String) -> AppResult<User> {
        // Email/username format is validated by the handler's ValidatedJson
        // extractor; the unique columns remain the arbiter under races.
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email"));
        }
        if self.users.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict("Username"));
        }

        let password_hash = Password::new(&password)?.into_string();
        self.users.create(username, email, password_hash).await
    }

    async fn login(&self, email: String, password: String) -> AppResult<User> {
        let user = self.users.find_by_email(&email).await?;

        // Verify against a dummy hash when the account is missing so an
        // unknown email is not distinguishable from a wrong password by
        // timing. Both cases surface as the same generic 401.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let stored = Password::from_hash(
            user.as_ref()
                .map(|u| u.password_hash.clone())
                .unwrap_or_else(|| dummy_hash.to_string()),
        );
        let password_valid = stored.verify(&password);

        match user {
            Some(user) if password_valid => Ok(user),
            _ => Err(AppError::InvalidCredentials),
        }
    }
}
