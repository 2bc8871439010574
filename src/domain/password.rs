//! Password value object.
//!
//! Encapsulates Argon2 hashing and verification so plaintext passwords
//! never reach the storage layer.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

/// A hashed password. Immutable, compared by value.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain-text password with a fresh random salt.
    ///
    /// # Errors
    /// Returns a validation error if the password is shorter than
    /// [`MIN_PASSWORD_LENGTH`].
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.len() < MIN_PASSWORD_LENGTH as usize {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?
            .to_string();

        Ok(Self { hash })
    }

    /// Wrap an existing hash loaded from the database.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain-text password against this hash.
    ///
    /// Malformed hashes verify as false rather than erroring.
    pub fn verify(&self, plain_text: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = Password::new("correct horse battery").unwrap();

        assert!(password.verify("correct horse battery"));
        assert!(!password.verify("wrong horse battery"));
    }

    #[test]
    fn restores_from_stored_hash() {
        let password = Password::new("stored-password-1").unwrap();
        let restored = Password::from_hash(password.as_str().to_string());

        assert!(restored.verify("stored-password-1"));
    }

    #[test]
    fn same_password_gets_different_salts() {
        let first = Password::new("shared-secret-9").unwrap();
        let second = Password::new("shared-secret-9").unwrap();

        assert_ne!(first.as_str(), second.as_str());
        assert!(first.verify("shared-secret-9"));
        assert!(second.verify("shared-secret-9"));
    }

    #[test]
    fn rejects_short_password() {
        assert!(Password::new("short").is_err());
        // Exactly at the minimum is accepted
        assert!(Password::new("12345678").is_ok());
    }

    #[test]
    fn malformed_hash_never_verifies() {
        let bogus = Password::from_hash("not-an-argon2-hash".to_string());
        assert!(!bogus.verify("anything"));
    }
}
