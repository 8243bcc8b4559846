//! Password hashing port.

use thiserror::Error;

/// Password hashing service. Passwords are never stored or compared in clear
/// text; services hash through this port before anything reaches a repository.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
}

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Hashing error: {0}")]
    Hashing(String),
}
