use crate::domain::{error::DomainError, models::registration::HashedPassword};

/// Service for hashing and verifying passwords
pub trait PasswordHasher: Clone {
    /// Hash a plain text password. Salted, so hashing the same input twice
    /// yields distinct digests.
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError>;

    /// Verify a plain text password against a hashed password. A mismatch is
    /// `Ok(false)`; only an unreadable digest is an error.
    fn verify(
        &self,
        plain_password: &str,
        hashed_password: &HashedPassword,
    ) -> Result<bool, DomainError>;
}
