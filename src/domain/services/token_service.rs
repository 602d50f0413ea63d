use crate::domain::error::DomainError;

/// Identity extracted from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedCaller {
    pub user_id: String,
}

/// Verifies an inbound bearer token. Token issuance lives elsewhere.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<AuthenticatedCaller, DomainError>;
}
