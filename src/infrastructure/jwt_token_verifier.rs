use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    services::token_service::{AuthenticatedCaller, TokenVerifier},
};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // Subject (user ID)
    exp: i64,    // Expiration time
    iat: i64,    // Issued at
}

#[derive(Clone)]
pub struct JwtTokenVerifier {
    secret: String,
}

impl JwtTokenVerifier {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<AuthenticatedCaller, DomainError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| DomainError::AuthenticationFailed)?;

        Ok(AuthenticatedCaller {
            user_id: data.claims.sub,
        })
    }
}
