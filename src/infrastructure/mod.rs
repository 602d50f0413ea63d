pub mod argon2_password_hasher;
pub mod entity;
pub mod jwt_token_verifier;
pub mod registration_repository;
pub mod user_repository;
