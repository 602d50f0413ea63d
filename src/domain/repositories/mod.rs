pub mod registration_repository;
pub mod user_repository;
