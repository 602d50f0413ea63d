pub mod registration;
pub mod user;
