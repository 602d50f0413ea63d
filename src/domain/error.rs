use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Malformed identifier: {0}")]
    MalformedIdentifier(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Empty password")]
    EmptyPassword,

    #[error("Stored password hash is unreadable")]
    CorruptedHash,

    #[error("Password hashing failed")]
    HashingFailed,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Email is already registered")]
    DuplicateEmail,

    #[error("Corrupted record: {0}")]
    Corrupted(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
