use sea_orm::prelude::Uuid;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::models::user::User;

/// Value object representing a hashed password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Create a new HashedPassword from an already hashed string
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    /// Get the hash as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The registration role, closed set. The wire literals are Portuguese:
/// "aluno", "professor", "coordenador".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "aluno")]
    Student,
    #[serde(rename = "professor")]
    Teacher,
    #[serde(rename = "coordenador")]
    Coordinator,
}

impl Role {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "aluno" => Ok(Self::Student),
            "professor" => Ok(Self::Teacher),
            "coordenador" => Ok(Self::Coordinator),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "aluno",
            Self::Teacher => "professor",
            Self::Coordinator => "coordenador",
        }
    }
}

/// A persisted school-registration record linking a person to a user account.
#[derive(Debug, Clone)]
pub struct Registration {
    id: Uuid,
    name: String,
    email: String,
    password_hash: HashedPassword,
    role: Role,
    user_ref: Uuid,
}

impl Registration {
    pub fn new(
        id: Uuid,
        name: String,
        email: String,
        password_hash: HashedPassword,
        role: Role,
        user_ref: Uuid,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            role,
            user_ref,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn user_ref(&self) -> Uuid {
        self.user_ref
    }
}

/// Write model handed to the store; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub password_hash: HashedPassword,
    pub role: Role,
    pub user_ref: Uuid,
}

/// Partial update: only the fields present are merged into the stored record.
/// The password hash is set only when the caller supplied a new plaintext
/// secret, so unrelated updates never re-hash.
#[derive(Debug, Clone, Default)]
pub struct RegistrationPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<HashedPassword>,
    pub role: Option<Role>,
    pub user_ref: Option<Uuid>,
}

impl RegistrationPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.role.is_none()
            && self.user_ref.is_none()
    }
}

/// A registration together with its resolved user relation. The relation is
/// `None` when the referenced user could not be resolved.
#[derive(Debug, Clone)]
pub struct RegistrationWithUser {
    pub registration: Registration,
    pub user: Option<User>,
}
