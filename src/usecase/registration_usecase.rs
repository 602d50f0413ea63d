use uuid::Uuid;

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::registration::{
        NewRegistration, Registration, RegistrationPatch, RegistrationWithUser, Role,
    },
    models::user::User,
    repositories::{
        registration_repository::RegistrationRepository, user_repository::UserRepository,
    },
    services::password_service::PasswordHasher,
};

/// Caller-supplied fields for a new registration. `role` and `user_ref`
/// arrive as raw text and are validated here, not at the storage layer.
#[derive(Debug, Clone)]
pub struct CreateRegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub user_ref: String,
}

/// Partial-update fields; only the ones present are touched.
#[derive(Debug, Clone, Default)]
pub struct UpdateRegistrationInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub user_ref: Option<String>,
}

/// Orchestrates the registration CRUD flow: explicit validation, hashing of
/// the plaintext secret on write, store delegation, and the user join.
pub struct RegistrationUsecase<R, U, P> {
    registration_repository: R,
    user_repository: U,
    password_hasher: P,
}

impl<R, U, P> RegistrationUsecase<R, U, P>
where
    R: RegistrationRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    pub fn new(registration_repository: R, user_repository: U, password_hasher: P) -> Self {
        Self {
            registration_repository,
            user_repository,
            password_hasher,
        }
    }

    pub async fn create(
        &self,
        input: CreateRegistrationInput,
    ) -> Result<Registration, DomainError> {
        require_non_empty(&input.name, "name")?;
        require_non_empty(&input.email, "email")?;
        require_non_empty(&input.password, "senha")?;
        let role = Role::parse(&input.role)?;
        let user_ref = parse_id(&input.user_ref)?;

        let password_hash = self.password_hasher.hash(&input.password)?;

        let registration = self
            .registration_repository
            .create(NewRegistration {
                name: input.name,
                email: input.email,
                password_hash,
                role,
                user_ref,
            })
            .await?;

        Ok(registration)
    }

    pub async fn list(&self) -> Result<Vec<RegistrationWithUser>, DomainError> {
        let registrations = self.registration_repository.list_all().await?;

        let mut resolved = Vec::with_capacity(registrations.len());
        for registration in registrations {
            let user = self.resolve_user(registration.user_ref()).await;
            resolved.push(RegistrationWithUser { registration, user });
        }

        Ok(resolved)
    }

    pub async fn get(&self, id: &str) -> Result<RegistrationWithUser, DomainError> {
        let id = parse_id(id)?;

        let registration = self
            .registration_repository
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let user = self.resolve_user(registration.user_ref()).await;

        Ok(RegistrationWithUser { registration, user })
    }

    pub async fn update(
        &self,
        id: &str,
        input: UpdateRegistrationInput,
    ) -> Result<Registration, DomainError> {
        let id = parse_id(id)?;

        // Re-hash only when the request actually carries a new secret;
        // updates to unrelated fields must leave the stored hash alone.
        let password_hash = match input.password.as_deref() {
            Some(password) => Some(self.password_hasher.hash(password)?),
            None => None,
        };

        let patch = RegistrationPatch {
            name: input.name,
            email: input.email,
            password_hash,
            role: input.role.as_deref().map(Role::parse).transpose()?,
            user_ref: input.user_ref.as_deref().map(parse_id).transpose()?,
        };

        let registration = self
            .registration_repository
            .update_by_id(id, patch)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(registration)
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let id = parse_id(id)?;

        let deleted = self.registration_repository.delete_by_id(id).await?;
        if !deleted {
            return Err(RepositoryError::NotFound.into());
        }

        Ok(())
    }

    /// Confirms the referenced user exists before touching the registration
    /// store at all; an empty result set is success, not an error.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Registration>, DomainError> {
        let user_id = parse_id(user_id)?;

        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let registrations = self.registration_repository.find_by_user(user_id).await?;

        Ok(registrations)
    }

    // A failed join leaves the relation unresolved instead of failing the
    // whole operation.
    async fn resolve_user(&self, user_ref: Uuid) -> Option<User> {
        self.user_repository
            .find_by_id(user_ref)
            .await
            .unwrap_or(None)
    }
}

fn require_non_empty(value: &str, field: &'static str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(())
}

fn parse_id(value: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|_| DomainError::MalformedIdentifier(value.to_string()))
}
