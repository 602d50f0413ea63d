use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::registration::{NewRegistration, Registration, RegistrationPatch},
};

/// Persistence boundary for registration records, keyed by id. Email
/// uniqueness is enforced here (atomically at insert/update time), not by
/// the callers.
#[async_trait]
pub trait RegistrationRepository {
    /// Insert a new record, assigning its id. Fails with `DuplicateEmail`
    /// when the email is already taken.
    async fn create(&self, registration: NewRegistration) -> Result<Registration, RepositoryError>;

    /// All registrations, insertion order not guaranteed.
    async fn list_all(&self) -> Result<Vec<Registration>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Registration>, RepositoryError>;

    /// Merge the supplied fields into the stored record and return it after
    /// the merge. Fields not present in the patch are untouched.
    async fn update_by_id(
        &self,
        id: Uuid,
        patch: RegistrationPatch,
    ) -> Result<Option<Registration>, RepositoryError>;

    /// Returns whether a record was actually removed.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepositoryError>;

    /// All registrations referencing the given user; empty when none match.
    async fn find_by_user(&self, user_ref: Uuid) -> Result<Vec<Registration>, RepositoryError>;
}
