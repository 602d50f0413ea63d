use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{error::RepositoryError, models::user::User};

/// Lookup into the externally owned user collection.
#[async_trait]
pub trait UserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
}
