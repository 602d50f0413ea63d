use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError, models::user::User, repositories::user_repository::UserRepository,
};
use crate::infrastructure::entity::users;

#[derive(Clone)]
pub struct MysqlUserRepository {
    db: DatabaseConnection,
}

impl MysqlUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for MysqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let user = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|model| User::new(model.id, model.name, model.email)))
    }
}
