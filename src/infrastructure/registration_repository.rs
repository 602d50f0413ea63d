use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr,
};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::registration::{
        HashedPassword, NewRegistration, Registration, RegistrationPatch, Role,
    },
    repositories::registration_repository::RegistrationRepository,
};
use crate::infrastructure::entity::registrations;

#[derive(Clone)]
pub struct MysqlRegistrationRepository {
    db: DatabaseConnection,
}

impl MysqlRegistrationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_domain(model: registrations::Model) -> Result<Registration, RepositoryError> {
        let role = Role::parse(&model.role)
            .map_err(|_| RepositoryError::Corrupted(format!("unknown role '{}'", model.role)))?;

        Ok(Registration::new(
            model.id,
            model.name,
            model.email,
            HashedPassword::new(model.password_hash),
            role,
            model.user_id,
        ))
    }

    fn map_write_err(e: DbErr) -> RepositoryError {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => RepositoryError::DuplicateEmail,
            _ => RepositoryError::DatabaseError(e.to_string()),
        }
    }
}

#[async_trait]
impl RegistrationRepository for MysqlRegistrationRepository {
    async fn create(&self, registration: NewRegistration) -> Result<Registration, RepositoryError> {
        let id = Uuid::new_v4();
        let model = registrations::ActiveModel {
            id: Set(id),
            name: Set(registration.name.clone()),
            email: Set(registration.email.clone()),
            password_hash: Set(registration.password_hash.as_str().to_string()),
            role: Set(registration.role.as_str().to_string()),
            user_id: Set(registration.user_ref),
        };

        registrations::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(Self::map_write_err)?;

        Ok(Registration::new(
            id,
            registration.name,
            registration.email,
            registration.password_hash,
            registration.role,
            registration.user_ref,
        ))
    }

    async fn list_all(&self) -> Result<Vec<Registration>, RepositoryError> {
        let models = registrations::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::to_domain).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Registration>, RepositoryError> {
        let model = registrations::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        model.map(Self::to_domain).transpose()
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: RegistrationPatch,
    ) -> Result<Option<Registration>, RepositoryError> {
        let model = registrations::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let Some(model) = model else {
            return Ok(None);
        };

        // An empty patch would make sea-orm refuse the update; the record is
        // already in its final state anyway.
        if patch.is_empty() {
            return Self::to_domain(model).map(Some);
        }

        let mut active: registrations::ActiveModel = model.into();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(password_hash) = patch.password_hash {
            active.password_hash = Set(password_hash.as_str().to_string());
        }
        if let Some(role) = patch.role {
            active.role = Set(role.as_str().to_string());
        }
        if let Some(user_ref) = patch.user_ref {
            active.user_id = Set(user_ref);
        }

        let updated = active.update(&self.db).await.map_err(Self::map_write_err)?;

        Self::to_domain(updated).map(Some)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = registrations::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn find_by_user(&self, user_ref: Uuid) -> Result<Vec<Registration>, RepositoryError> {
        let models = registrations::Entity::find()
            .filter(registrations::Column::UserId.eq(user_ref))
            .all(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::to_domain).collect()
    }
}
