use sea_orm::prelude::Uuid;

/// Read-only view of the user account a registration points at. The user
/// entity itself is owned by an external collaborator; this crate only
/// resolves it by id.
#[derive(Debug, Clone)]
pub struct User {
    id: Uuid,
    name: String,
    email: String,
}

impl User {
    pub fn new(id: Uuid, name: String, email: String) -> Self {
        Self { id, name, email }
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
}
