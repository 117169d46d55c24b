use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::auth::model::UserRole;

/// Stored account. `email` is kept trimmed and lowercased.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: UserRole,
    /// Masjids this account is attached to, each at most once
    pub masjid_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[cfg(test)]
impl crate::shared::memory::Record for User {
    type Input = NewUser;

    fn id(&self) -> Uuid {
        self.id
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn create(id: Uuid, input: NewUser) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            email: input.email,
            password_hash: input.password_hash,
            role: input.role,
            masjid_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn overwrite(&mut self, input: NewUser) {
        self.name = input.name;
        self.email = input.email;
        self.password_hash = input.password_hash;
        self.role = input.role;
        self.updated_at = Utc::now();
    }
}
