use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A named daily prayer (Fajr, Zuhr, ...)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Namaaz {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamaazInput {
    pub name: String,
}

#[cfg(test)]
impl crate::shared::memory::Record for Namaaz {
    type Input = NamaazInput;

    fn id(&self) -> Uuid {
        self.id
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn create(id: Uuid, input: NamaazInput) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            created_at: now,
            updated_at: now,
        }
    }

    fn overwrite(&mut self, input: NamaazInput) {
        self.name = input.name;
        self.updated_at = Utc::now();
    }
}
