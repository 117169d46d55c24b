use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Country, the top of the geographic hierarchy
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Country {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated writable fields of a country
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryInput {
    pub name: String,
    pub code: String,
}

#[cfg(test)]
impl crate::shared::memory::Record for Country {
    type Input = CountryInput;

    fn id(&self) -> Uuid {
        self.id
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn create(id: Uuid, input: CountryInput) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            code: input.code,
            created_at: now,
            updated_at: now,
        }
    }

    fn overwrite(&mut self, input: CountryInput) {
        self.name = input.name;
        self.code = input.code;
        self.updated_at = Utc::now();
    }
}
