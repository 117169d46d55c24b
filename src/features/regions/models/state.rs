use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// State (province/region) belonging to a country
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct State {
    pub id: Uuid,
    pub name: String,
    pub country_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateInput {
    pub name: String,
    pub country_id: Uuid,
}

#[cfg(test)]
impl crate::shared::memory::Record for State {
    type Input = StateInput;

    fn id(&self) -> Uuid {
        self.id
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn create(id: Uuid, input: StateInput) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            country_id: input.country_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn overwrite(&mut self, input: StateInput) {
        self.name = input.name;
        self.country_id = input.country_id;
        self.updated_at = Utc::now();
    }
}
