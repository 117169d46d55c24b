use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// City belonging to a state
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct City {
    pub id: Uuid,
    pub name: String,
    pub state_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityInput {
    pub name: String,
    pub state_id: Uuid,
}

#[cfg(test)]
impl crate::shared::memory::Record for City {
    type Input = CityInput;

    fn id(&self) -> Uuid {
        self.id
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn create(id: Uuid, input: CityInput) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            state_id: input.state_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn overwrite(&mut self, input: CityInput) {
        self.name = input.name;
        self.state_id = input.state_id;
        self.updated_at = Utc::now();
    }
}
