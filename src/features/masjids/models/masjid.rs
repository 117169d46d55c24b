use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A mosque located in a city
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Masjid {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub city_id: Uuid,
    /// Set by the timing chart upload, never by create/update
    pub timing_chart_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasjidInput {
    pub name: String,
    pub description: Option<String>,
    pub city_id: Uuid,
}

#[cfg(test)]
impl crate::shared::memory::Record for Masjid {
    type Input = MasjidInput;

    fn id(&self) -> Uuid {
        self.id
    }

    fn create(id: Uuid, input: MasjidInput) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            description: input.description,
            city_id: input.city_id,
            timing_chart_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn overwrite(&mut self, input: MasjidInput) {
        self.name = input.name;
        self.description = input.description;
        self.city_id = input.city_id;
        self.updated_at = Utc::now();
    }
}
