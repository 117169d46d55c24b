use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Azaan and jamaat times of one namaaz at one masjid.
///
/// Times are free-form strings as entered by the admin.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MasjidNamaazTiming {
    pub id: Uuid,
    pub azaan_time: String,
    pub jamaat_time: String,
    pub masjid_id: Uuid,
    pub namaaz_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingInput {
    pub azaan_time: String,
    pub jamaat_time: String,
    pub masjid_id: Uuid,
    pub namaaz_id: Uuid,
}

#[cfg(test)]
impl crate::shared::memory::Record for MasjidNamaazTiming {
    type Input = TimingInput;

    fn id(&self) -> Uuid {
        self.id
    }

    fn create(id: Uuid, input: TimingInput) -> Self {
        let now = Utc::now();
        Self {
            id,
            azaan_time: input.azaan_time,
            jamaat_time: input.jamaat_time,
            masjid_id: input.masjid_id,
            namaaz_id: input.namaaz_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn overwrite(&mut self, input: TimingInput) {
        self.azaan_time = input.azaan_time;
        self.jamaat_time = input.jamaat_time;
        self.masjid_id = input.masjid_id;
        self.namaaz_id = input.namaaz_id;
        self.updated_at = Utc::now();
    }
}
