use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::read_error;
use crate::core::error::Result;
use crate::features::masjids::models::{MasjidNamaazTiming, TimingInput};
use crate::shared::repository::Repository;

/// PostgreSQL-backed masjid namaaz timing store
pub struct PgTimingRepository {
    pool: PgPool,
}

impl PgTimingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<MasjidNamaazTiming, TimingInput> for PgTimingRepository {
    async fn find_all(&self) -> Result<Vec<MasjidNamaazTiming>> {
        sqlx::query_as::<_, MasjidNamaazTiming>(
            r#"
            SELECT id, azaan_time, jamaat_time, masjid_id, namaaz_id, created_at, updated_at
            FROM masjid_namaaz_timings
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error(e, "list masjid namaaz timings"))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MasjidNamaazTiming>> {
        sqlx::query_as::<_, MasjidNamaazTiming>(
            r#"
            SELECT id, azaan_time, jamaat_time, masjid_id, namaaz_id, created_at, updated_at
            FROM masjid_namaaz_timings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "get masjid namaaz timing by id"))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<MasjidNamaazTiming>> {
        sqlx::query_as::<_, MasjidNamaazTiming>(
            r#"
            SELECT id, azaan_time, jamaat_time, masjid_id, namaaz_id, created_at, updated_at
            FROM masjid_namaaz_timings
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error(e, "get masjid namaaz timings by ids"))
    }

    async fn insert(&self, input: TimingInput) -> Result<MasjidNamaazTiming> {
        sqlx::query_as::<_, MasjidNamaazTiming>(
            r#"
            INSERT INTO masjid_namaaz_timings (id, azaan_time, jamaat_time, masjid_id, namaaz_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, azaan_time, jamaat_time, masjid_id, namaaz_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.azaan_time)
        .bind(&input.jamaat_time)
        .bind(input.masjid_id)
        .bind(input.namaaz_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| read_error(e, "create masjid namaaz timing"))
    }

    async fn update(&self, id: Uuid, input: TimingInput) -> Result<Option<MasjidNamaazTiming>> {
        sqlx::query_as::<_, MasjidNamaazTiming>(
            r#"
            UPDATE masjid_namaaz_timings
            SET azaan_time = $2, jamaat_time = $3, masjid_id = $4, namaaz_id = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, azaan_time, jamaat_time, masjid_id, namaaz_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.azaan_time)
        .bind(&input.jamaat_time)
        .bind(input.masjid_id)
        .bind(input.namaaz_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "update masjid namaaz timing"))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM masjid_namaaz_timings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| read_error(e, "delete masjid namaaz timing"))?;
        Ok(())
    }
}
