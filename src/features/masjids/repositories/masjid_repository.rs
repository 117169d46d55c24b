use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::read_error;
use crate::core::error::Result;
use crate::features::masjids::models::{Masjid, MasjidInput};
use crate::shared::repository::Repository;

/// Masjid store; on top of CRUD it records where a masjid's timing chart lives
#[async_trait]
pub trait MasjidRepository: Repository<Masjid, MasjidInput> {
    /// `None` when no masjid has this id
    async fn set_timing_chart(&self, id: Uuid, url: &str) -> Result<Option<Masjid>>;
}

/// PostgreSQL-backed masjid store
pub struct PgMasjidRepository {
    pool: PgPool,
}

impl PgMasjidRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Masjid, MasjidInput> for PgMasjidRepository {
    async fn find_all(&self) -> Result<Vec<Masjid>> {
        sqlx::query_as::<_, Masjid>(
            r#"
            SELECT id, name, description, city_id, timing_chart_url, created_at, updated_at
            FROM masjids
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error(e, "list masjids"))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Masjid>> {
        sqlx::query_as::<_, Masjid>(
            r#"
            SELECT id, name, description, city_id, timing_chart_url, created_at, updated_at
            FROM masjids
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "get masjid by id"))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Masjid>> {
        sqlx::query_as::<_, Masjid>(
            r#"
            SELECT id, name, description, city_id, timing_chart_url, created_at, updated_at
            FROM masjids
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error(e, "get masjids by ids"))
    }

    async fn insert(&self, input: MasjidInput) -> Result<Masjid> {
        sqlx::query_as::<_, Masjid>(
            r#"
            INSERT INTO masjids (id, name, description, city_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, city_id, timing_chart_url, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.city_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| read_error(e, "create masjid"))
    }

    async fn update(&self, id: Uuid, input: MasjidInput) -> Result<Option<Masjid>> {
        sqlx::query_as::<_, Masjid>(
            r#"
            UPDATE masjids
            SET name = $2, description = $3, city_id = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, city_id, timing_chart_url, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.city_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "update masjid"))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM masjids WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| read_error(e, "delete masjid"))?;
        Ok(())
    }
}

#[async_trait]
impl MasjidRepository for PgMasjidRepository {
    async fn set_timing_chart(&self, id: Uuid, url: &str) -> Result<Option<Masjid>> {
        sqlx::query_as::<_, Masjid>(
            r#"
            UPDATE masjids
            SET timing_chart_url = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, city_id, timing_chart_url, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "set masjid timing chart"))
    }
}

#[cfg(test)]
#[async_trait]
impl MasjidRepository for crate::shared::memory::MemoryRepository<Masjid> {
    async fn set_timing_chart(&self, id: Uuid, url: &str) -> Result<Option<Masjid>> {
        Ok(self.modify(id, |masjid| {
            masjid.timing_chart_url = Some(url.to_string());
        }))
    }
}
