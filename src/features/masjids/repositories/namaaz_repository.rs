use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::{read_error, write_error};
use crate::core::error::Result;
use crate::features::masjids::models::{Namaaz, NamaazInput};
use crate::shared::repository::{NamedRepository, Repository};

/// PostgreSQL-backed namaaz store
pub struct PgNamaazRepository {
    pool: PgPool,
}

impl PgNamaazRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Namaaz, NamaazInput> for PgNamaazRepository {
    async fn find_all(&self) -> Result<Vec<Namaaz>> {
        sqlx::query_as::<_, Namaaz>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM namaaz
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error(e, "list namaaz"))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Namaaz>> {
        sqlx::query_as::<_, Namaaz>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM namaaz
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "get namaaz by id"))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Namaaz>> {
        sqlx::query_as::<_, Namaaz>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM namaaz
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error(e, "get namaaz by ids"))
    }

    async fn insert(&self, input: NamaazInput) -> Result<Namaaz> {
        sqlx::query_as::<_, Namaaz>(
            r#"
            INSERT INTO namaaz (id, name)
            VALUES ($1, $2)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            write_error(e, "create namaaz", || {
                format!("{} namaaz is already present", input.name)
            })
        })
    }

    async fn update(&self, id: Uuid, input: NamaazInput) -> Result<Option<Namaaz>> {
        sqlx::query_as::<_, Namaaz>(
            r#"
            UPDATE namaaz
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            write_error(e, "update namaaz", || {
                format!("{} namaaz is already present", input.name)
            })
        })
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM namaaz WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| read_error(e, "delete namaaz"))?;
        Ok(())
    }
}

#[async_trait]
impl NamedRepository<Namaaz, NamaazInput> for PgNamaazRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Namaaz>> {
        sqlx::query_as::<_, Namaaz>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM namaaz
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "get namaaz by name"))
    }
}
