use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::{read_error, write_error};
use crate::core::error::Result;
use crate::features::regions::models::{Country, CountryInput};
use crate::shared::repository::{NamedRepository, Repository};

/// PostgreSQL-backed country store
pub struct PgCountryRepository {
    pool: PgPool,
}

impl PgCountryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Country, CountryInput> for PgCountryRepository {
    async fn find_all(&self) -> Result<Vec<Country>> {
        sqlx::query_as::<_, Country>(
            r#"
            SELECT id, name, code, created_at, updated_at
            FROM countries
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error(e, "list countries"))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Country>> {
        sqlx::query_as::<_, Country>(
            r#"
            SELECT id, name, code, created_at, updated_at
            FROM countries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "get country by id"))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Country>> {
        sqlx::query_as::<_, Country>(
            r#"
            SELECT id, name, code, created_at, updated_at
            FROM countries
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error(e, "get countries by ids"))
    }

    async fn insert(&self, input: CountryInput) -> Result<Country> {
        sqlx::query_as::<_, Country>(
            r#"
            INSERT INTO countries (id, name, code)
            VALUES ($1, $2, $3)
            RETURNING id, name, code, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.name)
        .bind(&input.code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            write_error(e, "create country", || {
                format!("{} country is already present", input.name)
            })
        })
    }

    async fn update(&self, id: Uuid, input: CountryInput) -> Result<Option<Country>> {
        sqlx::query_as::<_, Country>(
            r#"
            UPDATE countries
            SET name = $2, code = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, code, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            write_error(e, "update country", || {
                format!("{} country is already present", input.name)
            })
        })
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM countries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| read_error(e, "delete country"))?;
        Ok(())
    }
}

#[async_trait]
impl NamedRepository<Country, CountryInput> for PgCountryRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Country>> {
        sqlx::query_as::<_, Country>(
            r#"
            SELECT id, name, code, created_at, updated_at
            FROM countries
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "get country by name"))
    }
}
