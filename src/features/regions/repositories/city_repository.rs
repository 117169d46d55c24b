use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::{read_error, write_error};
use crate::core::error::Result;
use crate::features::regions::models::{City, CityInput};
use crate::shared::repository::{NamedRepository, Repository};

/// PostgreSQL-backed city store
pub struct PgCityRepository {
    pool: PgPool,
}

impl PgCityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<City, CityInput> for PgCityRepository {
    async fn find_all(&self) -> Result<Vec<City>> {
        sqlx::query_as::<_, City>(
            r#"
            SELECT id, name, state_id, created_at, updated_at
            FROM cities
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error(e, "list cities"))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<City>> {
        sqlx::query_as::<_, City>(
            r#"
            SELECT id, name, state_id, created_at, updated_at
            FROM cities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "get city by id"))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<City>> {
        sqlx::query_as::<_, City>(
            r#"
            SELECT id, name, state_id, created_at, updated_at
            FROM cities
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error(e, "get cities by ids"))
    }

    async fn insert(&self, input: CityInput) -> Result<City> {
        sqlx::query_as::<_, City>(
            r#"
            INSERT INTO cities (id, name, state_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, state_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.name)
        .bind(input.state_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            write_error(e, "create city", || {
                format!("{} city is already present", input.name)
            })
        })
    }

    async fn update(&self, id: Uuid, input: CityInput) -> Result<Option<City>> {
        sqlx::query_as::<_, City>(
            r#"
            UPDATE cities
            SET name = $2, state_id = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, state_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.state_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            write_error(e, "update city", || {
                format!("{} city is already present", input.name)
            })
        })
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| read_error(e, "delete city"))?;
        Ok(())
    }
}

#[async_trait]
impl NamedRepository<City, CityInput> for PgCityRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<City>> {
        sqlx::query_as::<_, City>(
            r#"
            SELECT id, name, state_id, created_at, updated_at
            FROM cities
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "get city by name"))
    }
}
