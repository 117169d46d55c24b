use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::{read_error, write_error};
use crate::core::error::Result;
use crate::features::regions::models::{State, StateInput};
use crate::shared::repository::{NamedRepository, Repository};

/// PostgreSQL-backed state store
pub struct PgStateRepository {
    pool: PgPool,
}

impl PgStateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<State, StateInput> for PgStateRepository {
    async fn find_all(&self) -> Result<Vec<State>> {
        sqlx::query_as::<_, State>(
            r#"
            SELECT id, name, country_id, created_at, updated_at
            FROM states
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error(e, "list states"))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<State>> {
        sqlx::query_as::<_, State>(
            r#"
            SELECT id, name, country_id, created_at, updated_at
            FROM states
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "get state by id"))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<State>> {
        sqlx::query_as::<_, State>(
            r#"
            SELECT id, name, country_id, created_at, updated_at
            FROM states
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error(e, "get states by ids"))
    }

    async fn insert(&self, input: StateInput) -> Result<State> {
        sqlx::query_as::<_, State>(
            r#"
            INSERT INTO states (id, name, country_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, country_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.name)
        .bind(input.country_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            write_error(e, "create state", || {
                format!("{} state is already present", input.name)
            })
        })
    }

    async fn update(&self, id: Uuid, input: StateInput) -> Result<Option<State>> {
        sqlx::query_as::<_, State>(
            r#"
            UPDATE states
            SET name = $2, country_id = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, country_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.country_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            write_error(e, "update state", || {
                format!("{} state is already present", input.name)
            })
        })
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM states WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| read_error(e, "delete state"))?;
        Ok(())
    }
}

#[async_trait]
impl NamedRepository<State, StateInput> for PgStateRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<State>> {
        sqlx::query_as::<_, State>(
            r#"
            SELECT id, name, country_id, created_at, updated_at
            FROM states
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "get state by name"))
    }
}
