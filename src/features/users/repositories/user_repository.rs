use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::{read_error, write_error};
use crate::core::error::Result;
use crate::features::users::models::{NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// `email` must already be normalized
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn insert(&self, user: NewUser) -> Result<User>;

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<Option<User>>;

    /// Append `masjid_id` unless the user already has it
    async fn add_masjid(&self, id: Uuid, masjid_id: Uuid) -> Result<Option<User>>;
}

/// PostgreSQL-backed user store
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, role, masjid_ids, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "get user by id"))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, role, masjid_ids, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "get user by email"))
    }

    async fn insert(&self, user: NewUser) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, password_hash, role, masjid_ids, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "create user", || "email already exists".to_string()))
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET password_hash = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, password_hash, role, masjid_ids, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "update user password"))
    }

    async fn add_masjid(&self, id: Uuid, masjid_id: Uuid) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET masjid_ids = CASE
                    WHEN $2 = ANY(masjid_ids) THEN masjid_ids
                    ELSE array_append(masjid_ids, $2)
                END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, password_hash, role, masjid_ids, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(masjid_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error(e, "add masjid to user"))
    }
}
