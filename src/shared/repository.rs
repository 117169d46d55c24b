//! Persistence seams.
//!
//! Every entity is stored behind one of these traits. The PostgreSQL
//! implementations live next to each feature; tests swap in
//! `shared::memory::MemoryRepository`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;

/// Store operations every entity supports. `I` is the validated input a record
/// is created from and fully overwritten with.
#[async_trait]
pub trait Repository<R, I>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<R>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<R>>;

    /// Batch lookup used to expand references; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<R>>;

    async fn insert(&self, input: I) -> Result<R>;

    /// Overwrite the writable fields; `None` when no record has this id
    async fn update(&self, id: Uuid, input: I) -> Result<Option<R>>;

    /// Remove the record if it exists. Never cascades to children.
    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Entities whose `name` is a natural key backed by a unique index
#[async_trait]
pub trait NamedRepository<R, I>: Repository<R, I> {
    async fn find_by_name(&self, name: &str) -> Result<Option<R>>;
}
