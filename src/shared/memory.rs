//! In-memory repositories for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::shared::repository::{NamedRepository, Repository};

/// A record the in-memory store knows how to build and overwrite
pub trait Record: Clone + Send + Sync + 'static {
    type Input: Send + 'static;

    fn id(&self) -> Uuid;

    /// Unique natural key, if the entity has one
    fn natural_key(&self) -> Option<&str> {
        None
    }

    fn create(id: Uuid, input: Self::Input) -> Self;

    fn overwrite(&mut self, input: Self::Input);
}

/// Vec-backed store keeping insertion order. Enforces natural-key uniqueness
/// on insert and update the way the database's unique indexes do.
pub struct MemoryRepository<R> {
    rows: Mutex<Vec<R>>,
}

impl<R: Record> Default for MemoryRepository<R> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }
}

impl<R: Record> MemoryRepository<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Apply `f` to the record with `id` and return the updated copy
    pub fn modify(&self, id: Uuid, f: impl FnOnce(&mut R)) -> Option<R> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut().find(|r| r.id() == id)?;
        f(row);
        Some(row.clone())
    }

    fn key_taken(rows: &[R], key: Option<&str>, except: Option<Uuid>) -> bool {
        let Some(key) = key else { return false };
        rows.iter()
            .any(|r| Some(r.id()) != except && r.natural_key() == Some(key))
    }
}

#[async_trait]
impl<R: Record> Repository<R, R::Input> for MemoryRepository<R> {
    async fn find_all(&self) -> Result<Vec<R>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<R>> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id() == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<R>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| ids.contains(&r.id()))
            .cloned()
            .collect())
    }

    async fn insert(&self, input: R::Input) -> Result<R> {
        let record = R::create(Uuid::now_v7(), input);
        let mut rows = self.rows.lock().unwrap();
        if Self::key_taken(&rows, record.natural_key(), None) {
            return Err(AppError::Conflict("duplicate key".to_string()));
        }
        rows.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, input: R::Input) -> Result<Option<R>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(index) = rows.iter().position(|r| r.id() == id) else {
            return Ok(None);
        };
        let mut updated = rows[index].clone();
        updated.overwrite(input);
        if Self::key_taken(&rows, updated.natural_key(), Some(id)) {
            return Err(AppError::Conflict("duplicate key".to_string()));
        }
        rows[index] = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.rows.lock().unwrap().retain(|r| r.id() != id);
        Ok(())
    }
}

#[async_trait]
impl<R: Record> NamedRepository<R, R::Input> for MemoryRepository<R> {
    async fn find_by_name(&self, name: &str) -> Result<Option<R>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.natural_key() == Some(name))
            .cloned())
    }
}
