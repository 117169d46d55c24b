//! Object storage for uploaded timing chart images.
//!
//! Production uses the MinIO/S3-compatible client; tests use an in-memory store.

use async_trait::async_trait;

use crate::core::error::AppError;

mod minio_client;
#[cfg(test)]
mod memory;

pub use minio_client::MinIOClient;
#[cfg(test)]
pub use memory::MemoryChartStorage;

/// Stores an uploaded file and hands back the URL it can be fetched from
#[async_trait]
pub trait ChartStorage: Send + Sync {
    /// `path` is relative to the store's public area
    async fn store(&self, path: &str, data: Vec<u8>, content_type: &str) -> Result<String, AppError>;
}
