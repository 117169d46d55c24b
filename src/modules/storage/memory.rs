use std::sync::Mutex;

use async_trait::async_trait;

use super::ChartStorage;
use crate::core::error::AppError;

/// Keeps uploads in memory; URLs use the `memory://` scheme
#[derive(Default)]
pub struct MemoryChartStorage {
    objects: Mutex<Vec<(String, usize, String)>>,
}

impl MemoryChartStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored paths in upload order
    pub fn paths(&self) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _, _)| path.clone())
            .collect()
    }
}

#[async_trait]
impl ChartStorage for MemoryChartStorage {
    async fn store(&self, path: &str, data: Vec<u8>, content_type: &str) -> Result<String, AppError> {
        self.objects
            .lock()
            .unwrap()
            .push((path.to_string(), data.len(), content_type.to_string()));
        Ok(format!("memory://{}", path))
    }
}
