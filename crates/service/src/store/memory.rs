use std::sync::Arc;

use tokio::sync::RwLock;

use super::HighScoreStore;
use crate::errors::ServiceError;

/// In-memory store for tests and embedding without a filesystem.
#[derive(Default)]
pub struct MemoryStore {
    value: RwLock<u64>,
}

impl MemoryStore {
    pub fn new(initial: u64) -> Arc<Self> {
        Arc::new(Self { value: RwLock::new(initial) })
    }
}

#[async_trait::async_trait]
impl HighScoreStore for MemoryStore {
    async fn read(&self) -> u64 {
        *self.value.read().await
    }

    async fn write(&self, value: u64) -> Result<(), ServiceError> {
        *self.value.write().await = value;
        Ok(())
    }
}
