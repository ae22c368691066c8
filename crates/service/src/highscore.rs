use std::sync::Arc;

use tracing::debug;

use crate::errors::ServiceError;
use crate::store::HighScoreStore;

/// Result of submitting a candidate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The candidate beat the stored value and was persisted.
    NewHighScore(u64),
    /// The stored value stands; carries the current high score.
    NotHigher(u64),
}

/// Compare-and-persist over an injected store.
///
/// The read-check-write sequence is not serialized across callers; concurrent
/// submits race through the store and the last write wins.
#[derive(Clone)]
pub struct HighScoreService {
    store: Arc<dyn HighScoreStore>,
}

impl HighScoreService {
    pub fn new(store: Arc<dyn HighScoreStore>) -> Self {
        Self { store }
    }

    /// Current high score; 0 when nothing has been persisted yet.
    pub async fn current(&self) -> u64 {
        self.store.read().await
    }

    /// Persist `score` if it strictly exceeds the stored value.
    pub async fn submit(&self, score: u64) -> Result<SubmitOutcome, ServiceError> {
        let current = self.store.read().await;
        if score > current {
            self.store.write(score).await?;
            debug!(score, previous = current, "new high score persisted");
            Ok(SubmitOutcome::NewHighScore(score))
        } else {
            Ok(SubmitOutcome::NotHigher(current))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn service() -> HighScoreService {
        HighScoreService::new(MemoryStore::new(0))
    }

    #[tokio::test]
    async fn lower_then_higher_lands_on_higher() -> Result<(), anyhow::Error> {
        let svc = service();
        assert_eq!(svc.submit(10).await?, SubmitOutcome::NewHighScore(10));
        assert_eq!(svc.submit(42).await?, SubmitOutcome::NewHighScore(42));
        assert_eq!(svc.current().await, 42);
        Ok(())
    }

    #[tokio::test]
    async fn higher_then_lower_keeps_higher() -> Result<(), anyhow::Error> {
        let svc = service();
        assert_eq!(svc.submit(42).await?, SubmitOutcome::NewHighScore(42));
        assert_eq!(svc.submit(10).await?, SubmitOutcome::NotHigher(42));
        assert_eq!(svc.current().await, 42);
        Ok(())
    }

    #[tokio::test]
    async fn equal_score_is_not_higher() -> Result<(), anyhow::Error> {
        let svc = service();
        assert_eq!(svc.submit(7).await?, SubmitOutcome::NewHighScore(7));
        assert_eq!(svc.submit(7).await?, SubmitOutcome::NotHigher(7));
        assert_eq!(svc.current().await, 7);
        Ok(())
    }

    #[tokio::test]
    async fn fresh_service_reads_zero() {
        let svc = service();
        assert_eq!(svc.current().await, 0);
    }
}
