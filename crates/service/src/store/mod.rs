pub mod json_file;
pub mod memory;

use crate::errors::ServiceError;

/// Persistence boundary for the single high-score value.
///
/// `read` is fail-soft: a missing, empty, or corrupt backing record reads as
/// 0 and never surfaces an error to the caller. `write` overwrites the record
/// and propagates unrecoverable I/O failures.
#[async_trait::async_trait]
pub trait HighScoreStore: Send + Sync {
    async fn read(&self) -> u64;
    async fn write(&self, value: u64) -> Result<(), ServiceError>;
}
