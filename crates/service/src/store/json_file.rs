use std::{path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};
use tokio::fs;

use super::HighScoreStore;
use crate::errors::ServiceError;

/// On-disk layout of the score file.
#[derive(Serialize, Deserialize, Debug, Default)]
struct ScoreRecord {
    #[serde(default)]
    high_score: u64,
}

/// File-backed store keeping the high score as a flat JSON record.
///
/// The file is the only copy of the state: every `read` goes back to disk so
/// writers outside this process stay visible. Writers are not coordinated;
/// when two submits race, the last `write` wins.
#[derive(Clone)]
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Initialize the store at the given path. Creates the parent directory
    /// if missing; the file itself only appears on the first write.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }
        Ok(Arc::new(Self { file_path }))
    }
}

#[async_trait::async_trait]
impl HighScoreStore for JsonFileStore {
    async fn read(&self) -> u64 {
        match fs::read(&self.file_path).await {
            Ok(bytes) => serde_json::from_slice::<ScoreRecord>(&bytes)
                .unwrap_or_default()
                .high_score,
            Err(_) => 0,
        }
    }

    async fn write(&self, value: u64) -> Result<(), ServiceError> {
        let record = ScoreRecord { high_score: value };
        let data = serde_json::to_vec(&record).map_err(|e| ServiceError::Encode(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }
}
