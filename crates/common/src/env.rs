//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected paths exist at startup.

use tracing::info;

/// Ensure the data directory for the score file exists; note a fresh start.
pub async fn ensure_env(score_file: &str, data_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(score_file).await.is_err() {
        info!(%score_file, "score file not found; serving high score 0 until first submit");
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    Ok(())
}
