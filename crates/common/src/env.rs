//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::warn;

/// Warn when the static asset directory is missing; it is optional.
pub async fn ensure_env(static_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(static_dir).await.is_err() {
        warn!(%static_dir, "static assets directory not found; static assets will 404");
    }
    Ok(())
}
