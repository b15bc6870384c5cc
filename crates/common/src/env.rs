//! Environment/runtime helpers
//!
//! Makes sure the directory holding a file-backed SQLite database exists
//! before the pool tries to create the file.

use std::path::PathBuf;

use tracing::info;

/// Extract the on-disk path of a SQLite URL. `None` for in-memory databases.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.contains(":memory:") || path.starts_with("file:") {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Create the parent directory of the database file if it is missing.
pub async fn ensure_db_dir(url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(url) else { return Ok(()) };
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
            info!(dir = %dir.display(), "database directory ready");
        }
        _ => {}
    }
    Ok(())
}
