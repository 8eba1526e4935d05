//! Data directory and database path resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from path resolution and directory creation.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the system data directory.
    #[error("cannot determine system data directory")]
    NoDataDir,

    /// Failed to create a directory.
    #[error("failed to create directory {path}: {reason}")]
    CreateFailed {
        /// The directory that could not be created
        path: PathBuf,
        /// The underlying I/O error
        reason: String,
    },
}

/// Root directory for goyaku data.
///
/// Resolution order:
/// 1. `GOYAKU_DATA_DIR` environment variable
/// 2. System data directory (e.g. `~/.local/share/goyaku`)
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(dir) = env::var("GOYAKU_DATA_DIR") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    dirs::data_dir()
        .map(|d| d.join("goyaku"))
        .ok_or(PathError::NoDataDir)
}

/// Path to the glossary cache database, creating the data dir if needed.
pub fn database_path() -> Result<PathBuf, PathError> {
    let root = data_root()?;

    fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
        path: root.clone(),
        reason: e.to_string(),
    })?;

    Ok(root.join("goyaku.db"))
}
