use std::path::PathBuf;

use thiserror::Error;
use wave_portal::PortalError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("path already exists: {0} (use --force to overwrite)")]
    PathAlreadyExists(PathBuf),

    #[error(transparent)]
    Portal(#[from] PortalError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}
