use crate::errors::AppError;
use crate::models::FeedbackLog;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("PULSE_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/entries.json"))
}

/// Reads the persisted record once at startup. Missing or malformed data
/// degrades to an empty log; the caller never sees a failure.
pub async fn load_entries(path: &Path) -> FeedbackLog {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(log) => log,
            Err(err) => {
                error!("failed to parse feedback record: {err}");
                FeedbackLog::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => FeedbackLog::default(),
        Err(err) => {
            error!("failed to read feedback record: {err}");
            FeedbackLog::default()
        }
    }
}

/// Write-through: every mutation rewrites the full record before the
/// operation is reported complete.
pub async fn persist_entries(path: &Path, log: &FeedbackLog) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(log).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

/// Clearing removes the record entirely rather than rewriting it empty.
pub async fn remove_entries(path: &Path) -> Result<(), AppError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(AppError::internal(err)),
    }
}
