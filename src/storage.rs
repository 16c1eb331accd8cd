use crate::errors::AppError;
use crate::models::LikeData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/like.json"))
}

// A missing or unreadable flag file means "not liked yet"; the widget must
// come up either way.
pub async fn load_data(path: &Path) -> LikeData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse like data file: {err}");
                LikeData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => LikeData::default(),
        Err(err) => {
            error!("failed to read like data file: {err}");
            LikeData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &LikeData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
