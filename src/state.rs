use crate::fallback::ServicePool;
use crate::like::ButtonState;
use crate::models::LikeData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<LikeData>>,
    pub button: Arc<Mutex<ButtonState>>,
    pub pool: Arc<ServicePool>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: LikeData, pool: ServicePool) -> Self {
        Self {
            data_path,
            button: Arc::new(Mutex::new(ButtonState::from_liked(data.liked))),
            data: Arc::new(Mutex::new(data)),
            pool: Arc::new(pool),
        }
    }
}
