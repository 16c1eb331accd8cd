use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LikeData {
    pub liked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liked_at: Option<DateTime<Local>>,
}

#[derive(Debug, Serialize)]
pub struct LikeStatusResponse {
    pub liked: bool,
    pub count: Option<u64>,
    pub message: String,
    pub state: &'static str,
    pub service: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct LikeAckResponse {
    pub liked: bool,
    pub count: u64,
    pub message: String,
    pub state: &'static str,
    pub service: &'static str,
    pub celebrate: bool,
}
