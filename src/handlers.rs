use crate::errors::AppError;
use crate::like;
use crate::models::{LikeAckResponse, LikeStatusResponse};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::Local;
use tracing::{error, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let button = *state.button.lock().await;
    Html(render_index(button))
}

pub async fn get_like(State(state): State<AppState>) -> Json<LikeStatusResponse> {
    let liked = state.data.lock().await.liked;

    match state.pool.get_count().await {
        Ok(outcome) => Json(LikeStatusResponse {
            liked,
            count: Some(outcome.value.max(0) as u64),
            message: like::count_message(outcome.value),
            state: "success",
            service: Some(outcome.service),
        }),
        Err(err) => {
            error!("unable to load like count: {err}");
            Json(LikeStatusResponse {
                liked,
                count: None,
                message: like::UNAVAILABLE_MESSAGE.to_string(),
                state: "error",
                service: None,
            })
        }
    }
}

pub async fn post_like(State(state): State<AppState>) -> Result<Json<LikeAckResponse>, AppError> {
    // Disable the button before any request goes out; a second attempt while
    // pending or after the like landed never reaches the network.
    state
        .button
        .lock()
        .await
        .begin()
        .map_err(|rejected| AppError::conflict(rejected.to_string()))?;

    match state.pool.increment().await {
        Ok(outcome) => {
            state.button.lock().await.complete();

            let data = {
                let mut data = state.data.lock().await;
                data.liked = true;
                if data.liked_at.is_none() {
                    data.liked_at = Some(Local::now());
                }
                data.clone()
            };
            // The like stands even if the flag cannot be written.
            if let Err(err) = persist_data(&state.data_path, &data).await {
                warn!("unable to persist like preference: {}", err.message);
            }

            Ok(Json(LikeAckResponse {
                liked: true,
                count: outcome.value.max(0) as u64,
                message: like::count_message(outcome.value),
                state: "success",
                service: outcome.service,
                celebrate: true,
            }))
        }
        Err(err) => {
            error!("unable to record like: {err}");
            state.button.lock().await.fail();
            Err(AppError::bad_gateway(like::FAILED_MESSAGE))
        }
    }
}
