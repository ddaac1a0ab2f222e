use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::{models::ScoreRecord, routes::error::ApiError, AppState};

pub async fn get_scores(State(state): State<Arc<AppState>>) -> Json<Vec<ScoreRecord>> {
    Json(state.scores.load().await)
}

pub async fn clear_scores(State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
    state.scores.clear().await?;
    tracing::info!("High scores cleared");
    Ok(StatusCode::NO_CONTENT)
}
