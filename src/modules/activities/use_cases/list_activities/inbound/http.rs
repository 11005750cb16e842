use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_activities().await {
        Ok(activities) => Json(activities).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list activities");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
