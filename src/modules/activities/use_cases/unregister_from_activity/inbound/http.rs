use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use serde::Deserialize;

use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shared::http_responses::{application_error_response, message};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<UnregisterParams>,
) -> Response {
    let command = UnregisterFromActivity {
        activity_name: activity_name.clone(),
        email: params.email.clone(),
    };

    match state.unregister_handler.handle(command).await {
        Ok(()) => message(format!("Unregistered {} from {}", params.email, activity_name)),
        Err(err) => application_error_response(err),
    }
}
