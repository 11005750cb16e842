use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use serde::Deserialize;

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shared::http_responses::{application_error_response, message};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignUpParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignUpParams>,
) -> Response {
    let command = SignUpForActivity {
        activity_name: activity_name.clone(),
        email: params.email.clone(),
    };

    match state.sign_up_handler.handle(command).await {
        Ok(()) => message(format!("Signed up {} for {}", params.email, activity_name)),
        Err(err) => application_error_response(err),
    }
}
