// Response bodies shared by the inbound HTTP adapters, and the mapping from
// application errors onto status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::adapters::outbound::activity_repository::RepositoryError;
use crate::modules::activities::application::errors::ApplicationError;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}

fn error(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            detail: detail.into(),
        }),
    )
        .into_response()
}

pub fn message(message: String) -> Response {
    Json(MessageBody { message }).into_response()
}

pub fn application_error_response(err: ApplicationError) -> Response {
    match err {
        ApplicationError::NotFound(_) => error(StatusCode::NOT_FOUND, "Activity not found"),
        ApplicationError::Domain(reason) => error(StatusCode::BAD_REQUEST, reason),
        ApplicationError::Repository(RepositoryError::Backend(reason)) => {
            tracing::error!(%reason, "activity repository failure");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
