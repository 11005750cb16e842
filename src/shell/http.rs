use axum::{
    Extension, Router,
    response::Redirect,
    routing::{delete, get, post},
};
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http as unregister_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub const INDEX_PATH: &str = "/static/index.html";

async fn redirect_to_index() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/", get(redirect_to_index))
        .route("/activities", get(list_http::handle))
        .route(
            "/activities/{activity_name}/signup",
            post(sign_up_http::handle),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_http::handle),
        )
        .route("/gql", get(graphiql).post(graphql))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
