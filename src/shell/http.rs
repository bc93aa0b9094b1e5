use axum::{
    Extension, Router,
    response::Html,
    routing::{delete, get, post},
};
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http as unregister_http;
use crate::shell::graphql::{self, GRAPHQL_PATH, build_schema};
use crate::shell::state::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/", get(index))
        .route("/activities", get(list_http::handle))
        .route(
            "/activities/{activity_name}/signup",
            post(sign_up_http::handle),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_http::handle),
        )
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::handle))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
