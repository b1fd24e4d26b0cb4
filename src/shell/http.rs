use axum::{
    Extension, Router,
    response::Redirect,
    routing::{delete, get, post},
};
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http as unregister_http;
use crate::shell::graphql::{self, graphiql};
use crate::shell::state::AppState;

/// REST and GraphQL routes, without the static frontend.
pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route("/activities", get(list_http::handle))
        .route("/activities/{activity}/signup", post(sign_up_http::handle))
        .route(
            "/activities/{activity}/participants",
            delete(unregister_http::handle),
        )
        .route("/gql", get(graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .with_state(state)
}

/// The full application: API routes, the frontend under `/static` and request tracing.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    router(state)
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
