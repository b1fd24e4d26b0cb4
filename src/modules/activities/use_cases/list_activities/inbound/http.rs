use axum::{Json, extract::State, response::IntoResponse};
use tracing::error;

use crate::modules::activities::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_activities().await {
        Ok(activities) => Json(activities).into_response(),
        Err(e) => {
            error!(error = %e, "listing activities failed");
            ApplicationError::Unexpected(e.to_string()).into_response()
        }
    }
}
