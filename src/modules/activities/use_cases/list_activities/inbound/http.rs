use axum::{Json, extract::State};

use crate::modules::activities::core::activity::ActivityCatalog;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Result<Json<ActivityCatalog>, ApiError> {
    let catalog = state.queries.list_activities().await?;
    Ok(Json(catalog))
}
