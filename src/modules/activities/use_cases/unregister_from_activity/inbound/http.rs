use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shell::errors::{ApiError, MessageResponse};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<UnregisterParams>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::unprocessable(rejection.body_text()))?;

    let message = state
        .unregister_handler
        .handle(UnregisterFromActivity::new(activity_name, params.email))
        .await?;

    Ok(Json(MessageResponse { message }))
}
