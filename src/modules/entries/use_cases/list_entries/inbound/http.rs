use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::entries::use_cases::list_entries::handler::ApplicationError;
use crate::shell::state::AppState;

fn error_response(error: ApplicationError) -> axum::response::Response {
    match error {
        ApplicationError::Mapping(e) => {
            tracing::warn!(error = %e, "malformed raw entry from source");
            StatusCode::BAD_GATEWAY.into_response()
        }
        ApplicationError::Source(e) => {
            tracing::error!(error = %e, "raw entry source unavailable");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_entries.list().await {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.list_entries.get(id).await {
        Ok(Some(entry)) => Json(entry).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => error_response(e),
    }
}
