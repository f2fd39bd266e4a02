use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::entries::use_cases::list_entries::inbound::http as entries_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/entries", get(entries_http::list))
        .route("/entries/{id}", get(entries_http::get))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
