use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/entries", get(handlers::list_entries))
        .route("/api/feedback", post(handlers::submit))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/action-plan", post(handlers::action_plan))
        .route("/api/clear", post(handlers::clear))
        .with_state(state)
}
