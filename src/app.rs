use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/refresh", post(handlers::refresh))
        .route("/api/analytics", get(handlers::get_analytics))
        .route("/api/admin/timeline", get(handlers::get_admin_timeline))
        .with_state(state)
}
