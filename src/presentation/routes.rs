// Router wiring
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, report_from_path, report_from_query};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(report_from_query))
        .route("/relatorio", get(report_from_query))
        .route("/relatorio/:id", get(report_from_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
