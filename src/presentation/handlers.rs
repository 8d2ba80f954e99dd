// HTTP request handlers
use crate::application::report_view::ReportView;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ReportQuery {
    #[serde(rename = "idRelatorio")]
    pub report_id: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Report addressed as `/?idRelatorio=ID`
pub async fn report_from_query(
    Query(query): Query<ReportQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    render_report(&state, None, query.report_id.as_deref(), &headers).await
}

/// Report addressed as `/relatorio/ID`; the path wins over any query id.
pub async fn report_from_path(
    Path(id): Path<String>,
    Query(query): Query<ReportQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    render_report(&state, Some(id.as_str()), query.report_id.as_deref(), &headers).await
}

async fn render_report(
    state: &AppState,
    path_id: Option<&str>,
    query_id: Option<&str>,
    headers: &HeaderMap,
) -> Response {
    let view = state.report_service.view(path_id, query_id).await;

    match json_response(view_status(&view), &view, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

fn view_status(view: &ReportView) -> StatusCode {
    match view {
        ReportView::Ready { .. } | ReportView::MissingId { .. } => StatusCode::OK,
        ReportView::Empty { .. } => StatusCode::NOT_FOUND,
        ReportView::Failed { .. } => StatusCode::BAD_GATEWAY,
    }
}
