// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::report_service::ReportService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_report_repository::HttpReportRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpReportRepository::new(
        app_config.api.base_url.clone(),
        app_config.api.token.clone(),
        app_config.api.timeout(),
    )?);

    // Create service (application layer)
    let report_service = ReportService::new(repository, app_config.report);

    // Create application state
    let state = Arc::new(AppState { report_service });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = app_config.server.addr.parse()?;
    tracing::info!(%addr, api = %app_config.api.base_url, "Starting thermography-report service");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
