// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_report_repository;
pub mod http_response;
