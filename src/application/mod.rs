// Application layer - Use cases over the report repository
pub mod error;
pub mod report_repository;
pub mod report_service;
pub mod report_view;
