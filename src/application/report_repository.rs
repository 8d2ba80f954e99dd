// Repository trait for report data access
use crate::application::error::ReportError;
use crate::domain::report::ReportPayload;
use async_trait::async_trait;

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Fetch the raw payload for one report.
    /// `Ok(None)` means the upstream has no data for this id.
    async fn fetch_report(&self, report_id: &str) -> Result<Option<ReportPayload>, ReportError>;
}
