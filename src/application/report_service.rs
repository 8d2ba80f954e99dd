// Report service - Use case for rendering one report
use crate::application::error::ReportError;
use crate::application::report_repository::ReportRepository;
use crate::application::report_view::{resolve_report_id, ReportView};
use crate::domain::document::{DocumentSettings, ReportDocument};
use std::sync::Arc;

#[derive(Clone)]
pub struct ReportService {
    repository: Arc<dyn ReportRepository>,
    settings: DocumentSettings,
}

impl ReportService {
    pub fn new(repository: Arc<dyn ReportRepository>, settings: DocumentSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Fetch the payload and derive a fresh document from it.
    pub async fn load(&self, report_id: &str) -> Result<Option<ReportDocument>, ReportError> {
        let payload = self.repository.fetch_report(report_id).await?;
        Ok(payload.map(|p| ReportDocument::assemble(&p, &self.settings)))
    }

    /// Resolve the id from the URL parts and produce the page state.
    pub async fn view(&self, path_id: Option<&str>, query_id: Option<&str>) -> ReportView {
        let Some(report_id) = resolve_report_id(path_id, query_id) else {
            tracing::debug!("Report requested without an id");
            return ReportView::missing_id();
        };

        match self.load(report_id).await {
            Ok(Some(document)) => ReportView::Ready {
                report: Box::new(document),
            },
            Ok(None) => {
                tracing::info!(report_id, "Report API returned no data");
                ReportView::empty()
            }
            Err(e) => {
                tracing::warn!(report_id, error = %e, "Failed to load report");
                ReportView::Failed {
                    message: e.to_string(),
                }
            }
        }
    }
}
