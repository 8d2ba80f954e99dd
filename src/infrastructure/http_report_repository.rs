// Report API repository implementation
use crate::application::error::ReportError;
use crate::application::report_repository::ReportRepository;
use crate::domain::report::ReportPayload;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpReportRepository {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpReportRepository {
    pub fn new(base_url: String, token: Option<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    fn build_report_url(&self, report_id: &str) -> String {
        format!("{}/relatorios/{}", self.base_url, urlencoding::encode(report_id))
    }
}

#[async_trait]
impl ReportRepository for HttpReportRepository {
    async fn fetch_report(&self, report_id: &str) -> Result<Option<ReportPayload>, ReportError> {
        let url = self.build_report_url(report_id);
        tracing::debug!(%url, "Fetching report");

        let mut request = self.client.get(&url).header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ReportError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(error = %e, %status, "Failed to read report API error body");
                    String::new()
                }
            };
            return Err(ReportError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        // A `null` body is a successful answer without data.
        response
            .json::<Option<ReportPayload>>()
            .await
            .map_err(|e| ReportError::Decode(e.to_string()))
    }
}
