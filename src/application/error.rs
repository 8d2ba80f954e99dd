// Errors surfaced by the report use cases
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to reach the report API: {0}")]
    Transport(String),

    #[error("Report API responded with status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Failed to parse report API response: {0}")]
    Decode(String),
}
