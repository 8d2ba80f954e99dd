// What the report page shows for a request
use crate::domain::document::ReportDocument;
use serde::Serialize;

const MISSING_ID_MESSAGE: &str = "Informe o ID do relatório na URL para visualizar os dados.";
const EMPTY_MESSAGE: &str = "Nenhum dado encontrado.";
const URL_EXAMPLES: [&str; 2] = ["/relatorio/8", "/?idRelatorio=8"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReportView {
    /// No id in the URL: show guidance, not an error.
    MissingId {
        message: &'static str,
        examples: [&'static str; 2],
    },
    /// The fetch failed; the message is shown as is.
    Failed { message: String },
    /// The upstream answered without data.
    Empty { message: &'static str },
    Ready { report: Box<ReportDocument> },
}

impl ReportView {
    pub fn missing_id() -> Self {
        ReportView::MissingId {
            message: MISSING_ID_MESSAGE,
            examples: URL_EXAMPLES,
        }
    }

    pub fn empty() -> Self {
        ReportView::Empty {
            message: EMPTY_MESSAGE,
        }
    }
}

/// Pick the report id from the path segment or, failing that, the
/// `idRelatorio` query parameter. Blank values count as absent.
pub fn resolve_report_id<'a>(path_id: Option<&'a str>, query_id: Option<&'a str>) -> Option<&'a str> {
    let usable = |id: Option<&'a str>| id.map(str::trim).filter(|s| !s.is_empty());
    usable(path_id).or_else(|| usable(query_id))
}
