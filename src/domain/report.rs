// Report payload domain model
use super::reading::ThermographyReading;
use super::value::{non_blank, optional_text, ScalarValue};
use serde::Deserialize;

const DEFAULT_INSPECTION_TYPE: &str = "TERMOGRÁFICA";

/// Everything the report API returns for one report id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportPayload {
    #[serde(rename = "relatorio", default)]
    pub report: Report,
    #[serde(rename = "cliente", default)]
    pub client: Option<Client>,
    #[serde(rename = "usuario", default)]
    pub user: Option<Person>,
    #[serde(rename = "aprovador", default)]
    pub approver: Option<Person>,
    #[serde(rename = "termografias", default)]
    pub readings: Vec<ThermographyReading>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub id: Option<ScalarValue>,
    #[serde(rename = "num_revisao", default)]
    pub revision: Option<ScalarValue>,
    #[serde(rename = "tipo", default, deserialize_with = "optional_text")]
    pub kind: Option<String>,
    #[serde(rename = "dataExe", default, deserialize_with = "optional_text")]
    pub date_exe: Option<String>,
    #[serde(rename = "data_execucao", default, deserialize_with = "optional_text")]
    pub execution_date: Option<String>,
    #[serde(rename = "data_Execucao", default, deserialize_with = "optional_text")]
    pub execution_date_alt: Option<String>,
    #[serde(rename = "cliente", default)]
    pub client: Option<Client>,
    #[serde(rename = "usuario", default)]
    pub user: Option<Person>,
    #[serde(rename = "aprovador", default)]
    pub approver: Option<Person>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Client {
    #[serde(rename = "nome", default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(rename = "cidade", default, deserialize_with = "optional_text")]
    pub city: Option<String>,
    #[serde(rename = "estado", default, deserialize_with = "optional_text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub logo: Option<String>,
    #[serde(rename = "pessoa_contato", default, deserialize_with = "optional_text")]
    pub contact_person: Option<String>,
    #[serde(rename = "departamento_contato", default, deserialize_with = "optional_text")]
    pub contact_department: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    #[serde(rename = "telefone", default, deserialize_with = "optional_text")]
    pub phone: Option<String>,
}

/// A user or approver signing the report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Person {
    #[serde(rename = "nome", default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(rename = "departamento", default, deserialize_with = "optional_text")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    #[serde(rename = "telefone", default, deserialize_with = "optional_text")]
    pub phone: Option<String>,
}

impl ReportPayload {
    // Top-level parties win over the copies nested in the report.

    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref().or(self.report.client.as_ref())
    }

    pub fn user(&self) -> Option<&Person> {
        self.user.as_ref().or(self.report.user.as_ref())
    }

    pub fn approver(&self) -> Option<&Person> {
        self.approver.as_ref().or(self.report.approver.as_ref())
    }
}

impl Report {
    /// Id and revision joined by a space, skipping blank parts.
    pub fn number(&self) -> String {
        [self.id.as_ref(), self.revision.as_ref()]
            .into_iter()
            .flatten()
            .map(|v| v.to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn inspection_type_label(&self) -> String {
        non_blank(self.kind.as_deref())
            .map(|k| k.trim().to_uppercase())
            .unwrap_or_else(|| DEFAULT_INSPECTION_TYPE.to_string())
    }

    /// Raw execution date quoted in the cover letter:
    /// `data_execucao`, then `data_Execucao`, then `dataExe`.
    pub fn execution_date_text(&self) -> String {
        [&self.execution_date, &self.execution_date_alt, &self.date_exe]
            .into_iter()
            .find_map(|d| non_blank(d.as_deref()))
            .unwrap_or_default()
            .to_string()
    }

    /// Date fed to the normalizer: `dataExe`, then `data_execucao`,
    /// then `data_Execucao`.
    pub fn reference_date(&self) -> Option<&str> {
        [&self.date_exe, &self.execution_date, &self.execution_date_alt]
            .into_iter()
            .find_map(|d| non_blank(d.as_deref()))
    }
}

impl Client {
    /// "name - city/state" line of the cover page.
    pub fn unit_line(&self) -> String {
        format!(
            "{} - {}/{}",
            self.name.as_deref().unwrap_or_default(),
            self.city.as_deref().unwrap_or_default(),
            self.state.as_deref().unwrap_or_default()
        )
    }
}
