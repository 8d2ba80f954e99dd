// Report document - everything the printed report needs, derived from one payload
use super::date::{DateNormalizer, ReportLocale};
use super::equipment::{project_all, project_critical, EquipmentRow};
use super::operational::{select, OperationalCase};
use super::pagination::{paginate, Page, RowsPerPage};
use super::report::{Client, Person, ReportPayload};
use super::statistics::{aggregate, StatisticsSummary};
use super::value::non_blank;
use serde::{Deserialize, Serialize};

const DEFAULT_ADDRESSEE: &str = "Departamento de Manutenção";
const DEFAULT_SIGNER_NAME: &str = "Nome do Responsável";
const DEFAULT_SIGNER_DEPARTMENT: &str = "DEPTO. DE PREDITIVA";
const DEFAULT_SIGNER_EMAIL: &str = "email@jundpred.com.br";
const DEFAULT_SIGNER_PHONE: &str = "Tel.: (11) 2817-0616";

/// Shaping knobs that come from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    pub locale: ReportLocale,
    pub rows_per_page: RowsPerPage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    pub cover: Cover,
    pub letter: Letter,
    pub critical_pages: Vec<Page<EquipmentRow>>,
    pub equipment_pages: Vec<Page<EquipmentRow>>,
    pub statistics: StatisticsSummary,
    pub operational_cases: Vec<OperationalCase>,
    pub signatures: Signatures,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cover {
    pub inspection_type: String,
    pub report_number: String,
    pub client: Option<ClientCard>,
    pub reference_month: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientCard {
    pub unit: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Letter {
    pub date: String,
    pub addressee: String,
    pub addressee_department: Option<String>,
    pub client: Option<ClientContact>,
    pub execution_date: String,
    pub report_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signatures {
    pub responsible: Signatory,
    pub approver: Option<Signatory>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signatory {
    pub name: String,
    pub department: String,
    pub email: String,
    pub phone: String,
}

impl ReportDocument {
    /// Derive the whole document. The payload is only read, so calling this
    /// again on the same payload gives the same document.
    pub fn assemble(payload: &ReportPayload, settings: &DocumentSettings) -> Self {
        let dates = DateNormalizer::new(settings.locale);
        let report = &payload.report;
        let readings = &payload.readings;
        let report_number = report.number();
        let formatted_date = dates.format_date(report.reference_date());
        let client = payload.client();

        let critical_rows = project_critical(readings);
        let all_rows = project_all(readings);

        tracing::debug!(
            report = %report_number,
            readings = readings.len(),
            flagged = critical_rows.len(),
            "Assembling report document"
        );

        Self {
            cover: Cover {
                inspection_type: report.inspection_type_label(),
                report_number: report_number.clone(),
                client: client.map(|c| ClientCard {
                    unit: c.unit_line(),
                    logo: non_blank(c.logo.as_deref()).map(str::to_string),
                }),
                reference_month: dates.format_month_year(report.reference_date()),
            },
            letter: Letter {
                date: formatted_date.clone(),
                addressee: client
                    .and_then(|c| non_blank(c.contact_person.as_deref()))
                    .unwrap_or(DEFAULT_ADDRESSEE)
                    .to_string(),
                addressee_department: client
                    .and_then(|c| non_blank(c.contact_department.as_deref()))
                    .map(str::to_string),
                client: client.map(client_contact),
                execution_date: report.execution_date_text(),
                report_number,
            },
            critical_pages: paginate(&critical_rows, settings.rows_per_page.with_observation),
            equipment_pages: paginate(&all_rows, settings.rows_per_page.default),
            statistics: aggregate(readings),
            operational_cases: select(readings, &formatted_date),
            signatures: Signatures {
                responsible: responsible_signatory(payload.user()),
                approver: payload.approver().map(approver_signatory),
            },
        }
    }
}

fn client_contact(client: &Client) -> ClientContact {
    ClientContact {
        name: client.name.clone().unwrap_or_default(),
        email: client.email.clone().unwrap_or_default(),
        phone: client.phone.clone().unwrap_or_default(),
    }
}

fn responsible_signatory(user: Option<&Person>) -> Signatory {
    Signatory {
        name: or_fallback(user.and_then(|u| u.name.as_deref()), DEFAULT_SIGNER_NAME),
        department: or_fallback(
            user.and_then(|u| u.department.as_deref()),
            DEFAULT_SIGNER_DEPARTMENT,
        ),
        email: or_fallback(user.and_then(|u| u.email.as_deref()), DEFAULT_SIGNER_EMAIL),
        phone: or_fallback(user.and_then(|u| u.phone.as_deref()), DEFAULT_SIGNER_PHONE),
    }
}

fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    non_blank(value).unwrap_or(fallback).to_string()
}

fn approver_signatory(approver: &Person) -> Signatory {
    Signatory {
        name: approver.name.clone().unwrap_or_default(),
        department: approver.department.clone().unwrap_or_default(),
        email: approver.email.clone().unwrap_or_default(),
        phone: approver.phone.clone().unwrap_or_default(),
    }
}
