// Date normalization for report headers and letters
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

/// A date already in `DD/MM/YYYY`, passed through untouched.
static DAY_FIRST_EXACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("valid regex"));

/// `DD/MM/YYYY` or `DD-MM-YYYY` anywhere in the text.
static DAY_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{2})[/\-]([0-9]{2})[/\-]([0-9]{4})").expect("valid regex")
});

/// `YYYY/MM/DD` or `YYYY-MM-DD` anywhere in the text.
static YEAR_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4})[/\-]([0-9]{2})[/\-]([0-9]{2})").expect("valid regex")
});

/// Written-out and US month-first dates. `%b` also reads full month names.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%b %d, %Y", "%b %d %Y", "%m/%d/%Y"];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const PT_BR_MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

const EN_US_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Target locale for rendered dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ReportLocale {
    #[default]
    #[serde(rename = "pt-BR", alias = "pt_BR")]
    PtBr,
    #[serde(rename = "en-US", alias = "en_US")]
    EnUs,
}

impl ReportLocale {
    fn render_date(self, date: NaiveDate) -> String {
        match self {
            ReportLocale::PtBr => date.format("%d/%m/%Y").to_string(),
            ReportLocale::EnUs => date.format("%m/%d/%Y").to_string(),
        }
    }

    fn month_name(self, date: NaiveDate) -> &'static str {
        let index = date.month0() as usize;
        match self {
            ReportLocale::PtBr => PT_BR_MONTHS[index],
            ReportLocale::EnUs => EN_US_MONTHS[index],
        }
    }
}

/// Turns the upstream's heterogeneous date strings into display text.
///
/// Never fails: anything it cannot read becomes an empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateNormalizer {
    locale: ReportLocale,
}

impl DateNormalizer {
    pub fn new(locale: ReportLocale) -> Self {
        Self { locale }
    }

    /// `DD/MM/YYYY` input is kept verbatim; anything else readable is
    /// rendered in the locale's short date form.
    pub fn format_date(&self, raw: Option<&str>) -> String {
        let Some(cleaned) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return String::new();
        };

        if DAY_FIRST_EXACT_RE.is_match(cleaned) {
            return cleaned.to_string();
        }

        parse_date(cleaned)
            .map(|date| self.locale.render_date(date))
            .unwrap_or_default()
    }

    /// Month name and year, e.g. "março 2024".
    pub fn format_month_year(&self, raw: Option<&str>) -> String {
        raw.map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(parse_date)
            .map(|date| format!("{} {}", self.locale.month_name(date), date.year()))
            .unwrap_or_default()
    }
}

/// Exact `DD/MM/YYYY` first so it never reads as month-first, then the
/// generic parse, then day-first and year-first patterns embedded in the text.
fn parse_date(cleaned: &str) -> Option<NaiveDate> {
    if DAY_FIRST_EXACT_RE.is_match(cleaned) {
        return parse_captured(&DAY_FIRST_RE, cleaned, (3, 2, 1));
    }
    parse_general(cleaned)
        .or_else(|| parse_captured(&DAY_FIRST_RE, cleaned, (3, 2, 1)))
        .or_else(|| parse_captured(&YEAR_FIRST_RE, cleaned, (1, 2, 3)))
}

/// The calendar date is taken as written, without shifting time zones.
fn parse_general(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(date);
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// `groups` gives the capture index of (year, month, day).
fn parse_captured(re: &Regex, s: &str, groups: (usize, usize, usize)) -> Option<NaiveDate> {
    let caps = re.captures(s)?;
    let year: i32 = caps.get(groups.0)?.as_str().parse().ok()?;
    let month: u32 = caps.get(groups.1)?.as_str().parse().ok()?;
    let day: u32 = caps.get(groups.2)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
