// Operational incident reports for flagged equipment
use super::reading::{flagged, ThermographyReading};
use super::sequence::{number_from_one, sequence_label};
use super::status::StatusCategory;
use super::value::{non_blank, present, ScalarValue};
use serde::Serialize;

const NOT_AVAILABLE: &str = "N/A";
const EMISSIVITY: &str = "0.95";
const DISTANCE: &str = "≈1 m";
const DEFAULT_PROBLEM: &str = "Verificar equipamento";
const DEFAULT_RECOMMENDATION: &str = "Realizar manutenção preventiva";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Immediate,
    Scheduled,
}

impl Urgency {
    /// Critical readings need immediate intervention, alerts can wait.
    pub fn for_category(category: StatusCategory) -> Self {
        match category {
            StatusCategory::Critical => Urgency::Immediate,
            _ => Urgency::Scheduled,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Urgency::Immediate => "INTERVENÇÃO IMEDIATA",
            Urgency::Scheduled => "INTERVENÇÃO PROGRAMADA",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureReading {
    pub label: &'static str,
    pub value: String,
}

/// Narrative write-up of one alert/critical reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationalCase {
    pub id: String,
    /// Upstream reading id, so a case can be traced back to its row.
    pub reading_id: Option<String>,
    pub area: String,
    pub equipment: String,
    pub components: String,
    pub date: String,
    pub status: StatusCategory,
    pub urgency: Urgency,
    pub classification: &'static str,
    pub emissivity: &'static str,
    pub max_temperature: String,
    pub max_admissible_temperature: String,
    pub distance: &'static str,
    pub thermal_image: String,
    pub visible_image: String,
    pub readings: Vec<TemperatureReading>,
    pub problem: String,
    pub recommendations: Vec<String>,
}

impl OperationalCase {
    fn from_reading(number: usize, reading: &ThermographyReading, date: &str) -> Self {
        let status = reading.category();
        let urgency = Urgency::for_category(status);
        let measured = present(reading.measured_temperature.as_ref());

        // Only a measured temperature makes the readings panel worth showing.
        let readings = match measured {
            Some(value) => vec![
                TemperatureReading {
                    label: "Temp. Medida",
                    value: celsius(Some(value)),
                },
                TemperatureReading {
                    label: "Temp. Admissível",
                    value: celsius(reading.admissible_temperature.as_ref()),
                },
            ],
            None => Vec::new(),
        };

        let problem = non_blank(reading.problem_description.as_deref())
            .or_else(|| non_blank(reading.observation.as_deref()))
            .unwrap_or(DEFAULT_PROBLEM)
            .to_string();

        let recommendation = non_blank(reading.recommendation.as_deref())
            .unwrap_or(DEFAULT_RECOMMENDATION)
            .to_string();

        Self {
            id: sequence_label(number),
            reading_id: reading.id.as_ref().map(ToString::to_string),
            area: reading.sector.clone(),
            equipment: reading.display_name(),
            components: non_blank(reading.component.as_deref())
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            date: date.to_string(),
            status,
            urgency,
            classification: urgency.label(),
            emissivity: EMISSIVITY,
            max_temperature: celsius(measured),
            max_admissible_temperature: celsius(reading.admissible_temperature.as_ref()),
            distance: DISTANCE,
            thermal_image: reading.thermal_image.clone().unwrap_or_default(),
            visible_image: reading.visible_image.clone().unwrap_or_default(),
            readings,
            problem,
            recommendations: vec![recommendation],
        }
    }
}

fn celsius(value: Option<&ScalarValue>) -> String {
    present(value)
        .map(|v| format!("{} °C", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// One case per alert/critical reading, numbered "01", "02", ... in
/// reading order. `inspection_date` is the already-normalized report date.
pub fn select(readings: &[ThermographyReading], inspection_date: &str) -> Vec<OperationalCase> {
    number_from_one(flagged(readings))
        .map(|(number, reading)| OperationalCase::from_reading(number, reading, inspection_date))
        .collect()
}
