// Thermography reading domain model
use super::status::{classify, StatusCategory};
use super::value::{optional_text, text_or_empty, ScalarValue};
use serde::Deserialize;

/// One inspected point as sent by the report API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThermographyReading {
    #[serde(default)]
    pub id: Option<ScalarValue>,
    #[serde(rename = "localizacao", default, deserialize_with = "text_or_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub tag: String,
    #[serde(rename = "setor", default, deserialize_with = "text_or_empty")]
    pub sector: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub status: String,
    #[serde(rename = "componente", default, deserialize_with = "optional_text")]
    pub component: Option<String>,
    #[serde(rename = "temp_aquecimento", default)]
    pub measured_temperature: Option<ScalarValue>,
    #[serde(rename = "temp_admissivel", default)]
    pub admissible_temperature: Option<ScalarValue>,
    #[serde(rename = "descricao_problema", default, deserialize_with = "optional_text")]
    pub problem_description: Option<String>,
    #[serde(rename = "observacao", default, deserialize_with = "optional_text")]
    pub observation: Option<String>,
    #[serde(rename = "recomendacao", default, deserialize_with = "optional_text")]
    pub recommendation: Option<String>,
    #[serde(rename = "foto_painel", default, deserialize_with = "optional_text")]
    pub thermal_image: Option<String>,
    #[serde(rename = "foto_camera", default, deserialize_with = "optional_text")]
    pub visible_image: Option<String>,
}

impl ThermographyReading {
    pub fn category(&self) -> StatusCategory {
        classify(&self.status)
    }

    /// "location - tag", the name shown in every listing.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.location, self.tag)
    }
}

/// Readings classified alert or critical, in their original order.
pub fn flagged(readings: &[ThermographyReading]) -> impl Iterator<Item = &ThermographyReading> {
    readings.iter().filter(|r| r.category().requires_report())
}

#[cfg(test)]
pub(crate) fn reading(location: &str, tag: &str, status: &str) -> ThermographyReading {
    ThermographyReading {
        location: location.to_string(),
        tag: tag.to_string(),
        sector: format!("Setor {}", location),
        status: status.to_string(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_reading() {
        let json = r#"{
            "id": 41,
            "localizacao": "Painel QGBT",
            "tag": "DJ-01",
            "setor": "Utilidades",
            "status": "Crítico",
            "componente": "Disjuntor",
            "temp_aquecimento": 87.4,
            "temp_admissivel": "70",
            "descricao_problema": null,
            "foto_painel": "https://cdn.example/ir.jpg"
        }"#;
        let r: ThermographyReading = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, Some(ScalarValue::Integer(41)));
        assert_eq!(r.location, "Painel QGBT");
        assert_eq!(r.display_name(), "Painel QGBT - DJ-01");
        assert_eq!(r.category(), StatusCategory::Critical);
        assert_eq!(r.measured_temperature, Some(ScalarValue::Float(87.4)));
        assert_eq!(r.admissible_temperature, Some(ScalarValue::Text("70".to_string())));
        assert_eq!(r.problem_description, None);
        assert_eq!(r.visible_image, None);
    }

    #[test]
    fn test_numeric_text_fields() {
        let json = r#"{"componente": 220, "recomendacao": 3.5, "observacao": "  ok  "}"#;
        let r: ThermographyReading = serde_json::from_str(json).unwrap();
        assert_eq!(r.component.as_deref(), Some("220"));
        assert_eq!(r.recommendation.as_deref(), Some("3.5"));
        assert_eq!(r.observation.as_deref(), Some("  ok  "));
    }

    #[test]
    fn test_deserialize_sparse_reading() {
        let r: ThermographyReading = serde_json::from_str(r#"{"status": null}"#).unwrap();
        assert_eq!(r.status, "");
        assert_eq!(r.display_name(), " - ");
    }

    #[test]
    fn test_flagged_preserves_order() {
        let readings = vec![
            reading("A", "1", "alarme"),
            reading("B", "2", "normal"),
            reading("C", "3", "crítico"),
            reading("D", "4", "desligado"),
        ];
        let tags: Vec<_> = flagged(&readings).map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, vec!["1", "3"]);
    }
}
