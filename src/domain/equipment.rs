// Equipment listing rows
use super::reading::{flagged, ThermographyReading};
use super::sequence::{number_from_one, sequence_label};
use super::status::StatusCategory;
use serde::Serialize;

/// Display-oriented projection of a reading for the equipment tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentRow {
    pub index: usize,
    pub name: String,
    pub sector: String,
    pub tag: String,
    pub status: StatusCategory,
    #[serde(flatten)]
    pub note: RowNote,
}

/// Last column of a row: an observation reference in the critical summary,
/// the raw status in the general listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowNote {
    Observation(String),
    StatusLabel(String),
}

impl EquipmentRow {
    fn from_reading(index: usize, reading: &ThermographyReading, note: RowNote) -> Self {
        Self {
            index,
            name: reading.display_name(),
            sector: reading.sector.clone(),
            tag: reading.tag.clone(),
            status: reading.category(),
            note,
        }
    }
}

/// "VIDE R.O. NN", pointing at the operational report with the same number.
pub fn observation_reference(number: usize) -> String {
    format!("VIDE R.O. {}", sequence_label(number))
}

/// Every reading, numbered by its position in the full list.
pub fn project_all(readings: &[ThermographyReading]) -> Vec<EquipmentRow> {
    number_from_one(readings)
        .map(|(index, reading)| {
            let label = RowNote::StatusLabel(reading.status.to_uppercase());
            EquipmentRow::from_reading(index, reading, label)
        })
        .collect()
}

/// Alert and critical readings only, renumbered within that subset.
pub fn project_critical(readings: &[ThermographyReading]) -> Vec<EquipmentRow> {
    number_from_one(flagged(readings))
        .map(|(index, reading)| {
            let note = RowNote::Observation(observation_reference(index));
            EquipmentRow::from_reading(index, reading, note)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reading::reading;

    fn sample() -> Vec<ThermographyReading> {
        vec![
            reading("Painel A", "TAG-1", "Normal"),
            reading("Painel B", "TAG-2", "Alarme"),
            reading("Painel C", "TAG-3", "Desligado"),
            reading("Painel D", "TAG-4", "Crítico"),
            reading("Painel E", "TAG-5", "normal"),
            reading("Painel F", "TAG-6", "alerta"),
        ]
    }

    #[test]
    fn test_project_all_keeps_every_reading() {
        let rows = project_all(&sample());
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].name, "Painel A - TAG-1");
        assert_eq!(rows[0].sector, "Setor Painel A");
        assert_eq!(rows[3].note, RowNote::StatusLabel("CRÍTICO".to_string()));
        assert_eq!(rows[3].status, StatusCategory::Critical);
        assert_eq!(rows[5].index, 6);
    }

    #[test]
    fn test_project_critical_renumbers_subset() {
        let rows = project_critical(&sample());
        let tags: Vec<_> = rows.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, vec!["TAG-2", "TAG-4", "TAG-6"]);

        let indexes: Vec<_> = rows.iter().map(|r| r.index).collect();
        assert_eq!(indexes, vec![1, 2, 3]);

        let notes: Vec<_> = rows.iter().map(|r| r.note.clone()).collect();
        assert_eq!(
            notes,
            vec![
                RowNote::Observation("VIDE R.O. 01".to_string()),
                RowNote::Observation("VIDE R.O. 02".to_string()),
                RowNote::Observation("VIDE R.O. 03".to_string()),
            ]
        );
    }

    #[test]
    fn test_project_critical_without_flagged_readings() {
        let readings = vec![reading("A", "1", "normal"), reading("B", "2", "off")];
        assert!(project_critical(&readings).is_empty());
        assert!(project_critical(&[]).is_empty());
        assert!(project_all(&[]).is_empty());
    }

    #[test]
    fn test_observation_reference() {
        assert_eq!(observation_reference(3), "VIDE R.O. 03");
        assert_eq!(observation_reference(12), "VIDE R.O. 12");
    }

    #[test]
    fn test_row_serialization() {
        let rows = project_critical(&sample());
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["status"], "alert");
        assert_eq!(json["observation"], "VIDE R.O. 01");
        assert!(json.get("status_label").is_none());

        let rows = project_all(&sample());
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["status_label"], "NORMAL");
    }
}
