// Status classification for thermography readings
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Normal,
    Alert,
    Critical,
    Maintenance,
    Off,
}

/// Category assigned to any status word missing from the vocabulary.
pub const DEFAULT_CATEGORY: StatusCategory = StatusCategory::Normal;

/// Known upstream status words, lowercased and without diacritics.
const STATUS_VOCABULARY: &[(&str, StatusCategory)] = &[
    ("normal", StatusCategory::Normal),
    ("normais", StatusCategory::Normal),
    ("ok", StatusCategory::Normal),
    ("bom", StatusCategory::Normal),
    ("alerta", StatusCategory::Alert),
    ("alarme", StatusCategory::Alert),
    ("alert", StatusCategory::Alert),
    ("alarm", StatusCategory::Alert),
    ("atencao", StatusCategory::Alert),
    ("warning", StatusCategory::Alert),
    ("critico", StatusCategory::Critical),
    ("critica", StatusCategory::Critical),
    ("critical", StatusCategory::Critical),
    ("manutencao", StatusCategory::Maintenance),
    ("em manutencao", StatusCategory::Maintenance),
    ("maintenance", StatusCategory::Maintenance),
    ("desligado", StatusCategory::Off),
    ("desligados", StatusCategory::Off),
    ("off", StatusCategory::Off),
    ("inativo", StatusCategory::Off),
];

impl StatusCategory {
    /// Order of the summary chart bars.
    pub const PRESENTATION_ORDER: [StatusCategory; 5] = [
        StatusCategory::Normal,
        StatusCategory::Maintenance,
        StatusCategory::Off,
        StatusCategory::Alert,
        StatusCategory::Critical,
    ];

    pub fn chart_label(self) -> &'static str {
        match self {
            StatusCategory::Normal => "NORMAIS",
            StatusCategory::Maintenance => "EM MANUTENÇÃO",
            StatusCategory::Off => "DESLIGADOS",
            StatusCategory::Alert => "ALARME",
            StatusCategory::Critical => "CRÍTICO",
        }
    }

    pub fn color_tag(self) -> &'static str {
        match self {
            StatusCategory::Normal => "bg-success",
            StatusCategory::Maintenance => "bg-muted-foreground",
            StatusCategory::Off => "bg-border",
            StatusCategory::Alert => "bg-warning",
            StatusCategory::Critical => "bg-destructive",
        }
    }

    /// Alert and critical readings get an observation reference and an
    /// operational report.
    pub fn requires_report(self) -> bool {
        matches!(self, StatusCategory::Alert | StatusCategory::Critical)
    }
}

/// Map a raw upstream status string to its category.
///
/// Matching ignores case, diacritics and surrounding/repeated whitespace.
/// Unknown words fall back to [`DEFAULT_CATEGORY`].
pub fn classify(raw_status: &str) -> StatusCategory {
    let key = normalize_status(raw_status);
    STATUS_VOCABULARY
        .iter()
        .find(|(word, _)| *word == key)
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

fn normalize_status(raw: &str) -> String {
    let folded: String = raw
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
        .map(strip_diacritic)
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Combining diacritical marks left over from decomposed (NFD) text.
fn is_combining_mark(c: char) -> bool {
    ('\u{300}'..='\u{36f}').contains(&c)
}

fn strip_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_is_fully_mapped() {
        for (word, category) in STATUS_VOCABULARY {
            assert_eq!(classify(word), *category, "word {word}");
            assert_eq!(classify(&word.to_uppercase()), *category, "word {word}");
        }
    }

    #[test]
    fn test_localized_spellings() {
        assert_eq!(classify("Crítico"), StatusCategory::Critical);
        assert_eq!(classify("CRÍTICO"), StatusCategory::Critical);
        assert_eq!(classify("critico"), StatusCategory::Critical);
        assert_eq!(classify("Alarme"), StatusCategory::Alert);
        assert_eq!(classify("ATENÇÃO"), StatusCategory::Alert);
        assert_eq!(classify("Em  Manutenção "), StatusCategory::Maintenance);
        assert_eq!(classify("MANUTENÇÃO"), StatusCategory::Maintenance);
        assert_eq!(classify("Desligado"), StatusCategory::Off);
        assert_eq!(classify(" NORMAL "), StatusCategory::Normal);
    }

    #[test]
    fn test_decomposed_accents() {
        assert_eq!(classify("CRI\u{301}TICO"), StatusCategory::Critical);
        assert_eq!(classify("manutenc\u{327}a\u{303}o"), StatusCategory::Maintenance);
        assert_eq!(classify("ATENC\u{327}A\u{303}O"), StatusCategory::Alert);
    }

    #[test]
    fn test_unknown_status_falls_back() {
        assert_eq!(classify(""), DEFAULT_CATEGORY);
        assert_eq!(classify("???"), DEFAULT_CATEGORY);
        assert_eq!(classify("quase crítico"), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for raw in ["crítico", "Alarme", "xyz", "off"] {
            assert_eq!(classify(raw), classify(raw));
        }
    }

    #[test]
    fn test_presentation_metadata() {
        let labels: Vec<_> = StatusCategory::PRESENTATION_ORDER
            .iter()
            .map(|c| c.chart_label())
            .collect();
        assert_eq!(
            labels,
            vec!["NORMAIS", "EM MANUTENÇÃO", "DESLIGADOS", "ALARME", "CRÍTICO"]
        );
        assert_eq!(StatusCategory::Critical.color_tag(), "bg-destructive");
        assert!(StatusCategory::Alert.requires_report());
        assert!(!StatusCategory::Maintenance.requires_report());
    }
}
