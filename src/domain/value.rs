// Loosely-typed payload values
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A scalar the upstream API sends either as a JSON number or as text
/// (report ids, revisions, temperatures).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ScalarValue {
    /// Zero, NaN and blank text carry no information for the report.
    pub fn is_blank(&self) -> bool {
        match self {
            ScalarValue::Integer(n) => *n == 0,
            ScalarValue::Float(n) => *n == 0.0 || n.is_nan(),
            ScalarValue::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Integer(n) => write!(f, "{}", n),
            ScalarValue::Float(n) => write!(f, "{}", n),
            ScalarValue::Text(s) => write!(f, "{}", s.trim()),
        }
    }
}

/// Returns the value only when it holds something other than whitespace.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Returns the scalar only when it is not blank.
pub fn present(value: Option<&ScalarValue>) -> Option<&ScalarValue> {
    value.filter(|v| !v.is_blank())
}

/// Deserializes a text field that may arrive as null, a number or a string.
pub fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<ScalarValue>::deserialize(deserializer)?;
    Ok(value.map(|v| v.to_string()).unwrap_or_default())
}

/// Deserializes an optional text field that may arrive as a number.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<ScalarValue>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        ScalarValue::Text(s) => s,
        other => other.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "text_or_empty")]
        text: String,
        value: Option<ScalarValue>,
        #[serde(default, deserialize_with = "optional_text")]
        phone: Option<String>,
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(ScalarValue::Integer(8).to_string(), "8");
        assert_eq!(ScalarValue::Float(45.5).to_string(), "45.5");
        assert_eq!(ScalarValue::Float(70.0).to_string(), "70");
        assert_eq!(ScalarValue::Text(" 12 ".to_string()).to_string(), "12");
    }

    #[test]
    fn test_blank_scalars() {
        assert!(ScalarValue::Integer(0).is_blank());
        assert!(ScalarValue::Float(f64::NAN).is_blank());
        assert!(ScalarValue::Text("  ".to_string()).is_blank());
        assert!(!ScalarValue::Text("0".to_string()).is_blank());
        assert!(!ScalarValue::Float(0.5).is_blank());
    }

    #[test]
    fn test_text_or_empty_accepts_null_and_numbers() {
        let h: Holder = serde_json::from_str(r#"{"text": null, "value": "38"}"#).unwrap();
        assert_eq!(h.text, "");
        assert_eq!(h.value, Some(ScalarValue::Text("38".to_string())));

        let h: Holder = serde_json::from_str(r#"{"text": 42, "value": 61.2}"#).unwrap();
        assert_eq!(h.text, "42");
        assert_eq!(h.value, Some(ScalarValue::Float(61.2)));

        let h: Holder = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(h.text, "");
        assert_eq!(h.value, None);
    }

    #[test]
    fn test_optional_text_accepts_numbers() {
        let h: Holder = serde_json::from_str(r#"{"value": null, "phone": 1140000000}"#).unwrap();
        assert_eq!(h.phone.as_deref(), Some("1140000000"));

        let h: Holder = serde_json::from_str(r#"{"value": null, "phone": "(11) 4000-0000"}"#).unwrap();
        assert_eq!(h.phone.as_deref(), Some("(11) 4000-0000"));

        let h: Holder = serde_json::from_str(r#"{"value": null, "phone": null}"#).unwrap();
        assert_eq!(h.phone, None);

        let h: Holder = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(h.phone, None);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("x")), Some("x"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }
}
