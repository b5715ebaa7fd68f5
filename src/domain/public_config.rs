//! The backend-supplied public config document.
//!
//! Validation is all-or-nothing: any violated constraint rejects the whole
//! document, even when other fields would have been acceptable.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const FIELD_MAX_SIZE_MB: &str = "maxSizeMb";
const FIELD_SUPPORTED_EXTENSIONS: &str = "supportedExtensions";
const FIELD_SUPPORTED_MIME_TYPES: &str = "supportedMimeTypes";

/// Optional overrides for [`FileConstraints`](super::FileConstraints).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size_mb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_extensions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_mime_types: Option<Vec<String>>,
}

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every constraint a rejected document violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(pub Vec<Violation>);

impl Violations {
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
        }
        Ok(())
    }
}

impl PublicConfig {
    /// Validate a decoded JSON document.
    ///
    /// Accepts an object whose known keys, when present, hold a positive
    /// number (`maxSizeMb`) or arrays of non-empty strings. Unknown keys are
    /// ignored.
    pub fn from_json(value: &Value) -> Result<Self, Violations> {
        let Some(object) = value.as_object() else {
            return Err(Violations(vec![Violation::new(
                "$",
                format!("expected an object, got {}", kind_of(value)),
            )]));
        };

        let mut violations = Vec::new();
        let config = Self {
            max_size_mb: positive_number(object, FIELD_MAX_SIZE_MB, &mut violations),
            supported_extensions: string_list(object, FIELD_SUPPORTED_EXTENSIONS, &mut violations),
            supported_mime_types: string_list(object, FIELD_SUPPORTED_MIME_TYPES, &mut violations),
        };

        if violations.is_empty() {
            Ok(config)
        } else {
            Err(Violations(violations))
        }
    }
}

fn positive_number(
    object: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<Violation>,
) -> Option<f64> {
    let value = object.get(field)?;
    match value.as_f64() {
        Some(n) if n > 0.0 => Some(n),
        Some(n) => {
            violations.push(Violation::new(field, format!("must be positive, got {}", n)));
            None
        }
        None => {
            violations.push(Violation::new(
                field,
                format!("expected a number, got {}", kind_of(value)),
            ));
            None
        }
    }
}

fn string_list(
    object: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<Violation>,
) -> Option<Vec<String>> {
    let value = object.get(field)?;
    let Some(items) = value.as_array() else {
        violations.push(Violation::new(
            field,
            format!("expected an array, got {}", kind_of(value)),
        ));
        return None;
    };

    let before = violations.len();
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item.as_str() {
            Some("") => violations.push(Violation::new(
                format!("{}[{}]", field, i),
                "must not be empty",
            )),
            Some(s) => out.push(s.to_string()),
            None => violations.push(Violation::new(
                format!("{}[{}]", field, i),
                format!("expected a string, got {}", kind_of(item)),
            )),
        }
    }

    (violations.len() == before).then_some(out)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_full_document() {
        let cfg = PublicConfig::from_json(&json!({
            "maxSizeMb": 25,
            "supportedExtensions": ["PDF", " pdf "],
            "supportedMimeTypes": ["application/pdf"]
        }))
        .unwrap();

        assert_eq!(cfg.max_size_mb, Some(25.0));
        assert_eq!(cfg.supported_extensions.unwrap(), ["PDF", " pdf "]);
        assert_eq!(cfg.supported_mime_types.unwrap(), ["application/pdf"]);
    }

    #[test]
    fn all_fields_are_optional() {
        let cfg = PublicConfig::from_json(&json!({})).unwrap();
        assert_eq!(cfg, PublicConfig::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg = PublicConfig::from_json(&json!({ "maxSizeMb": 1.5, "theme": "dark" })).unwrap();
        assert_eq!(cfg.max_size_mb, Some(1.5));
    }

    #[test]
    fn one_bad_field_rejects_the_document() {
        let err = PublicConfig::from_json(&json!({
            "maxSizeMb": 25,
            "supportedExtensions": ["pdf", ""]
        }))
        .unwrap_err();

        assert_eq!(err.len(), 1);
        assert_eq!(err.0[0].field, "supportedExtensions[1]");
    }

    #[test]
    fn collects_every_violation() {
        let err = PublicConfig::from_json(&json!({
            "maxSizeMb": -1,
            "supportedExtensions": "pdf",
            "supportedMimeTypes": [1, null]
        }))
        .unwrap_err();

        let fields: Vec<_> = err.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "maxSizeMb",
                "supportedExtensions",
                "supportedMimeTypes[0]",
                "supportedMimeTypes[1]"
            ]
        );
    }

    #[test]
    fn zero_and_null_sizes_are_rejected() {
        assert!(PublicConfig::from_json(&json!({ "maxSizeMb": 0 })).is_err());
        assert!(PublicConfig::from_json(&json!({ "maxSizeMb": null })).is_err());
        assert!(PublicConfig::from_json(&json!({ "maxSizeMb": "10" })).is_err());
    }

    #[test]
    fn non_object_is_rejected() {
        let err = PublicConfig::from_json(&json!(["pdf"])).unwrap_err();
        assert_eq!(err.to_string(), "$: expected an object, got an array");
    }
}
