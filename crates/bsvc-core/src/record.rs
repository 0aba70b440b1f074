//! # Service Records
//!
//! A [`ServiceRecord`] is one parsed service definition file. Only two
//! fields are interpreted by the pipeline:
//!
//! - `id`: the [`ServiceId`], used as sort key and message prefix;
//! - `icon_svg`: raw SVG markup checked by the icon validator.
//!
//! Everything else (name, category, rules, ...) is opaque. The record keeps
//! the complete JSON object it was built from and serializes back to exactly
//! that object, so the catalog carries every field in its original order.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::identity::ServiceId;
use crate::yaml::yaml_to_json_value;

/// Field holding the service identifier.
pub const ID_FIELD: &str = "id";

/// Field holding the raw SVG icon markup.
pub const ICON_FIELD: &str = "icon_svg";

/// One blockable service definition.
///
/// Immutable once constructed: all accessors borrow.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRecord {
    id: ServiceId,
    icon_svg: String,
    fields: Map<String, Value>,
}

impl ServiceRecord {
    /// Build a record from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRecord` if the value is not an object, if
    /// `id` is missing or not a string, or if `icon_svg` is missing or not a
    /// string. Returns `CoreError::InvalidId` if `id` is empty.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        let Value::Object(fields) = value else {
            return Err(CoreError::InvalidRecord {
                reason: "document is not a mapping".to_string(),
            });
        };

        let id = ServiceId::new(required_str(&fields, ID_FIELD)?)?;
        let icon_svg = required_str(&fields, ICON_FIELD)?.to_string();

        Ok(Self { id, icon_svg, fields })
    }

    /// Parse a single YAML document into a record.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Yaml` for malformed YAML, `CoreError::Conversion`
    /// for YAML outside the JSON-compatible subset, and the errors of
    /// [`ServiceRecord::from_value`] for documents of the wrong shape.
    pub fn from_yaml_str(source: &str) -> Result<Self, CoreError> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(source)?;
        Self::from_value(yaml_to_json_value(&yaml)?)
    }

    /// The service identifier.
    pub fn id(&self) -> &ServiceId {
        &self.id
    }

    /// The raw SVG icon markup.
    pub fn icon_svg(&self) -> &str {
        &self.icon_svg
    }

    /// Look up any field of the original document, typed or opaque.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// All fields of the original document, in document order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

fn required_str<'a>(fields: &'a Map<String, Value>, name: &str) -> Result<&'a str, CoreError> {
    match fields.get(name) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(CoreError::InvalidRecord {
            reason: format!("field '{name}' must be a string, found {}", json_type_name(other)),
        }),
        None => Err(CoreError::InvalidRecord {
            reason: format!("missing required field '{name}'"),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}

impl Serialize for ServiceRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ServiceRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ICON: &str = r#"<svg viewBox="0 0 24 24" fill="currentColor"><path d="M0 0h24v24H0z"/></svg>"#;

    #[test]
    fn from_yaml_keeps_typed_and_opaque_fields() {
        let src = format!(
            "id: youtube\nname: YouTube\nrules:\n  - '||youtube.com^'\nicon_svg: '{ICON}'\n"
        );
        let record = ServiceRecord::from_yaml_str(&src).unwrap();

        assert_eq!(record.id().as_str(), "youtube");
        assert_eq!(record.icon_svg(), ICON);
        assert_eq!(record.field("name"), Some(&json!("YouTube")));
        assert_eq!(record.field("rules"), Some(&json!(["||youtube.com^"])));
    }

    #[test]
    fn serializes_back_to_original_object_in_order() {
        let src = format!("name: Acme\nid: acme\nicon_svg: '{ICON}'\nextra: 1\n");
        let record = ServiceRecord::from_yaml_str(&src).unwrap();
        let out = serde_json::to_string(&record).unwrap();
        let expected = format!(
            r#"{{"name":"Acme","id":"acme","icon_svg":{},"extra":1}}"#,
            serde_json::to_string(ICON).unwrap()
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn rejects_non_mapping_document() {
        let err = ServiceRecord::from_yaml_str("- a\n- b\n").unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecord { .. }));
    }

    #[test]
    fn rejects_missing_icon() {
        let err = ServiceRecord::from_yaml_str("id: acme\n").unwrap_err();
        assert!(err.to_string().contains("missing required field 'icon_svg'"));
    }

    #[test]
    fn rejects_non_string_id() {
        let err = ServiceRecord::from_value(json!({"id": 7, "icon_svg": ICON})).unwrap_err();
        assert!(err.to_string().contains("field 'id' must be a string, found number"));
    }

    #[test]
    fn rejects_empty_id() {
        let err = ServiceRecord::from_value(json!({"id": "", "icon_svg": ICON})).unwrap_err();
        assert!(matches!(err, CoreError::InvalidId(_)));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = ServiceRecord::from_yaml_str("id: [unterminated\n").unwrap_err();
        assert!(matches!(err, CoreError::Yaml(_)));
    }

    #[test]
    fn deserialize_round_trips_through_json() {
        let record = ServiceRecord::from_value(json!({"id": "acme", "icon_svg": ICON})).unwrap();
        let text = serde_json::to_string(&record).unwrap();
        let back: ServiceRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(back, record);
    }
}
