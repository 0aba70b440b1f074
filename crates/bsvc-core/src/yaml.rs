//! # YAML to JSON Conversion
//!
//! Service definitions are authored in YAML but published as JSON. YAML has
//! a richer type system than JSON (tags, non-string keys, non-finite floats);
//! service definitions use only the JSON-compatible subset, and anything
//! outside it is rejected here rather than silently mangled.

use serde_json::Value;

use crate::error::CoreError;

/// Convert a service definition's YAML tree into the JSON tree published
/// in `services.json`.
///
/// Mapping order is kept as written: the catalog lists each service's
/// fields in the order its author put them in the YAML file, so diffs of
/// `services.json` stay readable. String, number and bool keys become JSON
/// strings. YAML tags carry no meaning for the catalog and are dropped,
/// keeping the tagged value.
///
/// # Errors
///
/// Returns `CoreError::Conversion` for non-finite floats and for mapping keys
/// that have no JSON representation.
pub fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, CoreError> {
    use serde_yaml::Value as Yaml;

    Ok(match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(*b),
        Yaml::Number(n) => Value::Number(json_number(n)?),
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Sequence(seq) => Value::Array(
            seq.iter()
                .map(yaml_to_json_value)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(map) => Value::Object(
            map.iter()
                .map(|(k, v)| Ok((json_key(k)?, yaml_to_json_value(v)?)))
                .collect::<Result<_, CoreError>>()?,
        ),
        Yaml::Tagged(tagged) => yaml_to_json_value(&tagged.value)?,
    })
}

/// Integers stay integers; floats must be finite to exist in JSON.
fn json_number(n: &serde_yaml::Number) -> Result<serde_json::Number, CoreError> {
    if let Some(i) = n.as_i64() {
        return Ok(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Ok(u.into());
    }
    n.as_f64()
        .and_then(serde_json::Number::from_f64)
        .ok_or_else(|| CoreError::Conversion(format!("cannot represent float {n} in JSON")))
}

/// JSON object keys are strings; only scalar YAML keys have a string form.
fn json_key(key: &serde_yaml::Value) -> Result<String, CoreError> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(CoreError::Conversion(format!(
            "unsupported YAML map key type: {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(src: &str) -> Result<Value, CoreError> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(src).unwrap();
        yaml_to_json_value(&yaml)
    }

    #[test]
    fn converts_scalars_and_collections() {
        let json = convert(
            r#"
id: youtube
name: YouTube
rank: 42
ratio: 0.5
enabled: true
missing: ~
rules:
  - '||youtube.com^'
  - '||ytimg.com^'
"#,
        )
        .unwrap();

        assert_eq!(json["id"], "youtube");
        assert_eq!(json["rank"], 42);
        assert_eq!(json["ratio"], 0.5);
        assert_eq!(json["enabled"], true);
        assert!(json["missing"].is_null());
        assert_eq!(json["rules"][1], "||ytimg.com^");
    }

    #[test]
    fn preserves_mapping_order() {
        let json = convert("zeta: 1\nalpha: 2\nmid: 3\n").unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn stringifies_number_and_bool_keys() {
        let json = convert("1: one\ntrue: yes\n").unwrap();
        assert_eq!(json["1"], "one");
        assert_eq!(json["true"], "yes");
    }

    #[test]
    fn rejects_sequence_keys() {
        let err = convert("? [a, b]\n: value\n").unwrap_err();
        assert!(matches!(err, CoreError::Conversion(_)));
    }

    #[test]
    fn rejects_non_finite_float() {
        let err = convert("value: .nan\n").unwrap_err();
        assert!(err.to_string().contains("cannot represent float"));
    }

    #[test]
    fn drops_tags() {
        let json = convert("value: !custom 7\n").unwrap();
        assert_eq!(json["value"], 7);
    }
}
