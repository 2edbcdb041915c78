//! Lenient scalar decoding
//!
//! Manifests are edited by hand, so `version: 1.10` or `url: true` decode
//! as numbers or booleans. These helpers accept any YAML scalar and keep
//! its textual form.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// Textual form of a scalar, or `None` for null, sequences and mappings.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        _ => "a scalar",
    }
}

/// Required scalar field.
pub fn scalar<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(&value)
        .ok_or_else(|| D::Error::custom(format!("expected a scalar, found {}", kind(&value))))
}

/// Optional scalar field; null decodes as `None`.
///
/// Use together with `#[serde(default)]` so a missing key is `None` too.
pub fn optional_scalar<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => scalar_to_string(&value).map(Some).ok_or_else(|| {
            D::Error::custom(format!("expected a scalar, found {}", kind(&value)))
        }),
    }
}

/// Optional mapping of scalars, in source order; null decodes as `None`.
pub fn optional_scalar_map<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<IndexMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<IndexMap<String, Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };

    raw.into_iter()
        .map(|(key, value)| {
            scalar_to_string(&value)
                .map(|s| (key.clone(), s))
                .ok_or_else(|| {
                    D::Error::custom(format!(
                        "expected a scalar for '{}', found {}",
                        key,
                        kind(&value)
                    ))
                })
        })
        .collect::<std::result::Result<IndexMap<_, _>, _>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Entry {
        #[serde(deserialize_with = "scalar")]
        url: String,
        #[serde(default, deserialize_with = "optional_scalar")]
        version: Option<String>,
        #[serde(default, deserialize_with = "optional_scalar_map")]
        tags: Option<IndexMap<String, String>>,
    }

    #[test]
    fn test_numbers_are_stringified() {
        let entry: Entry = serde_yaml::from_str("url: 42\nversion: 1.10\n").unwrap();
        assert_eq!(entry.url, "42");
        assert_eq!(entry.version.as_deref(), Some("1.1"));
    }

    #[test]
    fn test_null_and_missing_are_none() {
        let entry: Entry = serde_yaml::from_str("url: a\nversion:\n").unwrap();
        assert_eq!(entry.version, None);
        assert_eq!(entry.tags, None);
    }

    #[test]
    fn test_tag_map_keeps_order() {
        let yaml = r#"
url: a
tags:
  release: "release/{package}/{version}"
  devel: 7
"#;
        let entry: Entry = serde_yaml::from_str(yaml).unwrap();
        let tags = entry.tags.unwrap();
        let keys: Vec<_> = tags.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["release", "devel"]);
        assert_eq!(tags["devel"], "7");
    }

    #[test]
    fn test_mapping_rejected_as_scalar() {
        let err = serde_yaml::from_str::<Entry>("url: {a: b}\n").err().unwrap();
        assert!(err.to_string().contains("expected a scalar"));
    }
}
