// src/model/blank.rs

//! Serde helper for the store's blank-string sentinel. Numeric fields the
//! operator has not filled in persist as `""` and must come back as `None`,
//! keeping "unknown" distinct from an explicit 0.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de> + FromStr,
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Value(T),
        Text(String),
    }

    match Option::<Raw<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Value(v)) => Ok(Some(v)),
        Some(Raw::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(trimmed.parse().ok())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(default, with = "super")]
        value: Option<f64>,
    }

    #[test]
    fn blank_string_means_unset() {
        let holder: Holder = serde_json::from_str(r#"{"value": ""}"#).unwrap();
        assert_eq!(holder.value, None);
    }

    #[test]
    fn numbers_pass_through() {
        let holder: Holder = serde_json::from_str(r#"{"value": 24}"#).unwrap();
        assert_eq!(holder.value, Some(24.0));
    }

    #[test]
    fn numeric_strings_are_parsed() {
        let holder: Holder = serde_json::from_str(r#"{"value": "12.5"}"#).unwrap();
        assert_eq!(holder.value, Some(12.5));
    }

    #[test]
    fn missing_field_means_unset() {
        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(holder.value, None);
    }

    #[test]
    fn unset_serializes_back_to_blank() {
        let json = serde_json::to_string(&Holder { value: None }).unwrap();
        assert_eq!(json, r#"{"value":""}"#);
        let back: Holder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value, None);
    }
}
