//! Field deserializers for `#[serde(deserialize_with = "...")]`
//!
//! A leaf of the wrong type becomes `None` instead of failing the whole
//! payload. Sequences and maps drop only their bad elements.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Any value; `None` when it does not fit `T` (including `null`)
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Array whose elements are checked one by one; `None` for non-arrays
pub fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<Option<T>>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items.into_iter().map(|item| T::deserialize(item).ok()).collect(),
        )),
        _ => Ok(None),
    }
}

/// Object whose ill-typed entries are skipped; `None` for non-objects
pub fn lenient_map<'de, D, T>(deserializer: D) -> Result<Option<BTreeMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Object(entries) => Ok(Some(
            entries
                .into_iter()
                .filter_map(|(key, value)| T::deserialize(value).ok().map(|v| (key, v)))
                .collect(),
        )),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Number};

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient")]
        count: Option<Number>,
        #[serde(default, deserialize_with = "lenient_seq")]
        streaks: Option<Vec<Option<Number>>>,
        #[serde(default, deserialize_with = "lenient_map")]
        guesses: Option<BTreeMap<String, Number>>,
    }

    #[test]
    fn test_wrong_type_becomes_none() {
        let sample: Sample = serde_json::from_value(json!({"count": "n/a"})).unwrap();
        assert!(sample.count.is_none());
        assert!(sample.streaks.is_none());
    }

    #[test]
    fn test_null_elements_kept_as_gaps() {
        let sample: Sample = serde_json::from_value(json!({"streaks": [1, null, "x", 4]})).unwrap();
        assert_eq!(
            sample.streaks,
            Some(vec![Some(Number::from(1)), None, None, Some(Number::from(4))])
        );
    }

    #[test]
    fn test_map_skips_bad_entries() {
        let sample: Sample =
            serde_json::from_value(json!({"guesses": {"1": 2, "2": "lots", "3": 5}})).unwrap();
        let guesses = sample.guesses.unwrap();
        assert_eq!(guesses.len(), 2);
        assert_eq!(guesses.get("3"), Some(&Number::from(5)));
    }

    #[test]
    fn test_non_container_is_none() {
        let sample: Sample =
            serde_json::from_value(json!({"streaks": 7, "guesses": [1, 2]})).unwrap();
        assert!(sample.streaks.is_none());
        assert!(sample.guesses.is_none());
    }
}
