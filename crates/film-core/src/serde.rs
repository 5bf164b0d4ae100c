//! Lenient deserializers for request bodies.
//!
//! Missing and `null` fields both become `None` so that required-field checks
//! happen in validation and produce one consistent 400 response.

use serde::{Deserialize, Deserializer, de};

/// Deserializes an optional string and trims surrounding whitespace.
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.map(|s| s.trim().to_string()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

/// Deserializes an optional year given either as a JSON number or a numeric string.
///
/// An empty string counts as absent.
pub fn deserialize_lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<NumberOrString> = Option::deserialize(deserializer)?;
    let value = match raw {
        None => return Ok(None),
        Some(NumberOrString::Number(n)) => n,
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => return Ok(None),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid year: {}", s)))?,
    };

    i32::try_from(value)
        .map(Some)
        .map_err(|_| de::Error::custom(format!("year out of range: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "deserialize_trimmed_string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "deserialize_lenient_year")]
        year: Option<i32>,
    }

    #[test]
    fn test_trims_strings() {
        let probe: Probe = serde_json::from_str(r#"{"name":"  Tika  "}"#).unwrap();
        assert_eq!(probe.name.as_deref(), Some("Tika"));
        assert_eq!(probe.year, None);
    }

    #[test]
    fn test_year_accepts_number_and_numeric_string() {
        let probe: Probe = serde_json::from_str(r#"{"year":2019}"#).unwrap();
        assert_eq!(probe.year, Some(2019));
        let probe: Probe = serde_json::from_str(r#"{"year":" 1970 "}"#).unwrap();
        assert_eq!(probe.year, Some(1970));
    }

    #[test]
    fn test_year_null_and_empty_are_absent() {
        let probe: Probe = serde_json::from_str(r#"{"year":null}"#).unwrap();
        assert_eq!(probe.year, None);
        let probe: Probe = serde_json::from_str(r#"{"year":""}"#).unwrap();
        assert_eq!(probe.year, None);
    }

    #[test]
    fn test_year_rejects_garbage() {
        assert!(serde_json::from_str::<Probe>(r#"{"year":"nineteen"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"year":99999999999}"#).is_err());
    }
}
