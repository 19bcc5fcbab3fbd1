//! Common types embedded in several resource models.
//!
//! These are not resources themselves; they appear nested inside
//! [`UserProfile`](super::UserProfile) and [`MediaItem`](super::MediaItem).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A `{ "count": n }` wrapper, as used for likes and comments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Count {
    /// The number of entries.
    #[serde(default)]
    pub count: u64,
}

/// One rendition of an image or video (`thumbnail`, `low_resolution`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Rendition {
    /// Where the rendition can be downloaded.
    pub url: String,
    /// Width in pixels.
    #[serde(default)]
    pub width: u32,
    /// Height in pixels.
    #[serde(default)]
    pub height: u32,
}

/// Renditions keyed by size name.
pub type Renditions = HashMap<String, Rendition>;

/// A geographic location attached to media.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Location {
    /// The location ID, when it is a named place.
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<u64>,
    /// The place name.
    pub name: Option<String>,
    /// Latitude in degrees.
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    pub longitude: Option<f64>,
}

/// Extracts a non-zero numeric ID from a JSON value.
///
/// The API sends IDs as strings (`"1574083"`); numbers are accepted too.
#[must_use]
pub fn parse_id(value: &Value) -> Option<u64> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_u64(),
        _ => None,
    }
    .filter(|id| *id != 0)
}

pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_id))
}

/// Deserializes the API's unix-seconds timestamps (sent as strings).
pub(crate) fn deserialize_unix_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let seconds = match &value {
        Value::String(s) => s.trim().parse::<i64>().map_err(de::Error::custom)?,
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| de::Error::custom("timestamp out of range"))?,
        Value::Null => return Ok(None),
        other => {
            return Err(de::Error::custom(format!(
                "expected a unix timestamp, got {other}"
            )))
        }
    };
    DateTime::from_timestamp(seconds, 0)
        .map(Some)
        .ok_or_else(|| de::Error::custom("timestamp out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_id_accepts_strings_and_numbers() {
        assert_eq!(parse_id(&json!("1574083")), Some(1_574_083));
        assert_eq!(parse_id(&json!(42)), Some(42));
        assert_eq!(parse_id(&json!("0")), None);
        assert_eq!(parse_id(&json!("abc")), None);
        assert_eq!(parse_id(&json!(null)), None);
        assert_eq!(parse_id(&json!(-5)), None);
    }

    #[test]
    fn test_location_deserialization() {
        let location: Location = serde_json::from_value(json!({
            "id": "833",
            "latitude": 37.77956816727314,
            "longitude": -122.429626,
            "name": "Civic Center BART"
        }))
        .unwrap();

        assert_eq!(location.id, Some(833));
        assert_eq!(location.name.as_deref(), Some("Civic Center BART"));
    }

    #[test]
    fn test_unix_timestamp_from_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "deserialize_unix_timestamp")]
            at: Option<DateTime<Utc>>,
        }

        let wrapper: Wrapper = serde_json::from_value(json!({"at": "1279340983"})).unwrap();
        assert_eq!(wrapper.at.unwrap().timestamp(), 1_279_340_983);

        let wrapper: Wrapper = serde_json::from_value(json!({})).unwrap();
        assert!(wrapper.at.is_none());

        assert!(serde_json::from_value::<Wrapper>(json!({"at": "yesterday"})).is_err());
    }
}
