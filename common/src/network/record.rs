//! # Lookup Record Model
//!
//! The structured answer of the geolocation service for one address.
//!
//! The service omits keys it was not asked for and may leave others out for
//! reserved ranges, so the record is an ordered key/value map with a few
//! typed accessors on top. Nothing the service sent is dropped when the
//! record is rendered.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields requested from the service.
pub const FIELDS: &[&str] = &[
    "status",
    "message",
    "continent",
    "continentCode",
    "country",
    "countryCode",
    "region",
    "regionName",
    "city",
    "district",
    "zip",
    "lat",
    "lon",
    "timezone",
    "offset",
    "currency",
    "isp",
    "org",
    "as",
    "asname",
    "reverse",
    "mobile",
    "proxy",
    "hosting",
    "query",
];

/// One answer from the service, kept exactly as it arrived.
///
/// Keys stay in arrival order and values keep their JSON type, so a field
/// the service changes the shape of still renders instead of failing the
/// whole lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupRecord {
    fields: Map<String, Value>,
}

impl LookupRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn status(&self) -> Option<&str> {
        self.text("status")
    }

    pub fn country(&self) -> Option<&str> {
        self.text("country")
    }

    pub fn country_code(&self) -> Option<&str> {
        self.text("countryCode")
    }

    pub fn city(&self) -> Option<&str> {
        self.text("city")
    }

    pub fn latitude(&self) -> Option<f64> {
        self.get("lat").and_then(Value::as_f64)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.get("lon").and_then(Value::as_f64)
    }

    /// The address the service answered for.
    pub fn query(&self) -> Option<&str> {
        self.text("query")
    }

    /// Label/value pairs for every key in the record, in arrival order.
    pub fn rows(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.clone(), value_to_text(value)))
            .collect()
    }
}

impl From<Map<String, Value>> for LookupRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Plain string coercion: strings unquoted, everything else in JSON notation.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
