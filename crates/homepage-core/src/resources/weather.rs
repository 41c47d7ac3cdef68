use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use super::{Resource, ResourceKind, require};
use crate::fetch::FetchError;

/// Application-level success sentinel carried in the `cod` field.
pub const WEATHER_OK: i64 = 200;

/// A temperature or humidity value.
///
/// Older backends send raw numbers, newer ones send preformatted strings
/// such as `"18.2°C"` or `"60%"`. Both render as-is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Measurement {
    Number(f64),
    Text(String),
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Number(n) => write!(f, "{}", n),
            Measurement::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherPayload {
    #[serde(default)]
    pub cod: Option<Value>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub temperature: Option<Measurement>,
    #[serde(default)]
    pub humidity: Option<Measurement>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub status_code: i64,
    pub city: String,
    pub temperature: Measurement,
    pub humidity: Measurement,
    pub description: String,
}

impl WeatherReading {
    /// Text for the `#temperature-humidity` node.
    pub fn temperature_humidity_text(&self) -> String {
        format!("{} - {}", self.temperature, self.humidity)
    }
}

/// Read `cod` as an integer; upstream weather APIs send it as a number on
/// success and as a string (`"404"`) on failure. Whole floats like `200.0`
/// compare equal to their integer.
fn status_code(cod: &Value) -> Option<i64> {
    match cod {
        Value::Number(n) => n.as_i64().or_else(|| whole(n.as_f64()?)),
        Value::String(s) => {
            let s = s.trim();
            s.parse().ok().or_else(|| whole(s.parse().ok()?))
        }
        _ => None,
    }
}

fn whole(n: f64) -> Option<i64> {
    (n.fract() == 0.0 && n.abs() < i64::MAX as f64).then_some(n as i64)
}

impl Resource for WeatherReading {
    const KIND: ResourceKind = ResourceKind::Weather;
    type Payload = WeatherPayload;

    fn from_payload(payload: WeatherPayload) -> Result<Self, FetchError> {
        let kind = Self::KIND;
        let cod = require(payload.cod, kind, "cod")?;
        let status_code = status_code(&cod).ok_or_else(|| FetchError::InvalidField {
            kind,
            field: "cod",
            value: cod.to_string(),
        })?;
        if status_code != WEATHER_OK {
            return Err(FetchError::Sentinel {
                kind,
                code: status_code,
            });
        }

        Ok(Self {
            status_code,
            city: require(payload.city, kind, "city")?,
            temperature: require(payload.temperature, kind, "temperature")?,
            humidity: require(payload.humidity, kind, "humidity")?,
            description: require(payload.description, kind, "description")?,
        })
    }
}
