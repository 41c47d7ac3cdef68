//! Remote resources the dashboard polls.
//!
//! Each resource is decoded in two steps: a lenient payload type where every
//! field is optional, then validation into the strongly typed resource. A
//! payload that parses but lacks a required field is reported as
//! [`FetchError::Incomplete`](crate::fetch::FetchError::Incomplete), not as a
//! decode failure.

pub mod background;
pub mod greeting;
pub mod weather;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::defaults;
use crate::fetch::FetchError;

pub use background::{BackgroundImage, BackgroundPayload};
pub use greeting::{Greeting, GreetingPayload};
pub use weather::{Measurement, WEATHER_OK, WeatherPayload, WeatherReading};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Weather,
    Background,
    Greeting,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Weather,
        ResourceKind::Background,
        ResourceKind::Greeting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Weather => "weather",
            ResourceKind::Background => "background",
            ResourceKind::Greeting => "greeting",
        }
    }

    pub fn default_endpoint(&self) -> &'static str {
        match self {
            ResourceKind::Weather => defaults::DEFAULT_WEATHER_ENDPOINT,
            ResourceKind::Background => defaults::DEFAULT_BACKGROUND_ENDPOINT,
            ResourceKind::Greeting => defaults::DEFAULT_GREETING_ENDPOINT,
        }
    }

    pub fn default_interval_secs(&self) -> u64 {
        match self {
            ResourceKind::Weather => defaults::DEFAULT_WEATHER_INTERVAL_SECS,
            ResourceKind::Background => defaults::DEFAULT_BACKGROUND_INTERVAL_SECS,
            ResourceKind::Greeting => defaults::DEFAULT_GREETING_INTERVAL_SECS,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated remote resource.
pub trait Resource: Sized + Send + 'static {
    const KIND: ResourceKind;

    /// Lenient wire shape.
    type Payload: DeserializeOwned;

    fn from_payload(payload: Self::Payload) -> Result<Self, FetchError>;
}

/// Unwrap a required payload field or report which one is missing.
pub(crate) fn require<T>(
    value: Option<T>,
    kind: ResourceKind,
    field: &'static str,
) -> Result<T, FetchError> {
    value.ok_or(FetchError::Incomplete { kind, field })
}
