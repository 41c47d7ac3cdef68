use serde::Deserialize;

use super::{Resource, ResourceKind, require};
use crate::fetch::FetchError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackgroundPayload {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub light_text: Option<bool>,
    #[serde(default)]
    pub photographer: Option<String>,
    #[serde(default)]
    pub photographer_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundImage {
    pub url: String,
    /// Solid color painted while the image loads.
    pub color: String,
    pub light_text: bool,
    pub photographer: String,
    pub photographer_url: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl BackgroundImage {
    /// CSS value for `background-image`.
    pub fn css_url(&self) -> String {
        format!("url({})", self.url)
    }

    /// Class for the page root; its counterpart must be removed.
    pub fn text_class(&self) -> (&'static str, &'static str) {
        if self.light_text {
            ("light-text", "dark-text")
        } else {
            ("dark-text", "light-text")
        }
    }
}

impl Resource for BackgroundImage {
    const KIND: ResourceKind = ResourceKind::Background;
    type Payload = BackgroundPayload;

    fn from_payload(payload: BackgroundPayload) -> Result<Self, FetchError> {
        let kind = Self::KIND;
        Ok(Self {
            url: require(payload.url, kind, "url")?,
            color: require(payload.color, kind, "color")?,
            light_text: require(payload.light_text, kind, "light_text")?,
            photographer: require(payload.photographer, kind, "photographer")?,
            photographer_url: require(payload.photographer_url, kind, "photographer_url")?,
            location: payload.location,
            description: payload.description,
        })
    }
}
