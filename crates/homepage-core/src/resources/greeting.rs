use serde::Deserialize;

use super::{Resource, ResourceKind, require};
use crate::fetch::FetchError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GreetingPayload {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub message: String,
}

impl Resource for Greeting {
    const KIND: ResourceKind = ResourceKind::Greeting;
    type Payload = GreetingPayload;

    fn from_payload(payload: GreetingPayload) -> Result<Self, FetchError> {
        Ok(Self {
            message: require(payload.message, Self::KIND, "message")?,
        })
    }
}
