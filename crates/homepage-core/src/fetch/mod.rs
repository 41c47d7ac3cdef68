//! Resource fetching.
//!
//! Two layers:
//! - [`fetch_resource`] returns a `Result` that tells transport failures,
//!   malformed bodies, missing fields and wrong sentinels apart.
//! - [`fetch_optional`] collapses every failure to `None` after logging it.
//!   Pollers only use this layer, so a failed request never reaches the
//!   surface.

pub mod errors;
pub mod http;
#[cfg(test)]
pub(crate) mod scripted;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use tracing::{debug, warn};

use crate::errors::HomepageError;
use crate::resources::Resource;

pub use errors::FetchError;
pub use http::HttpTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMethod {
    #[default]
    Get,
    /// Legacy backends answer on POST.
    Post,
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestMethod::Get => write!(f, "GET"),
            RequestMethod::Post => write!(f, "POST"),
        }
    }
}

/// Something that can fetch the raw body behind a relative endpoint.
pub trait Transport: Send + Sync + 'static {
    fn fetch(&self, endpoint: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Fetch, decode and validate one resource.
pub async fn fetch_resource<R, T>(transport: &T, endpoint: &str) -> Result<R, FetchError>
where
    R: Resource,
    T: Transport + ?Sized,
{
    let body = transport.fetch(endpoint).await?;
    let payload: R::Payload =
        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            kind: R::KIND,
            message: e.to_string(),
        })?;
    R::from_payload(payload)
}

/// Fetch a resource, turning any failure into `None`.
pub async fn fetch_optional<R, T>(transport: &T, endpoint: &str) -> Option<R>
where
    R: Resource,
    T: Transport + ?Sized,
{
    match fetch_resource::<R, T>(transport, endpoint).await {
        Ok(resource) => {
            debug!(
                event = "core.fetch.request_completed",
                resource = %R::KIND,
                endpoint = endpoint
            );
            Some(resource)
        }
        Err(e) => {
            warn!(
                event = "core.fetch.request_failed",
                resource = %R::KIND,
                endpoint = endpoint,
                error_code = e.error_code(),
                error = %e
            );
            None
        }
    }
}
