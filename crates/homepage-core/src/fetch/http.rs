use std::time::Duration;

use tracing::debug;

use super::{FetchError, RequestMethod, Transport};

/// [`Transport`] over HTTP, resolving endpoints against a base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    method: RequestMethod,
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new(
        base_url: &str,
        method: RequestMethod,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(FetchError::InvalidUrl {
                url: base_url,
                message: "must start with http:// or https://".to_string(),
            });
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            method,
            timeout,
        })
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn send(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let request = match self.method {
            RequestMethod::Get => self.client.get(url),
            RequestMethod::Post => self.client.post(url),
        };

        let response = request.send().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        Ok(body.to_vec())
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, endpoint: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.url_for(endpoint);
        debug!(
            event = "core.fetch.request_started",
            url = %url,
            method = %self.method
        );

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.send(&url))
                .await
                .map_err(|_| FetchError::Timeout {
                    url: url.clone(),
                    timeout_ms: limit.as_millis(),
                })?,
            None => self.send(&url).await,
        }
    }
}
