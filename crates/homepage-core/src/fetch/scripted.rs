//! Scripted transport for tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use super::{FetchError, Transport};

/// Replays queued responses per endpoint, in order.
///
/// The last queued response for an endpoint is repeated once the queue is
/// down to one entry; an endpoint with nothing queued fails as a transport
/// error.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<HashMap<String, VecDeque<Result<Vec<u8>, String>>>>,
    calls: Mutex<HashMap<String, usize>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_json(&self, endpoint: &str, body: &str) {
        self.push(endpoint, Ok(body.as_bytes().to_vec()));
    }

    pub fn fail(&self, endpoint: &str) {
        self.push(endpoint, Err("connection refused".to_string()));
    }

    pub fn calls(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(endpoint)
            .copied()
            .unwrap_or(0)
    }

    fn push(&self, endpoint: &str, response: Result<Vec<u8>, String>) {
        self.responses
            .lock()
            .unwrap()
            .entry(endpoint.to_string())
            .or_default()
            .push_back(response);
    }

    fn next(&self, endpoint: &str) -> Result<Vec<u8>, FetchError> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(endpoint.to_string())
            .or_default() += 1;

        let mut responses = self.responses.lock().unwrap();
        let queue = responses.entry(endpoint.to_string()).or_default();
        let response = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };

        match response {
            Some(Ok(body)) => Ok(body),
            Some(Err(message)) => Err(FetchError::Transport {
                url: endpoint.to_string(),
                message,
            }),
            None => Err(FetchError::Transport {
                url: endpoint.to_string(),
                message: "no scripted response".to_string(),
            }),
        }
    }
}

impl Transport for ScriptedTransport {
    async fn fetch(&self, endpoint: &str) -> Result<Vec<u8>, FetchError> {
        self.next(endpoint)
    }
}
