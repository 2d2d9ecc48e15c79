//! In-memory transport for unit tests

use super::transport::{RawResponse, Transport, TransportRequest};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays canned responses in order and records every request it receives
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<RawResponse>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Ok(RawResponse::new(status, body.into())))
    }

    pub(crate) fn respond_json(self, body: &serde_json::Value) -> Self {
        self.respond(200, body.to_string())
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.push(Err(Error::Other(message.to_string())))
    }

    fn push(self, response: Result<RawResponse>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Other("no scripted response left".to_string())))
    }
}
