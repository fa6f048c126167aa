use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use unglue::remote::{CompileClient, CompilePayload, TransportError};

/// A request the fake client received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub body: Value,
}

impl RecordedRequest {
    /// Decode the body back into a payload.
    pub fn payload(&self) -> CompilePayload {
        serde_json::from_value(self.body.clone()).expect("request body is a CompilePayload")
    }
}

/// A fake compile server that:
/// - records every request it receives
/// - answers with queued responses, in order
///
/// When the queue runs dry it answers `{"code": "", "map": ""}`.
#[derive(Debug, Clone, Default)]
pub struct FakeCompileClient {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<VecDeque<Result<Value, TransportError>>>>,
}

impl FakeCompileClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, response: Result<Value, TransportError>) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Queue a success answer.
    pub fn respond_ok(&self, code: &str, map: &str) -> &Self {
        self.respond(Ok(json!({ "code": code, "map": map })))
    }

    /// Queue a network-level failure.
    pub fn respond_network_error(&self, message: &str) -> &Self {
        self.respond(Err(TransportError::Network(message.to_string())))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl CompileClient for FakeCompileClient {
    fn post(&self, url: &str, body: &Value) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            body: body.clone(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({ "code": "", "map": "" })))
    }
}
