// src/remote/mod.rs

//! Talking to the remote compile server.
//!
//! The dispatcher only sees the [`CompileClient`] capability; the real HTTP
//! implementation lives in [`http`].

pub mod http;
pub mod payload;

use serde_json::Value;
use thiserror::Error;

pub use http::HttpCompileClient;
pub use payload::{CompileOutput, CompilePayload, CompileResponse, SourceFile};

/// Endpoint compiling one SCSS entry point.
pub const SCSS_ENDPOINT: &str = "compile/scss";
/// Endpoint bundling JS files.
pub const JS_ENDPOINT: &str = "compile/js";

/// Why a compile request produced no usable answer.
///
/// `Display` yields the most helpful message available, which is what gets
/// reported to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request never got an HTTP answer (DNS, connect, timeout, ...).
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// A success status whose body carries the server's error `message`.
    #[error("{0}")]
    Remote(String),

    /// A success status whose body is not the expected JSON.
    #[error("malformed compile response: {0}")]
    InvalidBody(String),
}

/// Minimal capability needed to reach the compile server.
pub trait CompileClient: Send + Sync {
    /// POST `body` as JSON to `url` and return the decoded JSON answer.
    fn post(&self, url: &str, body: &Value) -> Result<Value, TransportError>;
}

/// Join the server base URL and an endpoint path.
pub fn endpoint_url(server: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        server.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// The non-empty `message` field of a decoded JSON body, if any.
pub fn remote_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Pick the message to show for a failed request: the non-empty `message`
/// field of a JSON error body, else `fallback`.
pub fn error_message(body: &str, fallback: impl Into<String>) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| remote_message(&v))
        .unwrap_or_else(|| fallback.into())
}
