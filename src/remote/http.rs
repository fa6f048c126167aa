// src/remote/http.rs

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;

use super::{error_message, CompileClient, TransportError};

/// Blocking HTTP implementation of [`CompileClient`].
#[derive(Debug, Clone)]
pub struct HttpCompileClient {
    client: Client,
}

impl HttpCompileClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("unglue/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building HTTP client")?;
        Ok(Self { client })
    }
}

impl CompileClient for HttpCompileClient {
    fn post(&self, url: &str, body: &Value) -> Result<Value, TransportError> {
        let json = serde_json::to_string(body)
            .map_err(|e| TransportError::InvalidBody(e.to_string()))?;
        debug!(url, bytes = json.len(), "POST compile request");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(json)
            .send()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        debug!(url, status = status.as_u16(), bytes = text.len(), "compile response");

        if status.is_success() {
            return serde_json::from_str(&text)
                .map_err(|e| TransportError::InvalidBody(e.to_string()));
        }

        Err(TransportError::Rejected {
            status: status.as_u16(),
            message: error_message(&text, format!("HTTP error {status}")),
        })
    }
}
