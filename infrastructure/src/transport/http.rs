//! Shared HTTP plumbing for all transports.
//!
//! One [`reqwest::Client`] per transport, built with the configured timeout.
//! Every request is a JSON `POST` to the configured endpoint carrying the
//! bearer credential when one is set.

use crate::config::FileBackendConfig;
use kbridge_application::TransportError;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

/// Endpoint, credential and timeout for one transport
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl HttpSettings {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            timeout: Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        self.api_key = (!key.is_empty()).then_some(key);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_backend(config: &FileBackendConfig) -> Self {
        let settings = Self::new(config.endpoint.trim()).with_timeout(config.timeout());
        match config.api_key() {
            Some(key) => settings.with_api_key(key),
            None => settings,
        }
    }
}

/// HTTP client bound to one endpoint
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    settings: HttpSettings,
}

impl HttpClient {
    pub fn new(settings: HttpSettings) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { client, settings })
    }

    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }

    /// JSON `POST` to the endpoint with credentials attached
    pub fn post(&self) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .post(&self.settings.endpoint)
            .header(CONTENT_TYPE, "application/json");
        match &self.settings.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    /// Send and require a 2xx status.
    ///
    /// Non-2xx responses become [`TransportError::Http`] carrying the raw body.
    pub async fn send(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, TransportError> {
        let response = builder
            .send()
            .await
            .map_err(|e| self.classify(e, TransportError::Request))?;

        let status = response.status();
        debug!("{} answered HTTP {}", self.settings.endpoint, status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
            return Err(TransportError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Read the whole body as text
    pub async fn text(&self, response: reqwest::Response) -> Result<String, TransportError> {
        response
            .text()
            .await
            .map_err(|e| self.classify(e, TransportError::Read))
    }

    /// Timeouts get their own variant; everything else is wrapped by `other`.
    pub fn classify(
        &self,
        error: reqwest::Error,
        other: fn(String) -> TransportError,
    ) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout(self.settings.timeout.as_secs())
        } else {
            other(error.to_string())
        }
    }
}

/// Whether a response declares an SSE body
pub(crate) fn is_event_stream(response: &reqwest::Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("text/event-stream"))
}
