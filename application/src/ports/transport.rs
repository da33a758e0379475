//! Transport port
//!
//! A transport knows one wire protocol: how to frame a [`Request`], send it
//! over HTTP and decode either a success payload or a structured error.
//! Implementations are interchangeable and chosen once, from configuration;
//! the router never inspects payloads to decide which one it is talking to.
//!
//! ```text
//! ┌──────────────┐   execute(&Request)   ┌──────────────────────────┐
//! │ ActionRouter │ ────────────────────▶ │ dyn TransportPort        │
//! └──────────────┘ ◀──────────────────── │  ├─ typed query          │
//!                  RawPayload | Error    │  ├─ call (sync JSON)     │
//!                                        │  └─ call (SSE-capable)   │
//!                                        └──────────────────────────┘
//! ```

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// Decoded top-level success payload, before extraction
pub type RawPayload = Value;

/// Protocol family a transport speaks.
///
/// Determines how the router builds requests: the typed-query family takes a
/// query document plus variables, the remote-call family takes a remote tool
/// name plus arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireProtocol {
    TypedQuery,
    RemoteCall,
}

impl WireProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            WireProtocol::TypedQuery => "typed-query",
            WireProtocol::RemoteCall => "remote-call",
        }
    }
}

impl std::fmt::Display for WireProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transport-neutral request: an operation plus its parameters.
///
/// For the typed-query family `operation` is the query document and `params`
/// are its variables; for the call family `operation` is the remote tool name
/// and `params` its arguments. Built fresh per call and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    operation: String,
    params: Map<String, Value>,
}

impl Request {
    pub fn new(operation: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            operation: operation.into(),
            params,
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }
}

/// Domain-level failure reported by the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// First entry of a typed-query `errors` array
    Query { message: String },
    /// JSON-RPC `error` object
    Call { code: i64, message: String },
    /// Call result flagged `isError`, with its text content joined
    Tool { message: String },
}

impl RemoteError {
    /// Message exactly as the service sent it
    pub fn message(&self) -> &str {
        match self {
            RemoteError::Query { message }
            | RemoteError::Call { message, .. }
            | RemoteError::Tool { message } => message,
        }
    }
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteError::Query { message } => write!(f, "graphql error: {}", message),
            RemoteError::Call { code, message } => write!(f, "remote error {}: {}", code, message),
            RemoteError::Tool { message } => write!(f, "tool error: {}", message),
        }
    }
}

/// Errors produced by a transport.
///
/// Everything except [`TransportError::Remote`] means the exchange itself
/// failed; `Remote` means the service answered and reported an error.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("execute request: {0}")]
    Request(String),

    #[error("read response: {0}")]
    Read(String),

    #[error("decode response: {0}")]
    Decode(String),

    #[error("no data in SSE stream")]
    EmptyStream,

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("request cancelled")]
    Cancelled,

    #[error("{0}")]
    Remote(RemoteError),
}

impl TransportError {
    /// Error reported in a typed-query response
    pub fn query(message: impl Into<String>) -> Self {
        Self::Remote(RemoteError::Query {
            message: message.into(),
        })
    }

    /// Error object of a call envelope
    pub fn call(code: i64, message: impl Into<String>) -> Self {
        Self::Remote(RemoteError::Call {
            code,
            message: message.into(),
        })
    }

    /// Call result that flagged itself as an error
    pub fn tool(message: impl Into<String>) -> Self {
        Self::Remote(RemoteError::Tool {
            message: message.into(),
        })
    }

    /// Whether the service answered with a domain error
    pub fn is_remote(&self) -> bool {
        matches!(self, TransportError::Remote(_))
    }
}

/// Port for executing one request against the remote service.
#[async_trait]
pub trait TransportPort: Send + Sync {
    /// Short identifier for logs (e.g. "typed-query", "streaming-call")
    fn name(&self) -> &str;

    /// Protocol family used to build requests for this transport
    fn protocol(&self) -> WireProtocol;

    /// Execute one round trip.
    ///
    /// Dropping the returned future aborts the in-flight exchange.
    async fn execute(&self, request: &Request) -> Result<RawPayload, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_remote_error_display() {
        let err = TransportError::query("boom");
        assert_eq!(err.to_string(), "graphql error: boom");
        assert!(err.is_remote());

        let err = TransportError::call(-32602, "invalid params");
        assert_eq!(err.to_string(), "remote error -32602: invalid params");

        let err = TransportError::tool("document not found");
        assert_eq!(err.to_string(), "tool error: document not found");
    }

    #[test]
    fn test_http_error_display_carries_status_and_body() {
        let err = TransportError::Http {
            status: 502,
            body: "upstream down".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 502: upstream down");
        assert!(!err.is_remote());
    }

    #[test]
    fn test_request_accessors() {
        let mut params = Map::new();
        params.insert("query".to_string(), json!("rust"));
        let request = Request::new("keyword_search", params);

        assert_eq!(request.operation(), "keyword_search");
        assert_eq!(request.param("query"), Some(&json!("rust")));
        assert!(request.param("content").is_none());
    }
}
