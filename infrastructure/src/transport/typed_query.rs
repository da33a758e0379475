//! Typed-query (GraphQL) transport.
//!
//! `POST {query, variables}` → `{data, errors?}`. A non-empty `errors` array
//! fails the call with the first message; otherwise `data` is the payload.

use super::http::{HttpClient, HttpSettings};
use async_trait::async_trait;
use kbridge_application::{RawPayload, Request, TransportError, TransportPort, WireProtocol};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

#[derive(Serialize)]
struct QueryBody<'a> {
    query: &'a str,
    variables: &'a Map<String, Value>,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<QueryErrorEntry>>,
}

#[derive(Deserialize)]
struct QueryErrorEntry {
    #[serde(default)]
    message: String,
}

/// Decode a typed-query response body into its `data` payload.
///
/// A missing or `null` `data` without errors decodes to JSON `null`.
pub fn decode_typed_query(body: &str) -> Result<RawPayload, TransportError> {
    let response: QueryResponse =
        serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))?;

    if let Some(first) = response.errors.as_ref().and_then(|errors| errors.first()) {
        return Err(TransportError::query(first.message.clone()));
    }

    Ok(response.data.unwrap_or(Value::Null))
}

/// Transport for a GraphQL-style endpoint
#[derive(Debug, Clone)]
pub struct TypedQueryTransport {
    http: HttpClient,
}

impl TypedQueryTransport {
    pub fn new(settings: HttpSettings) -> Result<Self, TransportError> {
        Ok(Self {
            http: HttpClient::new(settings)?,
        })
    }
}

#[async_trait]
impl TransportPort for TypedQueryTransport {
    fn name(&self) -> &str {
        "typed-query"
    }

    fn protocol(&self) -> WireProtocol {
        WireProtocol::TypedQuery
    }

    async fn execute(&self, request: &Request) -> Result<RawPayload, TransportError> {
        let body = QueryBody {
            query: request.operation(),
            variables: request.params(),
        };
        debug!(
            "POST {} ({} variable(s))",
            self.http.endpoint(),
            request.params().len()
        );

        let response = self.http.send(self.http.post().json(&body)).await?;
        let text = self.http.text(response).await?;
        decode_typed_query(&text)
    }
}
