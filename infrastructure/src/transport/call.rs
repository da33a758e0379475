//! Call envelope encoding and decoding, shared by both call transports.
//!
//! Request framing:
//!
//! | Framing | Body |
//! |---------|------|
//! | `json_rpc` | `{"jsonrpc":"2.0","id":N,"method":"tools/call","params":{"name":op,"arguments":{..}}}` |
//! | `bare` | `{"method":op,"params":{..}}` |
//!
//! Responses are `{result, error?}` either way. A `result` flagged
//! `isError: true` is a tool-level failure whose text content is the message.

use kbridge_application::{RawPayload, Request, TransportError};
use kbridge_domain::document::content_texts;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicU64, Ordering};

const TOOLS_CALL: &str = "tools/call";

/// How call requests are framed on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallFraming {
    /// JSON-RPC 2.0 `tools/call`
    #[default]
    JsonRpc,
    /// Plain `{method, params}`
    Bare,
}

/// Builds request bodies, numbering JSON-RPC ids per client
#[derive(Debug)]
pub(crate) struct CallEncoder {
    framing: CallFraming,
    next_id: AtomicU64,
}

impl CallEncoder {
    pub fn new(framing: CallFraming) -> Self {
        Self {
            framing,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn encode(&self, request: &Request) -> Value {
        match self.framing {
            CallFraming::JsonRpc => json!({
                "jsonrpc": "2.0",
                "id": self.next_id.fetch_add(1, Ordering::Relaxed),
                "method": TOOLS_CALL,
                "params": {
                    "name": request.operation(),
                    "arguments": request.params(),
                },
            }),
            CallFraming::Bare => json!({
                "method": request.operation(),
                "params": request.params(),
            }),
        }
    }
}

#[derive(Deserialize)]
struct CallResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<CallErrorObject>,
}

#[derive(Deserialize)]
struct CallErrorObject {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// Decode a `{result, error?}` envelope into its `result` payload.
pub fn decode_call_envelope(body: &str) -> Result<RawPayload, TransportError> {
    let response: CallResponse =
        serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))?;

    if let Some(error) = response.error {
        return Err(TransportError::call(error.code, error.message));
    }

    let result = response.result.unwrap_or(Value::Null);
    if result.get("isError").and_then(Value::as_bool) == Some(true) {
        let message = content_texts(&result)
            .map(|texts| texts.join("\n"))
            .unwrap_or_default();
        return Err(TransportError::tool(message));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn search_request() -> Request {
        let mut params = Map::new();
        params.insert("query".to_string(), json!("rust"));
        Request::new("keyword_search", params)
    }

    #[test]
    fn test_json_rpc_framing_numbers_ids() {
        let encoder = CallEncoder::new(CallFraming::JsonRpc);
        let first = encoder.encode(&search_request());
        let second = encoder.encode(&search_request());

        assert_eq!(first["jsonrpc"], "2.0");
        assert_eq!(first["method"], "tools/call");
        assert_eq!(first["params"]["name"], "keyword_search");
        assert_eq!(first["params"]["arguments"]["query"], "rust");
        assert_eq!(first["id"], 1);
        assert_eq!(second["id"], 2);
    }

    #[test]
    fn test_bare_framing() {
        let body = CallEncoder::new(CallFraming::Bare).encode(&search_request());
        assert_eq!(body, json!({"method": "keyword_search", "params": {"query": "rust"}}));
    }

    #[test]
    fn test_decode_result() {
        let payload =
            decode_call_envelope(r#"{"jsonrpc":"2.0","id":1,"result":{"content":[]}}"#).unwrap();
        assert_eq!(payload, json!({"content": []}));
    }

    #[test]
    fn test_decode_error_object() {
        let err = decode_call_envelope(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"method not found"}}"#,
        )
        .unwrap_err();
        assert!(err.is_remote());
        assert_eq!(err.to_string(), "remote error -32601: method not found");
    }

    #[test]
    fn test_decode_is_error_result() {
        let err = decode_call_envelope(
            r#"{"result":{"isError":true,"content":[{"type":"text","text":"doc missing"},{"type":"text","text":"try again"}]}}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "tool error: doc missing\ntry again");
    }

    #[test]
    fn test_decode_missing_result_is_null() {
        assert_eq!(decode_call_envelope(r#"{"id":3}"#).unwrap(), Value::Null);
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(
            decode_call_envelope("not json"),
            Err(TransportError::Decode(_))
        ));
    }
}
