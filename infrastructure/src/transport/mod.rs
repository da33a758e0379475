//! HTTP transports
//!
//! Adapters implementing [`TransportPort`] for the three supported backend
//! protocols. Exactly one is constructed per process, from configuration:
//!
//! | Protocol | Adapter | Request | Response |
//! |----------|---------|---------|----------|
//! | `typed_query` | [`TypedQueryTransport`] | `{query, variables}` | `{data, errors?}` |
//! | `call` | [`SyncCallTransport`] | JSON-RPC or bare envelope | `{result, error?}` |
//! | `streaming_call` | [`StreamingCallTransport`] | same, accepts SSE | envelope or last `data:` line |

mod call;
mod http;
pub mod sse;
mod streaming_call;
mod sync_call;
mod typed_query;

#[cfg(test)]
pub(crate) mod test_server;

pub use call::{CallFraming, decode_call_envelope};
pub use http::HttpSettings;
pub use streaming_call::StreamingCallTransport;
pub use sync_call::SyncCallTransport;
pub use typed_query::{TypedQueryTransport, decode_typed_query};

use crate::config::{BackendProtocol, FileBackendConfig};
use kbridge_application::{TransportError, TransportPort};
use std::sync::Arc;
use tracing::info;

/// Construct the transport selected by `config.protocol`.
pub fn build_transport(
    config: &FileBackendConfig,
) -> Result<Arc<dyn TransportPort>, TransportError> {
    let settings = HttpSettings::from_backend(config);
    info!(
        "Using {} backend ({}) at {}",
        config.protocol,
        config.protocol.wire_protocol(),
        settings.endpoint
    );

    Ok(match config.protocol {
        BackendProtocol::TypedQuery => Arc::new(TypedQueryTransport::new(settings)?),
        BackendProtocol::Call => Arc::new(SyncCallTransport::new(settings, config.framing)?),
        BackendProtocol::StreamingCall => {
            Arc::new(StreamingCallTransport::new(settings, config.framing)?)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kbridge_application::WireProtocol;

    #[test]
    fn test_build_transport_follows_protocol() {
        let mut config = FileBackendConfig {
            endpoint: "http://127.0.0.1:1/api".to_string(),
            ..Default::default()
        };

        let transport = build_transport(&config).unwrap();
        assert_eq!(transport.name(), "typed-query");
        assert_eq!(transport.protocol(), WireProtocol::TypedQuery);

        config.protocol = BackendProtocol::Call;
        assert_eq!(build_transport(&config).unwrap().name(), "call");

        config.protocol = BackendProtocol::StreamingCall;
        let transport = build_transport(&config).unwrap();
        assert_eq!(transport.name(), "streaming-call");
        assert_eq!(transport.protocol(), WireProtocol::RemoteCall);
    }
}
