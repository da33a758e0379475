//! Synchronous call transport: one JSON request, one JSON envelope back.

use super::call::{CallEncoder, CallFraming, decode_call_envelope};
use super::http::{HttpClient, HttpSettings};
use async_trait::async_trait;
use kbridge_application::{RawPayload, Request, TransportError, TransportPort, WireProtocol};
use tracing::debug;

#[derive(Debug)]
pub struct SyncCallTransport {
    http: HttpClient,
    encoder: CallEncoder,
}

impl SyncCallTransport {
    pub fn new(settings: HttpSettings, framing: CallFraming) -> Result<Self, TransportError> {
        Ok(Self {
            http: HttpClient::new(settings)?,
            encoder: CallEncoder::new(framing),
        })
    }
}

#[async_trait]
impl TransportPort for SyncCallTransport {
    fn name(&self) -> &str {
        "call"
    }

    fn protocol(&self) -> WireProtocol {
        WireProtocol::RemoteCall
    }

    async fn execute(&self, request: &Request) -> Result<RawPayload, TransportError> {
        let body = self.encoder.encode(request);
        debug!("POST {} call {}", self.http.endpoint(), request.operation());

        let response = self.http.send(self.http.post().json(&body)).await?;
        let text = self.http.text(response).await?;
        decode_call_envelope(&text)
    }
}
