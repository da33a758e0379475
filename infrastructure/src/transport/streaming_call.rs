//! SSE-capable call transport.
//!
//! Sends the same envelope as the synchronous call transport but advertises
//! `text/event-stream`. When the service answers with an event stream the
//! body is scanned forward and only the last `data: ` payload is decoded;
//! any other content type is decoded as a plain envelope.

use super::call::{CallEncoder, CallFraming, decode_call_envelope};
use super::http::{HttpClient, HttpSettings, is_event_stream};
use super::sse::LastDataScanner;
use async_trait::async_trait;
use futures::StreamExt;
use kbridge_application::{RawPayload, Request, TransportError, TransportPort, WireProtocol};
use reqwest::header::ACCEPT;
use tracing::debug;

const ACCEPT_BOTH: &str = "application/json, text/event-stream";

#[derive(Debug)]
pub struct StreamingCallTransport {
    http: HttpClient,
    encoder: CallEncoder,
}

impl StreamingCallTransport {
    pub fn new(settings: HttpSettings, framing: CallFraming) -> Result<Self, TransportError> {
        Ok(Self {
            http: HttpClient::new(settings)?,
            encoder: CallEncoder::new(framing),
        })
    }

    async fn read_event_stream(
        &self,
        response: reqwest::Response,
    ) -> Result<String, TransportError> {
        let mut scanner = LastDataScanner::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(|e| self.http.classify(e, TransportError::Read))?;
            scanner.push(&bytes);
        }

        debug!("SSE body carried {} data event(s)", scanner.events());
        scanner.finish().ok_or(TransportError::EmptyStream)
    }
}

#[async_trait]
impl TransportPort for StreamingCallTransport {
    fn name(&self) -> &str {
        "streaming-call"
    }

    fn protocol(&self) -> WireProtocol {
        WireProtocol::RemoteCall
    }

    async fn execute(&self, request: &Request) -> Result<RawPayload, TransportError> {
        let body = self.encoder.encode(request);
        debug!("POST {} call {}", self.http.endpoint(), request.operation());

        let builder = self.http.post().header(ACCEPT, ACCEPT_BOTH).json(&body);
        let response = self.http.send(builder).await?;

        let text = if is_event_stream(&response) {
            self.read_event_stream(response).await?
        } else {
            self.http.text(response).await?
        };
        decode_call_envelope(&text)
    }
}
