//! Loopback HTTP server for transport tests.
//!
//! Serves exactly one canned response and hands back what the client sent.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub(crate) struct CannedResponse {
    status: u16,
    content_type: &'static str,
    body: String,
    declared_length: Option<usize>,
}

impl CannedResponse {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.into(),
            declared_length: None,
        }
    }

    pub fn event_stream(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: "text/event-stream",
            body: body.into(),
            declared_length: None,
        }
    }

    /// Announce a longer body than is sent, so the client's body read fails
    pub fn declaring_length(mut self, length: usize) -> Self {
        self.declared_length = Some(length);
        self
    }
}

/// Request as received by the server
pub(crate) struct SeenRequest {
    pub head: String,
    pub body: String,
}

pub(crate) struct TestServer {
    pub url: String,
    handle: JoinHandle<SeenRequest>,
}

impl TestServer {
    pub async fn request(self) -> SeenRequest {
        self.handle.await.unwrap()
    }
}

pub(crate) async fn serve_once(response: CannedResponse) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/api", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let seen = read_request(&mut socket).await;

        let reply = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            response.status,
            reason(response.status),
            response.content_type,
            response.declared_length.unwrap_or(response.body.len()),
            response.body
        );
        socket.write_all(reply.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        seen
    });

    TestServer { url, handle }
}

/// Accepts connections and never answers
pub(crate) async fn serve_silently() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/api", listener.local_addr().unwrap());

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    url
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> SeenRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = find_header_end(&buf) {
            let head = String::from_utf8_lossy(&buf[..end]).to_string();
            let length = content_length(&head);
            if buf.len() >= end + 4 + length {
                return SeenRequest {
                    head,
                    body: String::from_utf8_lossy(&buf[end + 4..end + 4 + length]).to_string(),
                };
            }
        }
    }

    SeenRequest {
        head: String::from_utf8_lossy(&buf).to_string(),
        body: String::new(),
    }
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Status",
    }
}
