//! Server-Sent Events body scanning.
//!
//! Only the payload of the last `data: ` line matters; earlier events are
//! progress noise. No reconnection or event-id semantics.

const DATA_PREFIX: &str = "data: ";

/// Incremental forward scan over an SSE body that remembers the last
/// `data: ` payload.
///
/// Chunks may split lines (and UTF-8 sequences) anywhere; bytes are buffered
/// until a newline arrives.
#[derive(Debug, Default)]
pub struct LastDataScanner {
    pending: Vec<u8>,
    last: Option<String>,
    events: usize,
}

impl LastDataScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next chunk of the body
    pub fn push(&mut self, chunk: &[u8]) {
        self.pending.extend_from_slice(chunk);
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            self.observe(&line);
        }
    }

    /// Number of `data: ` lines seen so far
    pub fn events(&self) -> usize {
        self.events
    }

    /// Flush the trailing partial line and return the last payload
    pub fn finish(mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.pending);
        self.observe(&rest);
        self.last
    }

    fn observe(&mut self, raw: &[u8]) {
        let line = String::from_utf8_lossy(raw);
        let line = line.trim_end_matches(['\n', '\r']);
        if let Some(data) = line.strip_prefix(DATA_PREFIX) {
            self.last = Some(data.to_string());
            self.events += 1;
        }
    }
}

/// Payload of the last `data: ` line of a complete SSE body
pub fn last_data_payload(body: &str) -> Option<String> {
    let mut scanner = LastDataScanner::new();
    scanner.push(body.as_bytes());
    scanner.finish()
}
