//! Response body accumulation

use crate::{Error, Result};
use log::debug;

/// Accumulates an HTTP response body of unknown total length, delivered in
/// arbitrarily sized chunks, into one contiguous buffer.
///
/// Chunk boundaries are decided by the transport layer; the only contract
/// here is byte-exact reconstruction in arrival order.
#[derive(Debug, Default)]
pub struct ResponseBuffer {
    data: Vec<u8>,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one chunk at the current end of the buffer.
    pub fn append(&mut self, chunk: &[u8]) {
        self.data.extend_from_slice(chunk);
        debug!(
            "Received {} bytes from API, total size: {}",
            chunk.len(),
            self.data.len()
        );
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Finalize the transfer and hand the body over as text.
    pub fn into_text(self) -> Result<String> {
        String::from_utf8(self.data).map_err(|e| Error::InvalidResponse {
            reason: format!("response body is not valid UTF-8: {}", e),
        })
    }

    /// Finalize as text for diagnostics, replacing invalid bytes instead of
    /// failing. Used for error bodies that are only ever shown to the user.
    pub fn into_text_lossy(self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}
