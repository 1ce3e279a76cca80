//! In-memory sink for capturing formatter output in tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory output buffer.
///
/// Clones share the same buffer, so a test can keep one clone and hand a
/// [`Sink::memory`](super::Sink::memory) to the formatter.
#[derive(Debug, Clone, Default)]
pub struct InMemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl InMemorySink {
    /// Create a new empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the contents of the sink as bytes.
    pub fn contents(&self) -> Vec<u8> {
        self.buf.lock().map(|b| b.clone()).unwrap_or_default()
    }

    /// Get the contents of the sink as a string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Clear the sink contents.
    pub fn clear(&self) {
        if let Ok(mut buf) = self.buf.lock() {
            buf.clear();
        }
    }

    pub(crate) fn handle(&self) -> InMemoryWriteHandle {
        InMemoryWriteHandle {
            buf: self.buf.clone(),
        }
    }
}

/// Write handle for in-memory sink.
pub(crate) struct InMemoryWriteHandle {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for InMemoryWriteHandle {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .buf
            .lock()
            .map_err(|_| io::Error::other("in-memory sink poisoned"))?;
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
