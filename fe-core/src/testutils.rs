//! Helpers for tests in this and downstream crates.
use std::io::{
    self,
    Write,
};
use std::sync::{
    Arc,
    Mutex,
};

/// In-memory log sink; clones share one buffer, so a clone can be handed to a subscriber as its
/// writer while the test keeps another to read back.
#[derive(Clone, Debug, Default)]
pub struct CapturedWriter {
    /// Everything written so far.
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedWriter {
    /// Captured output, lossily decoded.
    ///
    /// # Panics
    ///
    /// If a writer panicked while holding the buffer.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .map_err(|_| io::Error::other("captured writer poisoned"))?
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
