use std::sync::{Arc, Mutex, PoisonError};

use crate::output::{ByteSink, WriteReport};

/// In-memory sink that accepts every write and remembers each payload.
///
/// Clones share the same record, so a test can hand one clone to a printer
/// and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    calls: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads of every write, in call order.
    pub fn calls(&self) -> Vec<Vec<u8>> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&calls.concat()).into_owned()
    }
}

impl ByteSink for MemorySink {
    fn write(&self, bytes: &[u8]) -> WriteReport {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(bytes.to_vec());
        WriteReport::ok(isize::try_from(bytes.len()).unwrap_or(isize::MAX))
    }
}
